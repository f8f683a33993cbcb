// ══════════════════════════════════════════════════════════════════════════════
// PNGPARAM LIBRARY
// ══════════════════════════════════════════════════════════════════════════════
//
// Everything behind the command line: the chunk scanner, the file walker and
// the reporters. `extract` is the entry point for a single stream; `run`
// drives a whole batch the way the binary does.

pub mod logger;
pub mod constants;
pub mod io;
pub mod scan;
pub mod walk;
pub mod report;
#[cfg(test)]
mod fixture;

pub use report::{JsonReporter, PlainReporter, Reporter};
pub use scan::{extract, extract_file, scan, Miss, Scan};
pub use walk::Source;

use crate::logger::{log, LogLevel};

/// Scans every file from `source`, handing hits to `reporter`.
/// Returns (files scanned, files with parameters).
pub fn run(source: &Source, reporter: &mut dyn Reporter) -> std::io::Result<(usize, usize)> {
	let mut scanned = 0;
	let mut found = 0;

	reporter.begin()?;
	for path in source.paths() {
		scanned += 1;
		match extract_file(&path) {
			Scan::Found(parameters) => {
				found += 1;
				log(LogLevel::Info, &format!("{}: {} bytes of parameters", path.display(), parameters.len()));
				reporter.entry(&path, &parameters)?;
			}
			Scan::Missing(reason) => {
				log(LogLevel::Info, &format!("{}: {}", path.display(), reason));
			}
		}
	}
	reporter.finish()?;

	Ok((scanned, found))
}
