// ╔══════════════════════════════════════════════════════════════════════════════╗
// ║                               PNGPARAM                                       ║
// ║                  Generation Parameters Reader for PNG Files                  ║
// ╚══════════════════════════════════════════════════════════════════════════════╝
//
// 🎯 PROJECT GOAL
// ---------------
// Image generators like to stash the prompt, seed, sampler and friends inside
// the PNG they produce, in a text chunk keyed "parameters". This tool digs
// that text back out, for one file or a whole folder of renders, as plain
// text or as JSON for further processing.
//
// 📦 HOW IT WORKS
// ---------------
//   [Signature] [IHDR] [chunk] [chunk] ... [tEXt/iTXt "parameters"] ... [IEND]
//
// The scanner checks the signature, jumps over IHDR, then hops from chunk to
// chunk using the declared lengths until it hits the parameters chunk or IEND.
// Pixel data is never decoded and CRCs are never checked, so scanning is one
// pass of tiny reads and seeks per file.
//
// 🛡️ FAILURE MODEL
// ----------------
// - A file either has parameters or it doesn't. Missing files, non-PNGs,
//   truncated streams and compressed iTXt chunks all count as "doesn't".
// - One bad file never stops the batch.
// - Use --verbose to see why a file was passed over.
//
// ══════════════════════════════════════════════════════════════════════════════

use std::path::PathBuf;
use std::process::ExitCode;
use clap::{ArgGroup, CommandFactory, Parser};
use clap::error::Error as ClapError;
use pngparam::logger::{log, set_verbose, LogLevel};
use pngparam::{run, JsonReporter, PlainReporter, Source};

/// Print the generation parameters embedded in PNG images
#[derive(Parser)]
#[command(name = "pngparam")]
#[command(version)]
#[command(about = "Read the \"parameters\" text chunk from PNG images", long_about = None)]
#[command(arg_required_else_help = true)]
#[command(group(ArgGroup::new("input").required(true).args(["files", "dirs", "recursive"])))]
struct Cli {
	/// Print results as a JSON array of {filename, parameters}
	#[arg(long)]
	json: bool,

	/// Log skipped files and the reason to stderr
	#[arg(short, long)]
	verbose: bool,

	/// Scan the .png files directly inside these directories
	#[arg(short = 'd', long = "dir", value_name = "DIR", num_args = 1..)]
	dirs: Vec<PathBuf>,

	/// Scan the .png files anywhere below these directories
	#[arg(short = 'r', long, value_name = "DIR", num_args = 1..)]
	recursive: Vec<PathBuf>,

	/// PNG files to read
	#[arg(value_name = "PNGFILE")]
	files: Vec<PathBuf>,
}

impl Cli {
	fn source(self) -> Source {
		if !self.dirs.is_empty() {
			Source::Flat(self.dirs)
		} else if !self.recursive.is_empty() {
			Source::Recursive(self.recursive)
		} else {
			Source::Files(self.files)
		}
	}
}

/// Error text for a rejected command line, always ending with the usage
/// lines so the user sees how to call the tool.
fn explain(error: &ClapError) -> String {
	let mut text = error.render().to_string();
	if !text.contains("Usage:") {
		text.push_str(&format!("\n{}\n", Cli::command().render_usage()));
	}
	text
}

fn main() -> ExitCode {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		// --help and --version
		Err(e) if !e.use_stderr() => e.exit(),
		Err(e) => {
			eprint!("{}", explain(&e));
			return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
		}
	};
	set_verbose(cli.verbose);

	let json = cli.json;
	let source = cli.source();
	let stdout = std::io::stdout().lock();

	let result = if json {
		run(&source, &mut JsonReporter::new(stdout))
	} else {
		run(&source, &mut PlainReporter::new(stdout))
	};

	match result {
		Ok((scanned, found)) => {
			log(LogLevel::Success, &format!("Scanned {} file(s), {} with parameters.", scanned, found));
			ExitCode::SUCCESS
		}
		Err(e) => {
			log(LogLevel::Error, &format!("Failed to write output: {}", e));
			ExitCode::FAILURE
		}
	}
}
