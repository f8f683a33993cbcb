// ══════════════════════════════════════════════════════════════════════════════
// WALK MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Turns the command line input (explicit files, directories, or directory
// trees) into a lazy stream of paths for the scanner. Directory entries come
// back in whatever order the filesystem hands them out; nothing is sorted.
// A directory that can't be read is reported and skipped.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use crate::constants::PNG_EXTENSION;
use crate::logger::{log, LogLevel};

/// Where the files to scan come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
	/// Taken as given, no extension filter.
	Files(Vec<PathBuf>),
	/// `.png` files directly inside each directory.
	Flat(Vec<PathBuf>),
	/// `.png` files anywhere below each directory.
	Recursive(Vec<PathBuf>),
}

impl Source {
	/// Paths to scan, in argument order then traversal order.
	pub fn paths(&self) -> Box<dyn Iterator<Item = PathBuf> + '_> {
		match self {
			Source::Files(files) => Box::new(files.iter().cloned()),
			Source::Flat(dirs) => Box::new(dirs.iter().flat_map(|dir| flat(dir))),
			Source::Recursive(dirs) => Box::new(dirs.iter().flat_map(|dir| recursive(dir))),
		}
	}
}

fn is_png(path: &Path) -> bool {
	path.extension().is_some_and(|ext| ext == PNG_EXTENSION)
}

fn flat(dir: &Path) -> Box<dyn Iterator<Item = PathBuf>> {
	let entries = match fs::read_dir(dir) {
		Ok(entries) => entries,
		Err(e) => {
			log(LogLevel::Warning, &format!("Cannot read directory '{}': {}", dir.display(), e));
			return Box::new(std::iter::empty());
		}
	};

	let dir = dir.to_path_buf();
	Box::new(entries.filter_map(move |entry| match entry {
		Ok(entry) => Some(entry.path()).filter(|p| is_png(p)),
		Err(e) => {
			log(LogLevel::Warning, &format!("Skipping entry in '{}': {}", dir.display(), e));
			None
		}
	}))
}

fn recursive(dir: &Path) -> impl Iterator<Item = PathBuf> {
	WalkDir::new(dir)
		.into_iter()
		.filter_map(|entry| match entry {
			Ok(entry) => Some(entry.into_path()).filter(|p| is_png(p)),
			Err(e) => {
				log(LogLevel::Warning, &format!("Skipping during walk: {}", e));
				None
			}
		})
}
