// ══════════════════════════════════════════════════════════════════════════════
// SCAN MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Walks the chunk structure of a PNG stream looking for the text chunk whose
// keyword is "parameters" (the generation settings many image tools embed).
// Only two text layouts are understood:
//   tEXt: [keyword 11] [value ...]
//   iTXt: [keyword 11] [flags/markers 4 = 00 00 00 00] [value ...]
// Everything else is skipped by its declared length. Any read failure along
// the way means "no parameters"; callers never see a distinct error.

use std::fmt;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use crate::constants::{
	PNG_SIGNATURE, IHDR_SIZE, CHUNK_CRC_SIZE, KEYWORD_SIZE, PARAMETERS_KEYWORD,
	ITXT_MARKER, TEXT_CHUNK, ITXT_CHUNK, IEND_TYPE,
};
use crate::io::{read_array, read_vec, skip};

/// Why a file yielded no parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Miss {
	/// Opening the file failed; carries the OS error text.
	Unreadable(String),
	NotPng,
	/// iTXt "parameters" chunk that is compressed or language-tagged.
	Unsupported,
	NoParameters,
	Truncated,
}

impl fmt::Display for Miss {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let reason = match self {
			Miss::Unreadable(error) => return write!(f, "cannot open file ({})", error),
			Miss::NotPng => "not a PNG file",
			Miss::Unsupported => "parameters stored in a compressed or tagged iTXt chunk",
			Miss::NoParameters => "no parameters chunk",
			Miss::Truncated => "chunk stream ended unexpectedly",
		};
		f.write_str(reason)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scan {
	Found(Vec<u8>),
	Missing(Miss),
}

impl Scan {
	pub fn into_value(self) -> Option<Vec<u8>> {
		match self {
			Scan::Found(value) => Some(value),
			Scan::Missing(_) => None,
		}
	}
}

/// Result of looking at a single chunk.
enum Step {
	Next,
	Done(Scan),
}

/// Extracts the "parameters" text from a PNG stream, if present.
pub fn extract<R: Read + Seek>(stream: &mut R) -> Option<Vec<u8>> {
	scan(stream).into_value()
}

/// Opens `path` and scans it. The handle is dropped before returning.
pub fn extract_file(path: &Path) -> Scan {
	let mut file = match File::open(path) {
		Ok(f) => f,
		Err(e) => return Scan::Missing(Miss::Unreadable(e.to_string())),
	};
	scan(&mut file)
}

/// Same as [`extract`] but keeps the reason for a miss.
pub fn scan<R: Read + Seek>(stream: &mut R) -> Scan {
	if stream.rewind().is_err() {
		return Scan::Missing(Miss::NotPng);
	}
	match read_array::<8, _>(stream) {
		Ok(sig) if sig == PNG_SIGNATURE => {}
		_ => return Scan::Missing(Miss::NotPng),
	}

	// IHDR is always first and always the same size
	if skip(stream, IHDR_SIZE).is_err() {
		return Scan::Missing(Miss::Truncated);
	}

	loop {
		match step(stream) {
			Ok(Step::Next) => continue,
			Ok(Step::Done(result)) => return result,
			Err(_) => return Scan::Missing(Miss::Truncated),
		}
	}
}

/// Reads one chunk header and either finishes the scan or leaves the cursor
/// at the start of the next chunk.
fn step<R: Read + Seek>(stream: &mut R) -> std::io::Result<Step> {
	let length = u64::from(u32::from_be_bytes(read_array(stream)?));
	let kind: [u8; 4] = read_array(stream)?;
	let body = stream.stream_position()?;

	match kind {
		TEXT_CHUNK => {
			if is_parameters(stream)? {
				let remaining = shrink(length, KEYWORD_SIZE)?;
				return Ok(Step::Done(Scan::Found(read_vec(stream, remaining)?)));
			}
		}
		ITXT_CHUNK => {
			if is_parameters(stream)? {
				let marker: [u8; 4] = read_array(stream)?;
				let remaining = shrink(length, KEYWORD_SIZE + marker.len())?;
				if marker != ITXT_MARKER {
					return Ok(Step::Done(Scan::Missing(Miss::Unsupported)));
				}
				return Ok(Step::Done(Scan::Found(read_vec(stream, remaining)?)));
			}
		}
		IEND_TYPE => return Ok(Step::Done(Scan::Missing(Miss::NoParameters))),
		_ => {}
	}

	// Keyword reads may run past a short payload into the CRC or the next
	// chunk, so always jump relative to the end of the type tag.
	stream.seek(SeekFrom::Start(body + length + CHUNK_CRC_SIZE))?;
	Ok(Step::Next)
}

/// Consumes the fixed keyword field and compares it with "parameters".
fn is_parameters<R: Read>(stream: &mut R) -> std::io::Result<bool> {
	let field: [u8; KEYWORD_SIZE] = read_array(stream)?;
	Ok(field == PARAMETERS_KEYWORD)
}

/// A matched chunk too short for its own fixed fields is corrupt.
fn shrink(length: u64, consumed: usize) -> std::io::Result<u64> {
	length
		.checked_sub(consumed as u64)
		.ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidData, "chunk length shorter than its fields"))
}
