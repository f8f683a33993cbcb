// ══════════════════════════════════════════════════════════════════════════════
// REPORT MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Renders extraction results. Two flavours:
//   plain: "> <file>" followed by the raw parameters text
//   json:  one array of {"filename", "parameters"} objects
// Both write each result as soon as it is handed over, so long directory
// scans show output while they are still running. Files without parameters
// never reach the reporter.

use std::io::Write;
use std::path::Path;
use serde::Serialize;

pub trait Reporter {
	fn begin(&mut self) -> std::io::Result<()>;
	fn entry(&mut self, path: &Path, parameters: &[u8]) -> std::io::Result<()>;
	fn finish(&mut self) -> std::io::Result<()>;
}

pub struct PlainReporter<W: Write> {
	out: W,
}

impl<W: Write> PlainReporter<W> {
	pub fn new(out: W) -> Self {
		Self { out }
	}

	#[cfg(test)]
	pub fn into_inner(self) -> W {
		self.out
	}
}

impl<W: Write> Reporter for PlainReporter<W> {
	fn begin(&mut self) -> std::io::Result<()> {
		Ok(())
	}

	fn entry(&mut self, path: &Path, parameters: &[u8]) -> std::io::Result<()> {
		// raw path bytes, so odd filenames come out exactly as on disk
		self.out.write_all(b"> ")?;
		self.out.write_all(path.as_os_str().as_encoded_bytes())?;
		self.out.write_all(b"\n")?;
		self.out.write_all(parameters)?;
		self.out.write_all(b"\n")?;
		self.out.flush()
	}

	fn finish(&mut self) -> std::io::Result<()> {
		self.out.flush()
	}
}

#[derive(Serialize)]
struct Entry<'a> {
	filename: &'a str,
	parameters: &'a str,
}

pub struct JsonReporter<W: Write> {
	out: W,
	written: usize,
}

impl<W: Write> JsonReporter<W> {
	pub fn new(out: W) -> Self {
		Self { out, written: 0 }
	}

	#[cfg(test)]
	pub fn into_inner(self) -> W {
		self.out
	}
}

impl<W: Write> Reporter for JsonReporter<W> {
	fn begin(&mut self) -> std::io::Result<()> {
		self.out.write_all(b"[\n")
	}

	fn entry(&mut self, path: &Path, parameters: &[u8]) -> std::io::Result<()> {
		if self.written > 0 {
			self.out.write_all(b",")?;
		}
		let filename = path.to_string_lossy();
		let parameters = String::from_utf8_lossy(parameters);
		let entry = Entry { filename: &filename, parameters: &parameters };
		serde_json::to_writer(&mut self.out, &entry)?;
		self.out.write_all(b"\n")?;
		self.written += 1;
		self.out.flush()
	}

	fn finish(&mut self) -> std::io::Result<()> {
		self.out.write_all(b"]\n")?;
		self.out.flush()
	}
}
