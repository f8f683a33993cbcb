// ══════════════════════════════════════════════════════════════════════════════
// I/O MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Shared I/O utilities used by the chunk scanner. Reads fixed-size fields and
// jumps over bytes we don't care about.

use std::io::{Read, Seek, SeekFrom};

/// Reads exactly `N` bytes into a fixed-size array.
pub fn read_array<const N: usize, R: Read>(reader: &mut R) -> std::io::Result<[u8; N]> {
	let mut buf = [0u8; N];
	reader.read_exact(&mut buf)?;
	Ok(buf)
}

/// Reads exactly `len` bytes into an owned buffer.
pub fn read_vec<R: Read>(reader: &mut R, len: u64) -> std::io::Result<Vec<u8>> {
	let mut buf = Vec::new();
	let n = reader.by_ref().take(len).read_to_end(&mut buf)?;
	if (n as u64) < len {
		return Err(std::io::ErrorKind::UnexpectedEof.into());
	}
	Ok(buf)
}

/// Moves the cursor `len` bytes forward from the current position.
pub fn skip<S: Seek>(stream: &mut S, len: u64) -> std::io::Result<u64> {
	let offset = i64::try_from(len).map_err(|_| std::io::Error::from(std::io::ErrorKind::InvalidInput))?;
	stream.seek(SeekFrom::Current(offset))
}
