// ══════════════════════════════════════════════════════════════════════════════
// FIXTURE MODULE (tests only)
// ══════════════════════════════════════════════════════════════════════════════
//
// Builds small but structurally valid PNG byte streams for tests: signature,
// a 1x1 IHDR, whatever chunks the test asks for, and IEND. Every chunk gets
// a real CRC32 so the files also open in ordinary image tools.

#![allow(dead_code)]

use crc32fast::Hasher;

pub const SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Serializes one chunk: length, type, data, CRC over type + data.
pub fn chunk(kind: &[u8; 4], data: &[u8]) -> Vec<u8> {
	let mut hasher = Hasher::new();
	hasher.update(kind);
	hasher.update(data);

	let mut out = Vec::with_capacity(data.len() + 12);
	out.extend_from_slice(&(data.len() as u32).to_be_bytes());
	out.extend_from_slice(kind);
	out.extend_from_slice(data);
	out.extend_from_slice(&hasher.finalize().to_be_bytes());
	out
}

/// tEXt chunk: keyword, NUL, value.
pub fn text(keyword: &str, value: &[u8]) -> Vec<u8> {
	let mut data = keyword.as_bytes().to_vec();
	data.push(0);
	data.extend_from_slice(value);
	chunk(b"tEXt", &data)
}

/// iTXt chunk: keyword, NUL, the four flag/marker bytes as given, value.
pub fn itxt(keyword: &str, marker: [u8; 4], value: &[u8]) -> Vec<u8> {
	let mut data = keyword.as_bytes().to_vec();
	data.push(0);
	data.extend_from_slice(&marker);
	data.extend_from_slice(value);
	chunk(b"iTXt", &data)
}

pub fn ihdr() -> Vec<u8> {
	let mut data = Vec::with_capacity(13);
	data.extend_from_slice(&1u32.to_be_bytes());
	data.extend_from_slice(&1u32.to_be_bytes());
	// bit depth 8, RGBA, deflate, adaptive filter, no interlace
	data.extend_from_slice(&[8, 6, 0, 0, 0]);
	chunk(b"IHDR", &data)
}

pub fn iend() -> Vec<u8> {
	chunk(b"IEND", &[])
}

/// Signature + IHDR + `chunks` + IEND.
pub fn png(chunks: &[Vec<u8>]) -> Vec<u8> {
	let mut out = SIGNATURE.to_vec();
	out.extend(ihdr());
	for c in chunks {
		out.extend_from_slice(c);
	}
	out.extend(iend());
	out
}

/// Signature + IHDR + `chunks`, without the closing IEND.
pub fn unterminated(chunks: &[Vec<u8>]) -> Vec<u8> {
	let mut out = SIGNATURE.to_vec();
	out.extend(ihdr());
	for c in chunks {
		out.extend_from_slice(c);
	}
	out
}
