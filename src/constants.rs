// ══════════════════════════════════════════════════════════════════════════════
// CONSTANTS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Defines the fixed pieces of the PNG container that the scanner relies on.
// - PNG_SIGNATURE: first 8 bytes of every PNG stream
// - IHDR_SIZE: the header chunk we jump over without parsing
// - Chunk tags and field sizes for tEXt / iTXt / IEND

pub const PNG_SIGNATURE: [u8; 8] = [
	0x89, 0x50, 0x4E, 0x47,
	0x0D, 0x0A, 0x1A, 0x0A
];

/// Length + type + 13 bytes of header fields + CRC.
pub const IHDR_SIZE: u64 = 25;

pub const CHUNK_CRC_SIZE: u64 = 4;

pub const TEXT_CHUNK: [u8; 4] = *b"tEXt";
pub const ITXT_CHUNK: [u8; 4] = *b"iTXt";
pub const IEND_TYPE: [u8; 4] = *b"IEND";

pub const KEYWORD_SIZE: usize = 11;

/// Keyword plus its NUL separator, compared byte for byte.
pub const PARAMETERS_KEYWORD: [u8; KEYWORD_SIZE] = *b"parameters\0";

/// Compression flag, compression method and two empty language/translated
/// keyword terminators: uncompressed text in the default language.
pub const ITXT_MARKER: [u8; 4] = [0x00, 0x00, 0x00, 0x00];

pub const PNG_EXTENSION: &str = "png";
