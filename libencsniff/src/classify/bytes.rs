//! Per-byte text predicates. These decide which bytes can appear in a file that is reported as ASCII or ISO-8859 text

/// Whether `b` may appear in ASCII text: the whitespace/control codes BEL through CR (0x07..=0x0D), ESC (0x1B), or a printable
/// character (0x20..=0x7E). NUL, DEL and the remaining C0 controls are treated as signs of binary data
pub const fn is_ascii_byte(b: u8) -> bool {
	matches!(b, 0x07..=0x0D | 0x1B | 0x20..=0x7E)
}

/// Whether `b` may appear in ISO-8859-1 text: any ASCII text byte, or a byte in the upper half of the Latin-1 table
/// (0xA0..=0xFF). The C1 control range 0x80..=0x9F is never accepted, which is what separates Latin-1 text from data
pub const fn is_latin1_byte(b: u8) -> bool {
	is_ascii_byte(b) || b >= 0xA0
}
