use super::bytes::is_ascii_byte;

/// Streaming UTF-8 text validator.
///
/// Multi-byte sequences are checked structurally: every sequence must start with a valid leading byte and be followed by
/// exactly as many continuation bytes (`10xxxxxx`) as the leading byte declares. Overlong encodings, surrogates and code points
/// above U+10FFFF are not rejected. Single byte code points must also be ASCII text bytes, so NUL, DEL and the other non-text
/// C0 controls are rejected like any other invalid leading byte.
///
/// The number of continuation bytes still owed by the current sequence is carried between calls to `feed`, so a stream
/// validates identically however it is split into blocks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8Validator {
	/// Continuation bytes still expected to complete the current sequence
	remaining: u8,
	failed: bool,
}

impl Utf8Validator {
	pub fn new() -> Self {
		Utf8Validator::default()
	}

	/// Feeds the next block of the stream through the validator. Returns false once the stream is known to be invalid, after
	/// which further input is ignored
	pub fn feed(&mut self, block: &[u8]) -> bool {
		if self.failed {
			return false;
		}

		for &b in block {
			if self.remaining > 0 {
				if b & 0b1100_0000 != 0b1000_0000 {
					self.failed = true;
					return false;
				}
				self.remaining -= 1;
			} else {
				match Self::continuations_for_leading(b) {
					Some(n) => self.remaining = n,
					None => {
						self.failed = true;
						return false;
					}
				}
			}
		}

		true
	}

	/// Whether an invalid byte has been seen
	pub fn is_failed(&self) -> bool {
		self.failed
	}

	/// Ends the stream. A stream is valid only if no invalid byte was seen and no sequence was left truncated
	pub fn finish(self) -> bool {
		!self.failed && self.remaining == 0
	}

	/// The number of continuation bytes a leading byte declares, or None if `b` cannot start a sequence
	fn continuations_for_leading(b: u8) -> Option<u8> {
		if b & 0b1000_0000 == 0 {
			// Single byte code points count only when they are text
			is_ascii_byte(b).then_some(0)
		} else if b & 0b1110_0000 == 0b1100_0000 {
			Some(1)
		} else if b & 0b1111_0000 == 0b1110_0000 {
			Some(2)
		} else if b & 0b1111_1000 == 0b1111_0000 {
			Some(3)
		} else {
			// 10xxxxxx (stray continuation) or 11111xxx
			None
		}
	}
}

/// Validates a complete in-memory buffer
pub fn is_utf8_text(data: &[u8]) -> bool {
	let mut validator = Utf8Validator::new();
	validator.feed(data);
	validator.finish()
}
