use super::{bytes::{is_ascii_byte, is_latin1_byte}, Category};

/// The single-byte text categories that have not yet been ruled out during one classification run. Flags are only ever
/// cleared, so once a category is excluded it stays excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSet {
	ascii: bool,
	latin1: bool,
}

impl CandidateSet {
	pub fn new() -> Self {
		CandidateSet {
			ascii: true,
			latin1: true
		}
	}

	pub fn observe(&mut self, b: u8) {
		if self.ascii && !is_ascii_byte(b) {
			self.ascii = false;
		}
		if self.latin1 && !is_latin1_byte(b) {
			self.latin1 = false;
		}
	}

	/// Narrows the set with every byte of `block`, stopping early once nothing is left to exclude
	pub fn observe_all(&mut self, block: &[u8]) {
		for &b in block {
			if self.is_exhausted() {
				break;
			}
			self.observe(b);
		}
	}

	/// True once both ASCII and Latin-1 have been excluded
	pub fn is_exhausted(&self) -> bool {
		!self.ascii && !self.latin1
	}

	/// The most specific category still in the set. ASCII is preferred over Latin-1
	pub fn best(&self) -> Option<Category> {
		if self.ascii {
			Some(Category::Ascii)
		} else if self.latin1 {
			Some(Category::Latin1)
		} else {
			None
		}
	}
}

impl Default for CandidateSet {
	fn default() -> Self {
		CandidateSet::new()
	}
}

#[cfg(test)]
mod test {
	use crate::classify::Category;

	use super::CandidateSet;

	#[test]
	fn test_starts_with_both() {
		let set = CandidateSet::new();

		assert!(!set.is_exhausted());
		assert_eq!(set.best(), Some(Category::Ascii));
	}

	#[test]
	fn test_upper_latin1_byte_drops_ascii_only() {
		let mut set = CandidateSet::new();
		set.observe_all(b"caf\xe9");

		assert!(!set.is_exhausted());
		assert_eq!(set.best(), Some(Category::Latin1));
	}

	#[test]
	fn test_c1_byte_exhausts() {
		let mut set = CandidateSet::new();
		set.observe_all(&[0x41, 0x85, 0x41]);

		assert!(set.is_exhausted());
		assert_eq!(set.best(), None);
	}

	#[test]
	fn test_exclusion_is_monotonic() {
		let mut set = CandidateSet::new();
		set.observe(0x00);
		set.observe_all(b"perfectly ordinary text afterwards\n");

		assert!(set.is_exhausted());
	}
}
