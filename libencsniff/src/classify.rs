pub mod bytes;
pub mod candidates;
pub mod utf8;

use log::trace;

use self::{candidates::CandidateSet, utf8::Utf8Validator};

/// What the content of a file looks like. Variants are listed in reporting priority: when more than one describes the data,
/// the earliest one is reported, with `Empty` decided before anything else
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Category {
	/// No bytes at all
	#[strum(to_string = "Empty file")]
	Empty,
	/// Only printable ASCII and common whitespace/control codes
	#[strum(to_string = "ASCII text")]
	Ascii,
	/// ASCII text bytes plus the upper half of ISO-8859-1, with no C1 controls
	#[strum(to_string = "ISO-8859 text")]
	Latin1,
	/// Structurally valid UTF-8 that is not ASCII or Latin-1 text
	#[strum(to_string = "UTF-8 text")]
	Utf8,
	/// None of the above
	#[strum(to_string = "Data file")]
	Data,
}

/// The state of one classification run over a stream of blocks. Candidate elimination and UTF-8 validation happen together,
/// so the stream is read once from start to end.
///
/// Every run owns its own `Scan`, so separate files can be classified concurrently
#[derive(Debug, Clone, Default)]
pub struct Scan {
	candidates: CandidateSet,
	utf8: Utf8Validator,
	bytes_seen: u64,
}

impl Scan {
	pub fn new() -> Self {
		Scan::default()
	}

	/// Processes the next block of the stream. Returns false once the outcome can no longer change (ASCII and Latin-1 are
	/// ruled out and the data is not UTF-8), meaning the rest of the stream need not be read
	pub fn feed(&mut self, block: &[u8]) -> bool {
		self.bytes_seen += block.len() as u64;

		let was_exhausted = self.candidates.is_exhausted();
		self.candidates.observe_all(block);
		if !was_exhausted && self.candidates.is_exhausted() {
			trace!("ASCII and ISO-8859 ruled out by offset {}", self.bytes_seen);
		}

		self.utf8.feed(block);

		!self.is_settled()
	}

	/// Whether more input can still change the result
	pub fn is_settled(&self) -> bool {
		self.candidates.is_exhausted() && self.utf8.is_failed()
	}

	pub fn bytes_seen(&self) -> u64 {
		self.bytes_seen
	}

	/// Resolves the category once the end of the stream has been reached (or `feed` has returned false)
	pub fn finish(self) -> Category {
		if self.bytes_seen == 0 {
			return Category::Empty;
		}

		// Latin-1 is reported without consulting the UTF-8 verdict
		if let Some(category) = self.candidates.best() {
			return category;
		}

		if self.utf8.finish() {
			Category::Utf8
		} else {
			Category::Data
		}
	}
}

/// Classifies an in-memory buffer
pub fn classify_bytes(data: &[u8]) -> Category {
	let mut scan = Scan::new();
	scan.feed(data);
	scan.finish()
}
