pub mod config;

use std::path::Path;

use log::{debug, warn};

use crate::{classify::{candidates::CandidateSet, utf8::Utf8Validator, Category, Scan}, error::Error, io::{self, ByteSource}};

use self::config::{ClassifierConfig, ScanStrategy};

/// The main entry point of the library. Holds a validated config and classifies byte sources with it.
///
/// All state for a classification run lives on the stack of that run, so a single `Classifier` can be shared between threads
/// classifying different files
#[derive(Debug, Clone)]
pub struct Classifier {
	config: ClassifierConfig,
}

impl Classifier {
	/// Creates a new `Classifier` instance with the specified config, validating it and returning an error if it
	/// did not successfully validate
	pub fn new(config: ClassifierConfig) -> Result<Self, Error> {
		config.validate()?;

		Ok(Classifier {
			config
		})
	}

	/// Opens the file at `path` and classifies its content. Errors opening or reading the file are returned to the caller
	pub fn classify_path(&self, path: impl AsRef<Path>) -> Result<Category, Error> {
		let path = path.as_ref();
		let mut source = io::open(path, &self.config)?;
		let category = self.classify(source.as_mut())?;

		debug!("\"{}\" classified as {}", path.display(), category);

		Ok(category)
	}

	/// Classifies the whole content of `source`, rewinding it to the start first. Read errors are returned to the caller, except
	/// during the UTF-8 pass of the rescan strategy, where ASCII and ISO-8859 are already ruled out and data is reported instead
	pub fn classify(&self, source: &mut dyn ByteSource) -> Result<Category, Error> {
		source.rewind()?;

		let info = source.source_info();
		debug!("Classifying {} bytes in blocks of {}", info.len.map_or("an unknown number of".to_string(), |len| len.to_string()), info.block_size);

		// No need to read a source that is already known to be too large
		if info.len.map_or(false, |len| self.exceeds_scan_limit(len)) {
			return Ok(self.inconclusive());
		}

		match self.config.strategy {
			ScanStrategy::Interleaved => self.classify_interleaved(source),
			ScanStrategy::Rescan => self.classify_rescan(source)
		}
	}

	fn classify_interleaved(&self, source: &mut dyn ByteSource) -> Result<Category, Error> {
		let mut scan = Scan::new();

		while let Some(block) = source.next_block()? {
			let needs_more = scan.feed(block);

			if self.exceeds_scan_limit(scan.bytes_seen()) {
				return Ok(self.inconclusive());
			}
			if !needs_more {
				debug!("Outcome settled after {} bytes", scan.bytes_seen());
				break;
			}
		}

		Ok(scan.finish())
	}

	fn classify_rescan(&self, source: &mut dyn ByteSource) -> Result<Category, Error> {
		let mut candidates = CandidateSet::new();
		let mut bytes_seen = 0;

		while let Some(block) = source.next_block()? {
			bytes_seen += block.len() as u64;
			if self.exceeds_scan_limit(bytes_seen) {
				return Ok(self.inconclusive());
			}

			candidates.observe_all(block);
			if candidates.is_exhausted() {
				debug!("ASCII and ISO-8859 ruled out within the first {} bytes", bytes_seen);
				break;
			}
		}

		if bytes_seen == 0 {
			return Ok(Category::Empty);
		}

		if let Some(category) = candidates.best() {
			return Ok(category);
		}

		match self.validate_utf8_from_start(source) {
			Ok(true) => Ok(Category::Utf8),
			Ok(false) => Ok(Category::Data),
			Err(e) => {
				// Nothing but UTF-8 was left to decide, so an unreadable remainder leaves only data
				warn!("Read failed during the UTF-8 pass, reporting data: {}", e);
				Ok(Category::Data)
			}
		}
	}

	/// Rewinds `source` and runs the whole of it through a UTF-8 validator
	fn validate_utf8_from_start(&self, source: &mut dyn ByteSource) -> Result<bool, Error> {
		source.rewind()?;

		let mut validator = Utf8Validator::new();
		let mut bytes_seen = 0;

		while let Some(block) = source.next_block()? {
			bytes_seen += block.len() as u64;
			if self.exceeds_scan_limit(bytes_seen) {
				return Ok(false);
			}

			if !validator.feed(block) {
				debug!("Invalid UTF-8 within the first {} bytes", bytes_seen);
				return Ok(false);
			}
		}

		Ok(validator.finish())
	}

	fn exceeds_scan_limit(&self, bytes_seen: u64) -> bool {
		self.config.max_scan_bytes.map_or(false, |max| bytes_seen > max)
	}

	fn inconclusive(&self) -> Category {
		warn!("Source is larger than the scan limit of {} bytes, reporting data", self.config.max_scan_bytes.unwrap_or_default());
		Category::Data
	}
}

impl Default for Classifier {
	fn default() -> Self {
		Classifier {
			config: ClassifierConfig::default()
		}
	}
}
