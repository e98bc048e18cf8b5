use serde::Deserialize;

use crate::error::Error;

/// Upper bound on `block_size`, which is allocated up front by buffered sources
pub const MAX_BLOCK_SIZE: u64 = 64 * 1024 * 1024;

/// Settings for a `Classifier`, usually loaded from a TOML file. Every field is optional in the file
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
	/// The number of bytes requested from the byte source per read
	pub block_size: u64,
	/// Sources holding more bytes than this are not classified, and are reported as data
	pub max_scan_bytes: Option<u64>,
	/// Regular files larger than this many bytes are memory mapped instead of read through a buffer
	pub mmap_threshold: u64,
	pub strategy: ScanStrategy,
}

/// How the UTF-8 check is scheduled relative to the ASCII/ISO-8859 scan
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScanStrategy {
	/// UTF-8 validation runs alongside candidate elimination, in a single pass over the source
	#[default]
	Interleaved,
	/// Candidate elimination runs alone, and if both single-byte encodings are ruled out the source is rewound and validated
	/// as UTF-8 from the beginning
	Rescan,
}

impl ClassifierConfig {
	pub fn validate(&self) -> Result<(), Error> {
		if self.block_size == 0 {
			return Err(Error::ConfigValidationError("block_size must be greater than 0".to_string()));
		}
		if self.block_size > MAX_BLOCK_SIZE {
			return Err(Error::ConfigValidationError(format!("block_size must be at most {} bytes, got {}", MAX_BLOCK_SIZE, self.block_size)));
		}
		if self.max_scan_bytes == Some(0) {
			return Err(Error::ConfigValidationError("max_scan_bytes must be greater than 0 - Leave it unset to scan sources of any size".to_string()));
		}

		Ok(())
	}
}

impl Default for ClassifierConfig {
	fn default() -> Self {
		ClassifierConfig {
			block_size: 8192, // BUFSIZ in stdio.h
			max_scan_bytes: None,
			mmap_threshold: 16 * 1024,
			strategy: ScanStrategy::default(),
		}
	}
}
