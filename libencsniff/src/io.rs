pub mod filebuf;
pub mod mmap;
pub mod slice;

use std::{fs::File, path::Path};

use log::debug;

use crate::{encsniff::config::ClassifierConfig, error::Error, utils::file_len};

pub use self::{filebuf::IoFileBuf, mmap::IoMmap, slice::IoSlice};

/// Information about a byte source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceInfo {
	/// The total number of bytes in the source, if known up front
	pub len: Option<u64>,
	/// The maximum number of bytes returned by a single call to `next_block`
	pub block_size: u64,
	/// The offset of the next byte that will be read
	pub cursor: u64,
}

/// An ordered, finite sequence of bytes that is read forwards in blocks, and can be rewound to the start for a second pass
pub trait ByteSource {
	fn source_info(&self) -> SourceInfo;
	/// Reads the next block of the source, returning None once the end of the source has been reached. Blocks may be shorter
	/// than the source's block size, but are never empty
	fn next_block(&mut self) -> Result<Option<&[u8]>, Error>;
	/// Moves back to the first byte of the source
	fn rewind(&mut self) -> Result<(), Error>;
}

/// Opens the file at `path` as a byte source. Regular files larger than the configured mmap threshold are memory mapped,
/// anything else (including empty files, which cannot be mapped, and pipes or devices) is read through a buffer
pub fn open(path: &Path, config: &ClassifierConfig) -> Result<Box<dyn ByteSource>, Error> {
	let mut file = File::open(path)?;
	let is_regular = file.metadata().map(|metadata| metadata.is_file()).unwrap_or(false);
	let len = file_len(&mut file)?;

	let source: Box<dyn ByteSource> = if is_regular && len > config.mmap_threshold {
		debug!("Memory mapping \"{}\" ({} bytes)", path.display(), len);
		Box::new(IoMmap::new(file, len, config.block_size)?)
	} else {
		debug!("Reading \"{}\" through a {} byte buffer", path.display(), config.block_size);
		Box::new(IoFileBuf::with_len(file, is_regular.then_some(len), config.block_size))
	};

	Ok(source)
}
