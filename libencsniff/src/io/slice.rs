use crate::error::Error;

use super::{ByteSource, SourceInfo};

/// An in-memory byte source, split into blocks of `block_size` bytes
pub struct IoSlice<'a> {
	data: &'a [u8],
	block_size: usize,
	cursor: usize,
}

impl<'a> IoSlice<'a> {
	pub fn new(data: &'a [u8], block_size: usize) -> Self {
		IoSlice {
			data,
			block_size: block_size.max(1),
			cursor: 0
		}
	}
}

impl ByteSource for IoSlice<'_> {
	fn source_info(&self) -> SourceInfo {
		SourceInfo {
			len: Some(self.data.len() as u64),
			block_size: self.block_size as u64,
			cursor: self.cursor as u64
		}
	}

	fn next_block(&mut self) -> Result<Option<&[u8]>, Error> {
		if self.cursor == self.data.len() {
			return Ok(None);
		}

		let end = (self.cursor + self.block_size).min(self.data.len());
		let block = &self.data[self.cursor..end];
		self.cursor = end;

		Ok(Some(block))
	}

	fn rewind(&mut self) -> Result<(), Error> {
		self.cursor = 0;
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use crate::io::ByteSource;

	use super::IoSlice;

	#[test]
	fn test_slice_blocks() {
		let data = b"0123456789";
		let mut source = IoSlice::new(data, 7);

		assert_eq!(source.next_block().unwrap(), Some(b"0123456".as_slice()));
		assert_eq!(source.next_block().unwrap(), Some(b"789".as_slice()));
		assert_eq!(source.next_block().unwrap(), None);

		source.rewind().unwrap();
		assert_eq!(source.source_info().cursor, 0);
		assert_eq!(source.next_block().unwrap(), Some(b"0123456".as_slice()));
	}
}
