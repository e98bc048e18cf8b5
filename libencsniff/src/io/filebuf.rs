use std::{fs::File, io::{self, Read, Seek, SeekFrom}};

use crate::error::Error;

use super::{ByteSource, SourceInfo};

/// Reads blocks from any seekable reader into a single reusable buffer. A short read from the underlying reader is handed on
/// as a short block rather than being topped up, so block boundaries follow whatever the reader returns
pub struct IoFileBuf<R = File> {
	reader: R,
	len: Option<u64>,
	buf: Vec<u8>,
	cursor: u64,
}

impl<R> IoFileBuf<R> where R: Read + Seek {
	pub fn new(reader: R, block_size: u64) -> Self {
		IoFileBuf::with_len(reader, None, block_size)
	}

	/// Like `new`, but with the length of the reader's content, when it is known, for `source_info`
	pub fn with_len(reader: R, len: Option<u64>, block_size: u64) -> Self {
		IoFileBuf {
			reader,
			len,
			buf: vec![0; block_size.max(1) as usize],
			cursor: 0
		}
	}
}

impl<R> ByteSource for IoFileBuf<R> where R: Read + Seek {
	fn source_info(&self) -> SourceInfo {
		SourceInfo {
			len: self.len,
			block_size: self.buf.len() as u64,
			cursor: self.cursor
		}
	}

	fn next_block(&mut self) -> Result<Option<&[u8]>, Error> {
		loop {
			match self.reader.read(&mut self.buf) {
				Ok(0) => return Ok(None),
				Ok(bytes_read) => {
					self.cursor += bytes_read as u64;
					return Ok(Some(&self.buf[..bytes_read]));
				}
				Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
				Err(e) => return Err(e.into())
			}
		}
	}

	fn rewind(&mut self) -> Result<(), Error> {
		self.reader.seek(SeekFrom::Start(0))?;
		self.cursor = 0;
		Ok(())
	}
}
