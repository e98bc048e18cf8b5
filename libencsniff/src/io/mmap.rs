use std::{fs::File, io};

use memmap::{Mmap, MmapOptions};

use crate::error::Error;

use super::{ByteSource, SourceInfo};

/// Reads a file through a read-only memory map, handing out `block_size` slices of the mapping
pub struct IoMmap {
	mmap: Mmap,
	cursor: u64,
	block_size: u64,
}

impl IoMmap {
	/// Maps `file`, which must be a non-empty regular file. `file_len` is the length of the file as already queried by the
	/// caller, and only the first `file_len` bytes of the mapping are read
	pub fn new(file: File, file_len: u64, block_size: u64) -> Result<Self, Error> {
		let map_len = usize::try_from(file_len).map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "File is too large to map into memory"))?;
		let mmap = unsafe { MmapOptions::new().len(map_len).map(&file)? };

		#[cfg(target_os = "linux")]
		unsafe {
			libc::madvise(mmap.as_ptr() as *mut libc::c_void, mmap.len(), libc::MADV_SEQUENTIAL);
		}

		Ok(IoMmap {
			mmap,
			cursor: 0,
			block_size: block_size.max(1)
		})
	}
}

impl ByteSource for IoMmap {
	fn source_info(&self) -> SourceInfo {
		SourceInfo {
			len: Some(self.mmap.len() as u64),
			block_size: self.block_size,
			cursor: self.cursor
		}
	}

	fn next_block(&mut self) -> Result<Option<&[u8]>, Error> {
		let len = self.mmap.len() as u64;

		// Initially do some calculations to make sure we are not overstepping
		let start = self.cursor;
		let end = self.cursor.saturating_add(self.block_size).min(len);

		if start >= end {
			return Ok(None);
		}

		self.cursor = end;
		Ok(Some(&self.mmap[start as usize..end as usize]))
	}

	fn rewind(&mut self) -> Result<(), Error> {
		self.cursor = 0;
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use std::{env, fs::{self, File}};

	use crate::io::ByteSource;

	use super::IoMmap;

	#[test]
	fn test_mmap_blocks() {
		let path = env::temp_dir().join(format!("libencsniff-mmap-{}", std::process::id()));
		let data: Vec<u8> = (0..=255).collect();
		fs::write(&path, &data).unwrap();

		let mut source = IoMmap::new(File::open(&path).unwrap(), 256, 100).unwrap();
		assert_eq!(source.source_info().len, Some(256));

		let lens: Vec<usize> = std::iter::from_fn(|| source.next_block().unwrap().map(|block| block.len())).collect();
		assert_eq!(lens, vec![100, 100, 56]);

		source.rewind().unwrap();
		assert_eq!(source.next_block().unwrap(), Some(&data[..100]));

		fs::remove_file(path).unwrap();
	}

	#[test]
	fn test_mmap_huge_block_size() {
		let path = env::temp_dir().join(format!("libencsniff-mmap-huge-{}", std::process::id()));
		fs::write(&path, b"some bytes").unwrap();

		let mut source = IoMmap::new(File::open(&path).unwrap(), 10, u64::MAX).unwrap();
		assert_eq!(source.next_block().unwrap(), Some(b"some bytes".as_slice()));
		// The cursor is now non-zero, so an unchecked add would overflow here
		assert_eq!(source.next_block().unwrap(), None);

		fs::remove_file(path).unwrap();
	}
}
