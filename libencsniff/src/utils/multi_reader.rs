use std::io::{self, Read, Seek, SeekFrom};

/// Reads a sequence of byte slices as if they were one contiguous stream. A single `read` call never returns bytes from more
/// than one slice, which makes this useful for simulating readers that return short reads at arbitrary offsets
pub struct MultiReader<'a> {
	data: &'a [&'a [u8]],
	slice_idx: usize,
	local_idx: usize
}

impl<'a> MultiReader<'a> {
	pub fn new(data: &'a [&'a [u8]]) -> Self {
		MultiReader {
			data,
			slice_idx: 0,
			local_idx: 0
		}
	}

	fn total_len(&self) -> u64 {
		self.data.iter().map(|slice| slice.len() as u64).sum()
	}

	fn position(&self) -> u64 {
		self.data[..self.slice_idx].iter().map(|slice| slice.len() as u64).sum::<u64>() + self.local_idx as u64
	}

	/// Moves to an absolute offset, clamping to the end of the data
	fn set_position(&mut self, mut pos: u64) {
		self.slice_idx = 0;
		self.local_idx = 0;

		while self.slice_idx < self.data.len() {
			let this_slice_len = self.data[self.slice_idx].len() as u64;
			if pos < this_slice_len {
				self.local_idx = pos as usize;
				return;
			}
			pos -= this_slice_len;
			self.slice_idx += 1;
		}
	}
}

impl<'a> Read for MultiReader<'a> {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		// Skip exhausted and empty slices
		while self.slice_idx < self.data.len() && self.local_idx == self.data[self.slice_idx].len() {
			self.slice_idx += 1;
			self.local_idx = 0;
		}

		if self.slice_idx == self.data.len() || buf.is_empty() {
			return Ok(0); // EOF
		}

		let remaining = &self.data[self.slice_idx][self.local_idx..];
		let n = remaining.len().min(buf.len());
		buf[..n].copy_from_slice(&remaining[..n]);
		self.local_idx += n;

		Ok(n)
	}
}

impl<'a> Seek for MultiReader<'a> {
	fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
		let target = match pos {
			SeekFrom::Start(offset) => Some(offset),
			SeekFrom::End(offset) => self.total_len().checked_add_signed(offset),
			SeekFrom::Current(offset) => self.position().checked_add_signed(offset)
		};

		match target {
			Some(target) => {
				self.set_position(target);
				Ok(target)
			}
			None => Err(io::Error::new(io::ErrorKind::InvalidInput, "invalid seek to a negative or overflowing position"))
		}
	}
}
