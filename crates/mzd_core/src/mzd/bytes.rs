use crate::mzd::{MzdError, Result};

/// Simple bounded cursor over an immutable byte slice.
///
/// All multi-byte reads are little-endian; the MZD format defines no other
/// byte order. Reads past the end of the slice fail with
/// [`MzdError::UnexpectedEof`] instead of panicking.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(MzdError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read exactly `n` bytes without advancing the cursor.
	pub fn peek_exact(&self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(MzdError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}
		Ok(&self.bytes[self.pos..self.pos + n])
	}

	/// Advance the cursor by `n` bytes without interpreting them.
	pub fn skip(&mut self, n: usize) -> Result<()> {
		let _ = self.read_exact(n)?;
		Ok(())
	}

	/// Read a 24-byte name or sentinel field.
	pub fn read_name24(&mut self) -> Result<[u8; 24]> {
		let raw = self.read_exact(24)?;
		let mut out = [0_u8; 24];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(u32::from_le_bytes(buf))
	}

	/// Read a little-endian `i32`.
	pub fn read_i32_le(&mut self) -> Result<i32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(i32::from_le_bytes(buf))
	}
}
