use crate::record::{RecordError, Result};

/// Simple bounded cursor over an immutable byte slice.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(RecordError::UnexpectedEof {
				need: n,
				have: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}
}

#[cfg(test)]
mod tests {
	use super::Cursor;
	use crate::record::RecordError;

	#[test]
	fn read_exact_advances_and_reports_short_input() {
		let mut cursor = Cursor::new(&[1, 2, 3]);
		assert_eq!(cursor.read_exact(2).expect("two bytes"), &[1, 2]);
		assert_eq!(cursor.pos(), 2);

		let err = cursor.read_exact(2).expect_err("only one byte left");
		assert!(matches!(err, RecordError::UnexpectedEof { need: 2, have: 1 }));
		assert_eq!(cursor.pos(), 2, "failed read must not advance");
	}
}
