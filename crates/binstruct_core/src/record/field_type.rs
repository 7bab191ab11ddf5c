use std::fmt;

use crate::record::{RecordError, Result, Value};

/// Byte used to pad fixed-length strings.
const STRING_FILLER: u8 = 0;

/// Fixed-width binary shape of one logical value kind.
///
/// Integers are little-endian, signed widths use two's complement. Strings are UTF-8,
/// padded with `0x00` up to their declared length; decoding strips the trailing filler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
	/// 1-byte signed integer.
	Int8,
	/// 2-byte signed integer.
	Int16,
	/// 4-byte signed integer.
	Int32,
	/// 8-byte signed integer.
	Int64,
	/// 1-byte unsigned integer.
	UInt8,
	/// 2-byte unsigned integer.
	UInt16,
	/// 4-byte unsigned integer.
	UInt32,
	/// 8-byte unsigned integer.
	UInt64,
	/// Fixed-length UTF-8 string.
	String {
		/// Declared length in bytes.
		length: usize,
	},
}

impl FieldType {
	/// Fixed-length string type of `length` bytes.
	///
	/// A zero `length` is representable but every validate, encode, and decode on it
	/// fails with [`RecordError::InvalidStringLength`].
	pub const fn string(length: usize) -> Self {
		Self::String { length }
	}

	/// Stable type tag.
	pub fn name(self) -> &'static str {
		match self {
			Self::Int8 => "Int8",
			Self::Int16 => "Int16",
			Self::Int32 => "Int32",
			Self::Int64 => "Int64",
			Self::UInt8 => "UInt8",
			Self::UInt16 => "UInt16",
			Self::UInt32 => "UInt32",
			Self::UInt64 => "UInt64",
			Self::String { .. } => "String",
		}
	}

	/// Encoded size in bytes.
	pub fn byte_width(self) -> usize {
		match self {
			Self::Int8 | Self::UInt8 => 1,
			Self::Int16 | Self::UInt16 => 2,
			Self::Int32 | Self::UInt32 => 4,
			Self::Int64 | Self::UInt64 => 8,
			Self::String { length } => length,
		}
	}

	/// Whether values of this type are integers.
	pub fn is_integer(self) -> bool {
		!matches!(self, Self::String { .. })
	}

	/// Whether values of this type are signed integers.
	pub fn is_signed(self) -> bool {
		matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
	}

	/// Value used for fields declared without an initial value.
	pub fn zero_value(self) -> Value {
		match self {
			Self::String { .. } => Value::String("".into()),
			_ if self.is_signed() => Value::I64(0),
			_ => Value::U64(0),
		}
	}

	/// Check that `value` is representable and return it in canonical form.
	pub fn validate(self, value: Value) -> Result<Value> {
		self.validate_named(self.name(), value)
	}

	/// Encode `value` into exactly [`Self::byte_width`] bytes.
	pub fn encode(self, value: &Value) -> Result<Vec<u8>> {
		let mut out = Vec::with_capacity(self.byte_width());
		self.encode_into(value, &mut out)?;
		Ok(out)
	}

	/// Append the encoding of `value` to `out`.
	///
	/// On error `out` is left untouched.
	pub fn encode_into(self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
		self.check(self.name(), value)?;

		match (self, value) {
			(Self::String { length }, Value::String(text)) => {
				let start = out.len();
				out.extend_from_slice(text.as_bytes());
				out.resize(start + length, STRING_FILLER);
			}
			_ => {
				// Range already checked, so truncating the two's complement form is lossless.
				let raw = value.as_i128().unwrap_or_default() as u64;
				out.extend_from_slice(&raw.to_le_bytes()[..self.byte_width()]);
			}
		}
		Ok(())
	}

	/// Decode exactly [`Self::byte_width`] bytes.
	pub fn decode(self, bytes: &[u8]) -> Result<Value> {
		if let Self::String { length: 0 } = self {
			return Err(RecordError::InvalidStringLength { length: 0 });
		}
		let width = self.byte_width();
		if bytes.len() != width {
			return Err(RecordError::DecodeLength {
				type_name: self.name(),
				expected: width,
				got: bytes.len(),
			});
		}

		if let Self::String { .. } = self {
			let end = bytes.iter().rposition(|byte| *byte != STRING_FILLER).map_or(0, |idx| idx + 1);
			let text = std::str::from_utf8(&bytes[..end]).map_err(|_| RecordError::DecodeInvalidUtf8 { type_name: self.name() })?;
			return Ok(Value::String(text.into()));
		}

		let mut buf = [0_u8; 8];
		buf[..width].copy_from_slice(bytes);
		let raw = u64::from_le_bytes(buf);
		if self.is_signed() {
			Ok(Value::I64(sign_extend(raw, width * 8)))
		} else {
			Ok(Value::U64(raw))
		}
	}

	pub(crate) fn validate_named(self, field: &str, value: Value) -> Result<Value> {
		self.check(field, &value)?;
		Ok(self.normalize(value))
	}

	fn check(self, field: &str, value: &Value) -> Result<()> {
		match self {
			Self::String { length } => {
				let Value::String(text) = value else {
					return Err(type_mismatch(field, "String", value));
				};
				if length == 0 {
					return Err(RecordError::InvalidStringLength { length });
				}
				if text.len() > length {
					return Err(RecordError::StringTooLong { len: text.len(), max: length });
				}
				if text.as_bytes().last() == Some(&STRING_FILLER) {
					return Err(RecordError::StringTrailingNul);
				}
				Ok(())
			}
			_ => {
				let raw = value.as_i128().ok_or_else(|| type_mismatch(field, "integer", value))?;
				let (min, max) = self.int_range();
				if raw < min || raw > max {
					return Err(RecordError::ValueOutOfRange {
						type_name: self.name(),
						value: raw,
					});
				}
				Ok(())
			}
		}
	}

	fn normalize(self, value: Value) -> Value {
		match value {
			Value::U64(v) if self.is_signed() => Value::I64(v as i64),
			Value::I64(v) if self.is_integer() && !self.is_signed() => Value::U64(v as u64),
			other => other,
		}
	}

	fn int_range(self) -> (i128, i128) {
		let bits = self.byte_width() as u32 * 8;
		if self.is_signed() {
			(-(1_i128 << (bits - 1)), (1_i128 << (bits - 1)) - 1)
		} else {
			(0, (1_i128 << bits) - 1)
		}
	}
}

impl fmt::Display for FieldType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::String { length } => write!(f, "string[{length}]"),
			_ => f.write_str(&self.name().to_ascii_lowercase()),
		}
	}
}

fn sign_extend(value: u64, bits: usize) -> i64 {
	match bits {
		8 => (value as i8) as i64,
		16 => (value as i16) as i64,
		32 => (value as i32) as i64,
		_ => value as i64,
	}
}

fn type_mismatch(field: &str, expected: &'static str, value: &Value) -> RecordError {
	RecordError::TypeMismatch {
		field: field.to_owned(),
		expected,
		got: value.kind(),
	}
}
