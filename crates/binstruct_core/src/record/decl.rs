use std::str::FromStr;

use crate::record::{FieldType, RecordError, Result};

impl FieldType {
	/// Parse a textual type tag such as `int8`, `u32`, or `string[4]`.
	///
	/// Tags are case-insensitive. `str[N]` and `char[N]` are accepted as string aliases.
	pub fn parse(tag: &str) -> Result<Self> {
		let invalid = || RecordError::InvalidTypeTag { tag: tag.to_owned() };
		let trimmed = tag.trim();
		let lower = trimmed.to_ascii_lowercase();

		let ident_end = lower.find('[').unwrap_or(lower.len());
		let ident = lower[..ident_end].trim();
		let tail = &lower[ident_end..];

		if tail.is_empty() {
			return match ident {
				"int8" | "i8" => Ok(Self::Int8),
				"int16" | "i16" => Ok(Self::Int16),
				"int32" | "i32" => Ok(Self::Int32),
				"int64" | "i64" => Ok(Self::Int64),
				"uint8" | "u8" => Ok(Self::UInt8),
				"uint16" | "u16" => Ok(Self::UInt16),
				"uint32" | "u32" => Ok(Self::UInt32),
				"uint64" | "u64" => Ok(Self::UInt64),
				_ => Err(invalid()),
			};
		}

		if !matches!(ident, "string" | "str" | "char") {
			return Err(invalid());
		}
		let dim = tail.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')).ok_or_else(invalid)?;
		let length = dim.trim().parse::<usize>().map_err(|_| invalid())?;
		if length == 0 {
			return Err(RecordError::InvalidStringLength { length });
		}
		Ok(Self::String { length })
	}
}

impl FromStr for FieldType {
	type Err = RecordError;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse(s)
	}
}
