use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, RecordError>;

/// Errors produced while building, encoding, and decoding records.
#[derive(Debug, Error)]
pub enum RecordError {
	/// Filesystem or stream IO failure outside a record read/write.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Underlying sink rejected the encoded record.
	#[error("write failed: {0}")]
	Write(#[source] std::io::Error),
	/// Underlying source failed before the record was fully read.
	#[error("read failed: {0}")]
	Read(#[source] std::io::Error),
	/// Source ended before the full record width was available.
	#[error("unexpected eof: need {need} bytes, have {have}")]
	UnexpectedEof {
		/// Record byte width.
		need: usize,
		/// Bytes actually available.
		have: usize,
	},
	/// Input slice was longer than the record layout.
	#[error("trailing bytes: expected {expected}, got {got}")]
	TrailingBytes {
		/// Record byte width.
		expected: usize,
		/// Input length.
		got: usize,
	},
	/// Value kind does not match the field's declared type.
	#[error("type mismatch on {field}: expected {expected}, got {got}")]
	TypeMismatch {
		/// Field name, or the type tag for standalone encodes.
		field: String,
		/// Expected value kind.
		expected: &'static str,
		/// Actual value kind.
		got: &'static str,
	},
	/// Field name is not part of the struct.
	#[error("unknown field: {name}")]
	UnknownField {
		/// Requested field name.
		name: String,
	},
	/// Two fields share one name.
	#[error("duplicate field name: {name}")]
	DuplicateFieldName {
		/// Colliding field name.
		name: String,
	},
	/// Integer does not fit the fixed width of its type.
	#[error("value {value} out of range for {type_name}")]
	ValueOutOfRange {
		/// Field type tag.
		type_name: &'static str,
		/// Rejected value.
		value: i128,
	},
	/// String encoding is longer than the declared length.
	#[error("string too long: {len} bytes, max {max}")]
	StringTooLong {
		/// UTF-8 byte length of the value.
		len: usize,
		/// Declared field length.
		max: usize,
	},
	/// String ends with a NUL byte, which collides with the filler byte.
	#[error("string value ends with a NUL byte")]
	StringTrailingNul,
	/// Fixed-length string declared with zero length.
	#[error("invalid string length {length} (must be positive)")]
	InvalidStringLength {
		/// Declared length.
		length: usize,
	},
	/// Sum of field widths does not fit in `usize`.
	#[error("record width overflows at field {field}")]
	RecordWidthOverflow {
		/// Field whose width pushed the total past `usize::MAX`.
		field: String,
	},
	/// Byte slice length does not match the type width.
	#[error("decode length mismatch for {type_name}: expected {expected}, got {got}")]
	DecodeLength {
		/// Field type tag.
		type_name: &'static str,
		/// Type byte width.
		expected: usize,
		/// Slice length.
		got: usize,
	},
	/// String payload is not valid UTF-8.
	#[error("decode invalid utf-8 for {type_name}")]
	DecodeInvalidUtf8 {
		/// Field type tag.
		type_name: &'static str,
	},
	/// Type tag text could not be parsed.
	#[error("invalid type tag: {tag}")]
	InvalidTypeTag {
		/// User-provided tag.
		tag: String,
	},
	/// Schema document is malformed.
	#[error("invalid schema: {reason}")]
	InvalidSchema {
		/// Human-readable reason.
		reason: String,
	},
	/// `NAME=VALUE` assignment text is malformed.
	#[error("invalid assignment: {text}")]
	InvalidAssignment {
		/// User-provided assignment text.
		text: String,
	},
}

impl RecordError {
	/// Whether this error means a value cannot be represented in its field width.
	pub fn is_encoding(&self) -> bool {
		matches!(
			self,
			Self::ValueOutOfRange { .. } | Self::StringTooLong { .. } | Self::StringTrailingNul | Self::InvalidStringLength { .. }
		)
	}

	/// Whether this error means a byte slice could not be interpreted.
	pub fn is_decoding(&self) -> bool {
		matches!(self, Self::DecodeLength { .. } | Self::DecodeInvalidUtf8 { .. })
	}
}
