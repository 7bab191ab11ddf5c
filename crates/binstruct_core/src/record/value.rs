use std::fmt;

/// Runtime value stored in a record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
	/// Signed integer scalar.
	I64(i64),
	/// Unsigned integer scalar.
	U64(u64),
	/// UTF-8 string.
	String(Box<str>),
}

impl Value {
	/// Stable kind label used in error messages.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::I64(_) => "I64",
			Self::U64(_) => "U64",
			Self::String(_) => "String",
		}
	}

	/// Return the value as `i64` if it is an integer that fits.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::I64(v) => Some(*v),
			Self::U64(v) => i64::try_from(*v).ok(),
			Self::String(_) => None,
		}
	}

	/// Return the value as `u64` if it is a non-negative integer.
	pub fn as_u64(&self) -> Option<u64> {
		match self {
			Self::I64(v) => u64::try_from(*v).ok(),
			Self::U64(v) => Some(*v),
			Self::String(_) => None,
		}
	}

	/// Return the string payload.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(v) => Some(v),
			_ => None,
		}
	}

	/// Widen any integer variant for range checks.
	pub(crate) fn as_i128(&self) -> Option<i128> {
		match self {
			Self::I64(v) => Some(i128::from(*v)),
			Self::U64(v) => Some(i128::from(*v)),
			Self::String(_) => None,
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::I64(v) => write!(f, "{v}"),
			Self::U64(v) => write!(f, "{v}"),
			Self::String(v) => write!(f, "{v:?}"),
		}
	}
}

macro_rules! impl_from_signed {
	($($ty:ty),*) => {
		$(impl From<$ty> for Value {
			fn from(value: $ty) -> Self {
				Self::I64(i64::from(value))
			}
		})*
	};
}

macro_rules! impl_from_unsigned {
	($($ty:ty),*) => {
		$(impl From<$ty> for Value {
			fn from(value: $ty) -> Self {
				Self::U64(u64::from(value))
			}
		})*
	};
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value.into_boxed_str())
	}
}
