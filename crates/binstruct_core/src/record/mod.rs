mod bytes;
mod decl;
mod error;
mod field;
mod field_type;
mod struct_;
mod value;

/// Bounded cursor over an encoded record buffer.
pub use bytes::Cursor;
/// Error and result aliases.
pub use error::{RecordError, Result};
/// Named, typed record slot.
pub use field::Field;
/// Fixed-width field type descriptors.
pub use field_type::FieldType;
/// Ordered record container and its byte layout.
pub use struct_::{FieldLayout, Struct};
/// Runtime field values.
pub use value::Value;
