use std::collections::HashMap;
use std::io::{Read, Write};

use crate::record::bytes::Cursor;
use crate::record::{Field, FieldType, RecordError, Result, Value};

/// Position of one field inside the encoded record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout<'a> {
	/// Field name.
	pub name: &'a str,
	/// Declared field type.
	pub ty: FieldType,
	/// Byte offset from the start of the record.
	pub offset: usize,
	/// Encoded size in bytes.
	pub width: usize,
}

/// Ordered, fixed-layout collection of fields.
///
/// The wire form is the concatenation of every field's encoding in declaration order,
/// with no headers, separators, or padding between fields.
#[derive(Debug, Clone)]
pub struct Struct {
	fields: Vec<Field>,
	index: HashMap<Box<str>, usize>,
	offsets: Vec<usize>,
	byte_width: usize,
}

/// Upper bound on the buffer reserved before any record bytes arrive.
const READ_PREALLOC_LIMIT: usize = 64 * 1024;

impl Struct {
	/// Build a struct from an ordered field list.
	pub fn new(fields: Vec<Field>) -> Result<Self> {
		let mut index = HashMap::with_capacity(fields.len());
		let mut offsets = Vec::with_capacity(fields.len());
		let mut byte_width = 0_usize;
		for (idx, field) in fields.iter().enumerate() {
			if index.insert(Box::<str>::from(field.name()), idx).is_some() {
				return Err(RecordError::DuplicateFieldName {
					name: field.name().to_owned(),
				});
			}
			offsets.push(byte_width);
			byte_width = byte_width
				.checked_add(field.byte_width())
				.ok_or_else(|| RecordError::RecordWidthOverflow {
					field: field.name().to_owned(),
				})?;
		}

		Ok(Self {
			fields,
			index,
			offsets,
			byte_width,
		})
	}

	/// Total encoded size in bytes.
	pub fn byte_width(&self) -> usize {
		self.byte_width
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Whether the struct has no fields.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Iterate fields in declaration order.
	pub fn fields(&self) -> impl Iterator<Item = &Field> {
		self.fields.iter()
	}

	/// Iterate field names in declaration order.
	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(Field::name)
	}

	/// Look up a field by name.
	pub fn field(&self, name: &str) -> Result<&Field> {
		let idx = self.index_of(name)?;
		Ok(&self.fields[idx])
	}

	/// Current value of the named field.
	pub fn get(&self, name: &str) -> Result<&Value> {
		self.field(name).map(Field::get)
	}

	/// Assign the named field. Other fields are untouched.
	pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
		let idx = self.index_of(name)?;
		self.fields[idx].set(value)
	}

	/// Snapshot of all current values in declaration order.
	pub fn values(&self) -> Vec<Value> {
		self.fields.iter().map(|field| field.get().clone()).collect()
	}

	/// Byte layout of every field.
	pub fn layout(&self) -> Vec<FieldLayout<'_>> {
		self.fields
			.iter()
			.zip(&self.offsets)
			.map(|(field, &offset)| FieldLayout {
				name: field.name(),
				ty: field.field_type(),
				offset,
				width: field.byte_width(),
			})
			.collect()
	}

	/// Encode all fields into one buffer.
	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		let mut out = Vec::with_capacity(self.byte_width);
		for field in &self.fields {
			field.encode_into(&mut out)?;
		}
		debug_assert_eq!(out.len(), self.byte_width);
		Ok(out)
	}

	/// Encode all fields and write them to `sink` in one `write_all`.
	///
	/// Returns the number of bytes written. Bytes already accepted by the sink before
	/// a failure are not rolled back.
	pub fn write<W: Write + ?Sized>(&self, sink: &mut W) -> Result<usize> {
		let bytes = self.to_bytes()?;
		sink.write_all(&bytes).map_err(RecordError::Write)?;
		Ok(bytes.len())
	}

	/// Read exactly [`Self::byte_width`] bytes from `source` and replace every field value.
	///
	/// Either every field is updated or none is.
	pub fn read<R: Read + ?Sized>(&mut self, source: &mut R) -> Result<()> {
		let need = self.byte_width;
		let mut buf = Vec::with_capacity(need.min(READ_PREALLOC_LIMIT));
		source.take(need as u64).read_to_end(&mut buf).map_err(RecordError::Read)?;
		if buf.len() < need {
			return Err(RecordError::UnexpectedEof { need, have: buf.len() });
		}
		self.commit(&buf)
	}

	/// Replace every field value from an exact-width byte slice.
	pub fn read_from_slice(&mut self, bytes: &[u8]) -> Result<()> {
		if bytes.len() < self.byte_width {
			return Err(RecordError::UnexpectedEof {
				need: self.byte_width,
				have: bytes.len(),
			});
		}
		if bytes.len() > self.byte_width {
			return Err(RecordError::TrailingBytes {
				expected: self.byte_width,
				got: bytes.len(),
			});
		}
		self.commit(bytes)
	}

	fn commit(&mut self, bytes: &[u8]) -> Result<()> {
		let mut cursor = Cursor::new(bytes);
		let mut staged = Vec::with_capacity(self.fields.len());
		for field in &self.fields {
			let slice = cursor.read_exact(field.byte_width())?;
			staged.push(field.field_type().decode(slice)?);
		}

		for (field, value) in self.fields.iter_mut().zip(staged) {
			field.replace(value);
		}
		Ok(())
	}

	fn index_of(&self, name: &str) -> Result<usize> {
		self.index
			.get(name)
			.copied()
			.ok_or_else(|| RecordError::UnknownField { name: name.to_owned() })
	}
}

#[cfg(test)]
mod tests;
