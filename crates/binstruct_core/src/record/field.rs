use crate::record::{FieldType, Result, Value};

/// Named, typed slot holding one current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
	name: Box<str>,
	ty: FieldType,
	value: Value,
}

impl Field {
	/// Create a field with a validated initial value.
	pub fn new(name: impl Into<Box<str>>, ty: FieldType, initial: impl Into<Value>) -> Result<Self> {
		let name = name.into();
		let value = ty.validate_named(&name, initial.into())?;
		Ok(Self { name, ty, value })
	}

	/// Create a field holding the type's zero value.
	pub fn with_zero(name: impl Into<Box<str>>, ty: FieldType) -> Result<Self> {
		Self::new(name, ty, ty.zero_value())
	}

	/// Field name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Declared field type.
	pub fn field_type(&self) -> FieldType {
		self.ty
	}

	/// Encoded size in bytes.
	pub fn byte_width(&self) -> usize {
		self.ty.byte_width()
	}

	/// Current value.
	pub fn get(&self) -> &Value {
		&self.value
	}

	/// Replace the current value after validating it against the field type.
	pub fn set(&mut self, value: impl Into<Value>) -> Result<()> {
		self.value = self.ty.validate_named(&self.name, value.into())?;
		Ok(())
	}

	/// Encode the current value.
	pub fn encode(&self) -> Result<Vec<u8>> {
		self.ty.encode(&self.value)
	}

	/// Decode `bytes` and store the result as the current value.
	pub fn decode_into(&mut self, bytes: &[u8]) -> Result<()> {
		self.value = self.ty.decode(bytes)?;
		Ok(())
	}

	pub(crate) fn encode_into(&self, out: &mut Vec<u8>) -> Result<()> {
		self.ty.encode_into(&self.value, out)
	}

	pub(crate) fn replace(&mut self, value: Value) {
		self.value = value;
	}
}
