use std::fs;
use std::path::Path;

use binstruct::record::{Field, FieldType, RecordError, Result, Struct, Value};

const DEFAULT_RECORD_NAME: &str = "record";

/// On-disk schema document.
#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaDoc {
	#[serde(default)]
	name: Option<String>,
	fields: Vec<FieldDoc>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldDoc {
	name: String,
	#[serde(rename = "type")]
	type_tag: String,
	#[serde(default)]
	value: Option<serde_json::Value>,
}

/// Record built from a schema file, with its display name.
pub struct Schema {
	/// Record name from the schema, or `record`.
	pub name: String,
	/// Record populated with schema default values.
	pub record: Struct,
}

/// Read and build a schema from a JSON file.
pub fn load_schema(path: &Path) -> Result<Schema> {
	let bytes = fs::read(path)?;
	parse_schema(&bytes)
}

/// Build a schema from JSON bytes.
pub fn parse_schema(bytes: &[u8]) -> Result<Schema> {
	let doc: SchemaDoc = serde_json::from_slice(bytes).map_err(|err| RecordError::InvalidSchema { reason: err.to_string() })?;

	let mut fields = Vec::with_capacity(doc.fields.len());
	for item in doc.fields {
		let ty = FieldType::parse(&item.type_tag)?;
		let field = match item.value {
			Some(json) => {
				let value = json_to_value(&item.name, &json)?;
				Field::new(item.name, ty, value)?
			}
			None => Field::with_zero(item.name, ty)?,
		};
		fields.push(field);
	}

	Ok(Schema {
		name: doc.name.unwrap_or_else(|| DEFAULT_RECORD_NAME.to_owned()),
		record: Struct::new(fields)?,
	})
}

fn json_to_value(field: &str, json: &serde_json::Value) -> Result<Value> {
	match json {
		serde_json::Value::String(text) => Ok(Value::from(text.as_str())),
		serde_json::Value::Number(number) => {
			if let Some(value) = number.as_i64() {
				Ok(Value::I64(value))
			} else if let Some(value) = number.as_u64() {
				Ok(Value::U64(value))
			} else {
				Err(RecordError::InvalidSchema {
					reason: format!("field {field}: {number} is not an integer"),
				})
			}
		}
		other => Err(RecordError::InvalidSchema {
			reason: format!("field {field}: unsupported value {other}"),
		}),
	}
}
