use std::fmt::Write as _;

use binstruct::record::{RecordError, Result, Struct, Value};

/// Split `NAME=VALUE` assignment text.
pub(crate) fn parse_assignment(text: &str) -> Result<(&str, &str)> {
	match text.split_once('=') {
		Some((name, raw)) if !name.trim().is_empty() => Ok((name.trim(), raw)),
		_ => Err(RecordError::InvalidAssignment { text: text.to_owned() }),
	}
}

/// Apply `NAME=VALUE` assignments in order.
///
/// Integer fields parse the value as a decimal or `0x` hex literal; string fields take it verbatim.
pub(crate) fn apply_assignments(record: &mut Struct, assignments: &[String]) -> Result<()> {
	for text in assignments {
		let (name, raw) = parse_assignment(text)?;
		let ty = record.field(name)?.field_type();
		let value = if ty.is_integer() {
			parse_int(raw).ok_or_else(|| RecordError::InvalidAssignment { text: text.clone() })?
		} else {
			Value::from(raw)
		};
		record.set(name, value)?;
	}
	Ok(())
}

fn parse_int(raw: &str) -> Option<Value> {
	let raw = raw.trim();
	if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
		return u64::from_str_radix(hex, 16).ok().map(Value::U64);
	}
	raw.parse::<i64>()
		.map(Value::I64)
		.ok()
		.or_else(|| raw.parse::<u64>().ok().map(Value::U64))
}

/// Render a field value as JSON.
pub(crate) fn value_json(value: &Value) -> serde_json::Value {
	match value {
		Value::I64(v) => serde_json::Value::from(*v),
		Value::U64(v) => serde_json::Value::from(*v),
		Value::String(v) => serde_json::Value::from(v.as_ref()),
	}
}

/// Render bytes as lowercase hex without separators.
pub(crate) fn hex_string(bytes: &[u8]) -> String {
	let mut out = String::with_capacity(bytes.len() * 2);
	for byte in bytes {
		let _ = write!(out, "{byte:02x}");
	}
	out
}

/// Print a JSON payload to stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload).map_err(std::io::Error::from)?;
	println!("{text}");
	Ok(())
}
