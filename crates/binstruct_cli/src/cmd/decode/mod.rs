use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use binstruct::record::{Result, Struct};

use crate::cmd::schema::load_schema;
use crate::cmd::util::{emit_json, value_json};

#[derive(clap::Args)]
pub struct Args {
	pub schema: PathBuf,
	pub input: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Decode one record from the start of a file.
pub fn run(args: Args) -> Result<()> {
	let Args { schema, input, json } = args;

	let mut schema = load_schema(&schema)?;
	let mut source = BufReader::new(File::open(&input)?);
	schema.record.read(&mut source)?;

	if json {
		return print_json(&schema.name, &schema.record);
	}

	println!("path: {}", input.display());
	println!("record: {}", schema.name);
	println!("width: {}", schema.record.byte_width());
	for field in schema.record.fields() {
		println!("{} = {}", field.name(), field.get());
	}

	Ok(())
}

fn print_json(name: &str, record: &Struct) -> Result<()> {
	let payload = DecodeJson {
		record: name.to_owned(),
		width: record.byte_width(),
		fields: record
			.fields()
			.map(|field| DecodeFieldJson {
				name: field.name().to_owned(),
				type_tag: field.field_type().to_string(),
				value: value_json(field.get()),
			})
			.collect(),
	};

	emit_json(&payload)
}

#[derive(serde::Serialize)]
struct DecodeFieldJson {
	name: String,
	#[serde(rename = "type")]
	type_tag: String,
	value: serde_json::Value,
}

#[derive(serde::Serialize)]
struct DecodeJson {
	record: String,
	width: usize,
	fields: Vec<DecodeFieldJson>,
}
