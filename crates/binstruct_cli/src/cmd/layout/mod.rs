use std::path::PathBuf;

use binstruct::record::{FieldLayout, Result};

use crate::cmd::schema::load_schema;
use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub schema: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print the byte layout described by a schema.
pub fn run(args: Args) -> Result<()> {
	let Args { schema: path, json } = args;

	let schema = load_schema(&path)?;
	let layout = schema.record.layout();

	if json {
		return print_json(&schema.name, schema.record.byte_width(), &layout);
	}

	println!("schema: {}", path.display());
	println!("record: {}", schema.name);
	println!("width: {}", schema.record.byte_width());
	println!("fields: {}", layout.len());
	println!("offset\twidth\ttype\tname");
	for item in &layout {
		println!("{}\t{}\t{}\t{}", item.offset, item.width, item.ty, item.name);
	}

	Ok(())
}

fn print_json(record: &str, width: usize, layout: &[FieldLayout<'_>]) -> Result<()> {
	let payload = LayoutJson {
		record: record.to_owned(),
		width,
		fields: layout
			.iter()
			.map(|item| LayoutFieldJson {
				name: item.name.to_owned(),
				type_tag: item.ty.to_string(),
				offset: item.offset,
				width: item.width,
			})
			.collect(),
	};

	emit_json(&payload)
}

#[derive(serde::Serialize)]
struct LayoutFieldJson {
	name: String,
	#[serde(rename = "type")]
	type_tag: String,
	offset: usize,
	width: usize,
}

#[derive(serde::Serialize)]
struct LayoutJson {
	record: String,
	width: usize,
	fields: Vec<LayoutFieldJson>,
}
