use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use binstruct::record::{RecordError, Result};

use crate::cmd::schema::load_schema;
use crate::cmd::util::apply_assignments;

#[derive(clap::Args)]
pub struct Args {
	pub schema: PathBuf,
	#[arg(long, short = 'o')]
	pub out: PathBuf,
	#[arg(long = "set", value_name = "NAME=VALUE")]
	pub assignments: Vec<String>,
}

/// Encode one record from schema defaults plus assignments into a file.
pub fn run(args: Args) -> Result<()> {
	let Args { schema, out, assignments } = args;

	let mut schema = load_schema(&schema)?;
	apply_assignments(&mut schema.record, &assignments)?;

	let mut sink = BufWriter::new(File::create(&out)?);
	let written = schema.record.write(&mut sink)?;
	sink.flush().map_err(RecordError::Write)?;

	println!("path: {}", out.display());
	println!("record: {}", schema.name);
	println!("bytes: {written}");

	Ok(())
}
