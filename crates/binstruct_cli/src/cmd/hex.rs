use std::path::PathBuf;

use binstruct::record::Result;

use crate::cmd::schema::load_schema;
use crate::cmd::util::{apply_assignments, hex_string};

#[derive(clap::Args)]
pub struct Args {
	pub schema: PathBuf,
	#[arg(long = "set", value_name = "NAME=VALUE")]
	pub assignments: Vec<String>,
}

/// Print the encoded record as one hex line.
pub fn run(args: Args) -> Result<()> {
	let Args { schema, assignments } = args;

	let mut schema = load_schema(&schema)?;
	apply_assignments(&mut schema.record, &assignments)?;
	println!("{}", hex_string(&schema.record.to_bytes()?));

	Ok(())
}
