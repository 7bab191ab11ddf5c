#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "binstruct", about = "Fixed-layout binary record tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print field offsets and widths for a schema.
	Layout(cmd::layout::Args),
	/// Encode a record described by a schema into a file.
	Encode(cmd::encode::Args),
	/// Decode one record from a file.
	Decode(cmd::decode::Args),
	/// Print the encoded record as hex.
	Hex(cmd::hex::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> binstruct::record::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Layout(args) => cmd::layout::run(args),
		Commands::Encode(args) => cmd::encode::run(args),
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Hex(args) => cmd::hex::run(args),
	}
}
