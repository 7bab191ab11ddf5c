use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use binstruct_testkit::{fixture_path as shared_fixture_path, scratch_path as shared_scratch_path, target_dir as workspace_target_dir};

static BINSTRUCT_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> PathBuf {
	shared_fixture_path(name)
}

pub(crate) fn fixture_arg(name: &str) -> String {
	fixture_path(name).to_string_lossy().into_owned()
}

pub(crate) fn scratch_path(name: &str) -> PathBuf {
	shared_scratch_path(name)
}

pub(crate) fn run_binstruct(args: &[&str]) -> Output {
	Command::new(binstruct_bin()).args(args).output().expect("binstruct command executes")
}

pub(crate) fn run_binstruct_stdout(args: &[&str]) -> String {
	let output = run_binstruct(args);
	assert!(
		output.status.success(),
		"binstruct command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	String::from_utf8(output.stdout).expect("stdout is utf8")
}

pub(crate) fn run_binstruct_json(args: &[&str]) -> serde_json::Value {
	let stdout = run_binstruct_stdout(args);
	serde_json::from_str(&stdout).expect("stdout should be valid json")
}

fn binstruct_bin() -> &'static PathBuf {
	BINSTRUCT_BIN.get_or_init(resolve_binstruct_bin)
}

fn resolve_binstruct_bin() -> PathBuf {
	if let Some(path) = option_env!("CARGO_BIN_EXE_binstruct") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "binstruct.exe" } else { "binstruct" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "binstruct"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build binstruct binary at {}", bin.display());

	bin
}
