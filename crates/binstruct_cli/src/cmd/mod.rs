/// Record decode command.
pub mod decode;
/// Record encode command.
pub mod encode;
/// Hex dump command.
pub mod hex;
/// Layout inspection command.
pub mod layout;
/// JSON schema loading.
pub mod schema;
/// Shared argument parsing and output helpers.
pub mod util;

#[cfg(test)]
mod test_support;
