//! Declarative fixed-layout binary records.

/// Field types, fields, and the struct codec.
pub mod record;
