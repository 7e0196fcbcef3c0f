//! Subcommands of the `textmask` binary.

pub mod batch;
pub mod config;
pub mod edit;
pub mod field;
pub mod fields;
pub mod number;
