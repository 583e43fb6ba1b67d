//! CLI command implementations
//!
//! Each command module implements one gormgen subcommand.

pub mod check;
pub mod generate;
