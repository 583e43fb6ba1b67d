//! gormgen CLI - generate Go model structs from a schema description
//!
//! This crate provides the `gormgen` binary. It reads a `gormgen.toml`
//! configuration and a JSON schema description, and writes one Go file per
//! table (or a single file) with ORM-tagged structs.
//!
//! # Quick Start
//!
//! 1. Run `gormgen init` to create a `gormgen.toml`
//! 2. Point `schema` at a JSON schema description
//! 3. Run `gormgen generate`
//!
//! # Configuration
//!
//! ```toml
//! schema = "schema.json"
//! out = "./models"
//! package = "models"
//! tables = ["user*", "orders"]
//! json = true
//! jsonIgnore = ["password"]
//!
//! [audit]
//! created = ["created_at"]
//! updated = ["updated_at"]
//! deleted = ["deleted_at"]
//! ```
//!
//! # Commands
//!
//! - `gormgen init` - Create a new gormgen.toml configuration file
//! - `gormgen generate` - Render Go models into the output directory
//! - `gormgen check` - Validate the configuration and schema description

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod schema;

pub use config::{Config, Error as ConfigError};
pub use error::CliError;
