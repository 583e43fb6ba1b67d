//! Shared type definitions for gormgen
//!
//! This crate provides the type vocabulary used by the code generator:
//!
//! - [`SqlType`] - A declared SQL column type, as reported by introspection
//! - [`GoType`] - The Go type a column is generated as, and the lookup table
//!   from SQL types to Go types
//!
//! # Features
//!
//! - `serde` - Enable serde serialization/deserialization

mod go_type;
mod sql_type;
mod type_category;

pub use go_type::GoType;
pub use sql_type::SqlType;

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{GoType, SqlType};
}
