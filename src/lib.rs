//! # gormgen
//!
//! Generate tagged Go model structs from database schema metadata.
//!
//! ## Quick Start
//!
//! ```rust
//! use gormgen::prelude::*;
//!
//! let table = Table::new("user_info")
//!     .with_column(Column::new("id", "BIGINT").length(20).not_null().primary_key())
//!     .with_column(Column::new("email", "VARCHAR").length(255).not_null())
//!     .with_index(Index::new("uq_email", ["email"]).unique());
//!
//! let code = render_go(&[table], &RenderOptions::default()).unwrap();
//! assert!(code.contains("type UserInfo struct {"));
//! assert!(code.contains("`gorm:\"column:email;not null unique VARCHAR(255)\"`"));
//! ```
//!
//! ## Crates
//!
//! - [`types`] - SQL type affinities and the Go types they map to
//! - [`core`] - tag synthesis, import collection and rendering
//!
//! The `gormgen` binary lives in `gormgen-cli`.

pub use gormgen_core::*;

/// SQL and Go type vocabulary
pub use gormgen_types as types;

/// Schema model, tag synthesis and rendering
pub mod core {
    pub use gormgen_core::*;
}

/// Prelude module for commonly used types
pub mod prelude {
    pub use gormgen_core::prelude::*;
}
