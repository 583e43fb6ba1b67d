//! Tag and type synthesis for generated Go ORM models
//!
//! Given tables and columns from schema introspection, this crate decides the Go
//! type of each column, the ORM struct tag that describes it, and the imports a
//! generated file needs. All passes are pure functions of the schema and a
//! [`TagOptions`] value.
//!
//! ```
//! use gormgen_core::prelude::*;
//!
//! let table = Table::new("users").with_column(
//!     Column::new("id", "BIGINT").length(20).not_null().primary_key().autoincrement(),
//! );
//! let id = &table.columns[0];
//!
//! assert_eq!(type_string(id), "int64");
//! assert_eq!(
//!     build_tag(&table, id, &TagOptions::default()),
//!     "`gorm:\"column:id;pk autoincr BIGINT(20)\"`"
//! );
//! ```

pub mod compare;
pub mod imports;
pub mod mapper;
pub mod names;
pub mod options;
pub mod render;
pub mod schema;
pub mod tag;
mod trace;

pub use compare::{CompareError, Value};
pub use imports::collect_imports;
pub use mapper::{go_type, type_string};
pub use names::{AuditRole, NameMapper, is_audit_column};
pub use options::{AuditColumns, ImplicitNotNull, RenderOptions, TagOptions};
pub use render::{RenderError, file_name, render_go, render_struct, struct_name};
pub use schema::{Column, Index, IndexType, Table};
pub use tag::{GeneratedField, TagFacts, build_tag, generate_field, generate_fields, tag_facts};

pub use gormgen_types::{GoType, SqlType};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::compare::{CompareError, Value, equals, greater_than, less_or_equal, less_than};
    pub use crate::imports::collect_imports;
    pub use crate::mapper::{go_type, type_string};
    pub use crate::options::{RenderOptions, TagOptions};
    pub use crate::render::render_go;
    pub use crate::schema::{Column, Index, IndexType, Table};
    pub use crate::tag::{build_tag, generate_fields};
    pub use gormgen_types::{GoType, SqlType};
}
