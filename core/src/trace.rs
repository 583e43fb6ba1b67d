//! Tracing utilities for generation passes.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a trace-level event with the tag synthesized for one column.
///
/// ```ignore
/// gormgen_trace_tag!(&table.name, &column.name, &tag);
/// ```
#[macro_export]
macro_rules! gormgen_trace_tag {
    ($table:expr, $column:expr, $tag:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(table = %$table, column = %$column, tag = %$tag, "gormgen.tag");
    };
}

/// Emit a debug-level event when a pass needs an extra import.
///
/// ```ignore
/// gormgen_trace_import!("time", &table.name, &column.name);
/// ```
#[macro_export]
macro_rules! gormgen_trace_import {
    ($package:expr, $table:expr, $column:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(package = %$package, table = %$table, column = %$column, "gormgen.import");
    };
}

/// Emit a warning when a column names an index its table does not hold.
#[macro_export]
macro_rules! gormgen_trace_missing_index {
    ($table:expr, $column:expr, $index:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!(table = %$table, column = %$column, index = %$index, "gormgen.missing_index");
    };
}
