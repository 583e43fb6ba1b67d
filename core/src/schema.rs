//! In-memory schema model
//!
//! Tables, columns and indexes as supplied by introspection. The generator only
//! ever reads these.

mod column;
mod index;
mod table;

pub use column::Column;
pub use index::{Index, IndexType};
pub use table::Table;
