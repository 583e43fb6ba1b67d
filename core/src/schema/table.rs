use std::collections::HashMap;

use super::{Column, Index};

/// A table: ordered columns plus its indexes keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub indexes: HashMap<String, Index>,
}

impl Table {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_column(mut self, column: Column) -> Self {
        self.add_column(column);
        self
    }

    #[must_use]
    pub fn with_index(mut self, index: Index) -> Self {
        self.add_index(index);
        self
    }

    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Register an index and record its kind on every member column.
    ///
    /// Member names that match no column are kept on the index but stamp nothing.
    /// An index replacing one of the same name first clears the old stamps.
    pub fn add_index(&mut self, index: Index) {
        if self.indexes.remove(&index.name).is_some() {
            for column in &mut self.columns {
                column.indexes.remove(&index.name);
            }
        }
        for member in &index.columns {
            if let Some(column) = self.column_mut(member) {
                column.indexes.insert(index.name.clone(), index.kind);
            }
        }
        self.indexes.insert(index.name.clone(), index);
    }

    /// Case-insensitive column lookup
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns
            .iter_mut()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}
