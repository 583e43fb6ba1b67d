use std::collections::{HashMap, HashSet};

use gormgen_types::SqlType;

use super::IndexType;

/// A table column as reported by introspection.
///
/// # Examples
///
/// ```
/// use gormgen_core::schema::Column;
///
/// let id = Column::new("id", "BIGINT")
///     .length(20)
///     .not_null()
///     .primary_key()
///     .autoincrement();
///
/// assert!(!id.nullable);
/// assert_eq!(id.length, Some(20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Column {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub sql_type: SqlType,
    /// Length or precision; zero is treated the same as unset
    pub length: Option<i64>,
    /// Scale, only meaningful alongside `length`
    pub length2: Option<i64>,
    pub nullable: bool,
    pub is_primary_key: bool,
    pub is_autoincrement: bool,
    /// Default expression text, empty when the column has none
    pub default: String,
    pub comment: String,
    pub enum_options: HashSet<String>,
    pub set_options: HashSet<String>,
    /// Index name -> kind, for every index this column participates in
    pub indexes: HashMap<String, IndexType>,
}

impl Column {
    /// A nullable column with no constraints
    #[must_use]
    pub fn new(name: impl Into<String>, sql_type: impl Into<SqlType>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            nullable: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn length(mut self, length: i64) -> Self {
        self.length = Some(length);
        self
    }

    #[must_use]
    pub fn precision(mut self, length: i64, length2: i64) -> Self {
        self.length = Some(length);
        self.length2 = Some(length2);
        self
    }

    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    #[must_use]
    pub fn autoincrement(mut self) -> Self {
        self.is_autoincrement = true;
        self
    }

    #[must_use]
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    #[must_use]
    pub fn enum_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_options = options.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn set_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Effective `(length, length2)`; a zero length counts as unset.
    #[must_use]
    pub fn lengths(&self) -> Option<(i64, Option<i64>)> {
        let length = self.length.filter(|&l| l != 0)?;
        Some((length, self.length2.filter(|&l| l != 0)))
    }
}
