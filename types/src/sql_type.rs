//! Declared SQL column types

use crate::type_category::is_time_type;

/// A column's declared SQL type name, e.g. `VARCHAR`, `BIGINT`, `ENUM`.
///
/// The name is kept exactly as introspection reported it; length and precision
/// live on the column. The temporal check is case-insensitive.
///
/// # Examples
///
/// ```
/// use gormgen_types::SqlType;
///
/// let ty = SqlType::new("DATETIME");
/// assert!(ty.is_time());
/// assert!(!SqlType::new("VARCHAR").is_time());
/// assert_eq!(ty.to_string(), "DATETIME");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SqlType {
    pub name: String,
}

impl SqlType {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is a date or time type
    #[must_use]
    pub fn is_time(&self) -> bool {
        is_time_type(&self.name)
    }
}

impl From<&str> for SqlType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SqlType {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl core::fmt::Display for SqlType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}
