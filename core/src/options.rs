//! Generation options
//!
//! Everything the generator would otherwise read from global flags lives in
//! these values, which are passed by reference into every pass.

use gormgen_types::GoType;

use crate::names::{AuditRole, NameMapper};

/// Column names that receive `created`, `updated` and `deleted` markers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AuditColumns {
    pub created: Vec<String>,
    pub updated: Vec<String>,
    pub deleted: Vec<String>,
}

impl Default for AuditColumns {
    fn default() -> Self {
        Self {
            created: vec!["created_at".to_string()],
            updated: vec!["updated_at".to_string()],
            deleted: vec!["deleted_at".to_string()],
        }
    }
}

impl AuditColumns {
    #[must_use]
    pub fn names(&self, role: AuditRole) -> &[String] {
        match role {
            AuditRole::Created => &self.created,
            AuditRole::Updated => &self.updated,
            AuditRole::Deleted => &self.deleted,
        }
    }
}

/// Primary-key columns the ORM already treats as non-null.
///
/// A column whose mapped identifier equals `identifier` (ignoring case) and whose
/// Go type is `go_type` gets no `not null` fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ImplicitNotNull {
    pub enabled: bool,
    pub identifier: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub go_type: GoType,
}

impl Default for ImplicitNotNull {
    fn default() -> Self {
        Self {
            enabled: true,
            identifier: "Id".to_string(),
            go_type: GoType::Int64,
        }
    }
}

impl ImplicitNotNull {
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}

/// Options consumed by tag synthesis
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct TagOptions {
    /// Key of the ORM sub-tag
    pub orm_key: String,
    /// Key of the serialization sub-tag
    pub json_key: String,
    /// Emit `comment('...')` fragments
    pub comments: bool,
    /// Emit a serialization sub-tag
    pub json: bool,
    /// Columns whose serialization sub-tag is `-`
    pub json_ignore: Vec<String>,
    pub audit: AuditColumns,
    pub implicit_not_null: ImplicitNotNull,
    pub mapper: NameMapper,
}

impl Default for TagOptions {
    fn default() -> Self {
        Self {
            orm_key: "gorm".to_string(),
            json_key: "json".to_string(),
            comments: false,
            json: false,
            json_ignore: Vec::new(),
            audit: AuditColumns::default(),
            implicit_not_null: ImplicitNotNull::default(),
            mapper: NameMapper::default(),
        }
    }
}

/// Options consumed by the Go renderer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RenderOptions {
    /// Go package name written at the top of every file
    pub package: String,
    /// Prefix trimmed from table names before they become struct names
    pub table_prefix: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub tags: TagOptions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            package: "models".to_string(),
            table_prefix: String::new(),
            tags: TagOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = TagOptions::default();
        assert_eq!(opts.orm_key, "gorm");
        assert!(!opts.comments);
        assert!(!opts.json);
        assert_eq!(opts.audit.created, ["created_at"]);
        assert!(opts.implicit_not_null.enabled);
        assert_eq!(opts.implicit_not_null.go_type, GoType::Int64);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_toml() {
        let opts: RenderOptions = toml::from_str(
            r#"
            package = "entity"
            tablePrefix = "t_"
            comments = true
            json = true
            jsonIgnore = ["password"]

            [audit]
            created = ["ctime"]

            [implicitNotNull]
            identifier = "ID"
            type = "int"
            "#,
        )
        .unwrap();

        assert_eq!(opts.package, "entity");
        assert_eq!(opts.table_prefix, "t_");
        assert!(opts.tags.comments);
        assert_eq!(opts.tags.json_ignore, ["password"]);
        assert_eq!(opts.tags.audit.created, ["ctime"]);
        // untouched lists keep their defaults
        assert_eq!(opts.tags.audit.updated, ["updated_at"]);
        assert_eq!(opts.tags.implicit_not_null.go_type, GoType::Int);
        assert!(opts.tags.implicit_not_null.enabled);
        assert_eq!(opts.tags.orm_key, "gorm");
    }
}
