//! Go type definitions and the SQL-to-Go lookup table

use crate::SqlType;
use crate::type_category::matches_name;

/// Go types a column can be generated as.
///
/// # Examples
///
/// ```
/// use gormgen_types::{GoType, SqlType};
///
/// assert_eq!(GoType::from_sql_type(&SqlType::new("BIGINT")), GoType::Int64);
/// assert_eq!(GoType::from_sql_type(&SqlType::new("datetime")).as_str(), "time.Time");
/// assert_eq!(GoType::Time.package(), Some("time"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GoType {
    #[cfg_attr(feature = "serde", serde(rename = "int"))]
    Int,
    #[cfg_attr(feature = "serde", serde(rename = "int64"))]
    Int64,
    #[cfg_attr(feature = "serde", serde(rename = "uint"))]
    Uint,
    #[cfg_attr(feature = "serde", serde(rename = "uint64"))]
    Uint64,
    #[cfg_attr(feature = "serde", serde(rename = "float32"))]
    Float32,
    #[cfg_attr(feature = "serde", serde(rename = "float64"))]
    Float64,
    #[cfg_attr(feature = "serde", serde(rename = "string"))]
    String,
    #[cfg_attr(feature = "serde", serde(rename = "bool"))]
    Bool,
    /// The generic unsigned byte array `[]uint8`
    #[cfg_attr(feature = "serde", serde(rename = "[]uint8"))]
    Uint8Array,
    /// The dedicated byte slice `[]byte`
    #[cfg_attr(feature = "serde", serde(rename = "[]byte"))]
    ByteSlice,
    #[cfg_attr(feature = "serde", serde(rename = "time.Time"))]
    Time,
    /// Fallback for SQL types the lookup table does not know
    #[cfg_attr(feature = "serde", serde(rename = "interface{}"))]
    Any,
}

/// SQL type name -> Go type. Checked in order, first match wins.
const LOOKUP: &[(&str, GoType)] = &[
    ("bit", GoType::Int),
    ("tinyint", GoType::Int),
    ("smallint", GoType::Int),
    ("mediumint", GoType::Int),
    ("int", GoType::Int),
    ("integer", GoType::Int),
    ("serial", GoType::Int),
    ("bigint", GoType::Int64),
    ("bigserial", GoType::Int64),
    ("unsigned int", GoType::Uint),
    ("unsigned bigint", GoType::Uint64),
    ("float", GoType::Float32),
    ("real", GoType::Float32),
    ("double", GoType::Float64),
    ("char", GoType::String),
    ("nchar", GoType::String),
    ("varchar", GoType::String),
    ("nvarchar", GoType::String),
    ("tinytext", GoType::String),
    ("text", GoType::String),
    ("ntext", GoType::String),
    ("mediumtext", GoType::String),
    ("longtext", GoType::String),
    ("enum", GoType::String),
    ("set", GoType::String),
    ("uuid", GoType::String),
    ("clob", GoType::String),
    ("sysname", GoType::String),
    ("json", GoType::String),
    ("jsonb", GoType::String),
    ("decimal", GoType::String),
    ("numeric", GoType::String),
    ("money", GoType::String),
    ("smallmoney", GoType::String),
    ("tinyblob", GoType::Uint8Array),
    ("blob", GoType::Uint8Array),
    ("mediumblob", GoType::Uint8Array),
    ("longblob", GoType::Uint8Array),
    ("bytea", GoType::Uint8Array),
    ("binary", GoType::Uint8Array),
    ("varbinary", GoType::Uint8Array),
    ("uniqueidentifier", GoType::Uint8Array),
    ("image", GoType::Uint8Array),
    ("bool", GoType::Bool),
    ("boolean", GoType::Bool),
    ("date", GoType::Time),
    ("datetime", GoType::Time),
    ("smalldatetime", GoType::Time),
    ("time", GoType::Time),
    ("timestamp", GoType::Time),
    ("timestampz", GoType::Time),
    ("timestamptz", GoType::Time),
    ("year", GoType::Time),
];

impl GoType {
    /// Look up the Go type conventionally used for a SQL type.
    ///
    /// Unknown SQL types resolve to [`GoType::Any`]; this never fails.
    #[must_use]
    pub fn from_sql_type(sql_type: &SqlType) -> Self {
        LOOKUP
            .iter()
            .find(|(name, _)| matches_name(sql_type.name(), name))
            .map(|(_, go)| *go)
            .unwrap_or(Self::Any)
    }

    /// The Go spelling of this type
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Uint8Array => "[]uint8",
            Self::ByteSlice => "[]byte",
            Self::Time => "time.Time",
            Self::Any => "interface{}",
        }
    }

    /// The package a generated file must import to use this type
    #[must_use]
    pub const fn package(&self) -> Option<&'static str> {
        match self {
            Self::Time => Some("time"),
            _ => None,
        }
    }
}

impl core::fmt::Display for GoType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn go(name: &str) -> GoType {
        GoType::from_sql_type(&SqlType::new(name))
    }

    #[test]
    fn test_integer_widths() {
        assert_eq!(go("INT"), GoType::Int);
        assert_eq!(go("int(11)"), GoType::Int);
        assert_eq!(go("TINYINT"), GoType::Int);
        assert_eq!(go("BIGINT"), GoType::Int64);
        assert_eq!(go("UNSIGNED BIGINT"), GoType::Uint64);
    }

    #[test]
    fn test_float_widths() {
        assert_eq!(go("FLOAT"), GoType::Float32);
        assert_eq!(go("DOUBLE"), GoType::Float64);
        assert_eq!(go("DECIMAL"), GoType::String);
    }

    #[test]
    fn test_binary_resolves_to_uint8_array() {
        assert_eq!(go("BLOB"), GoType::Uint8Array);
        assert_eq!(go("varbinary"), GoType::Uint8Array);
        assert_eq!(GoType::Uint8Array.as_str(), "[]uint8");
    }

    #[test]
    fn test_temporal_types() {
        for name in ["DATE", "DATETIME", "TIME", "TIMESTAMP", "YEAR"] {
            assert_eq!(go(name), GoType::Time, "{name}");
        }
        assert_eq!(GoType::Time.package(), Some("time"));
        assert_eq!(GoType::Int64.package(), None);
    }

    #[test]
    fn test_unknown_falls_back_to_any() {
        assert_eq!(go("GEOMETRY"), GoType::Any);
        assert_eq!(go("GEOMETRY").as_str(), "interface{}");
    }
}
