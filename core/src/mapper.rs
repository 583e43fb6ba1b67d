//! Column type mapping

use gormgen_types::GoType;

use crate::schema::Column;

/// The Go type a column is generated as.
///
/// Binary columns come back from the lookup table as `[]uint8`; those are
/// rendered as `[]byte` instead.
#[must_use]
pub fn go_type(column: &Column) -> GoType {
    match GoType::from_sql_type(&column.sql_type) {
        GoType::Uint8Array => GoType::ByteSlice,
        other => other,
    }
}

/// [`go_type`] spelled as Go source
#[must_use]
pub fn type_string(column: &Column) -> &'static str {
    go_type(column).as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_arrays_become_byte_slices() {
        for sql in ["BLOB", "LONGBLOB", "VARBINARY", "bytea", "BINARY"] {
            assert_eq!(type_string(&Column::new("data", sql)), "[]byte", "{sql}");
        }
    }

    #[test]
    fn test_other_types_pass_through() {
        assert_eq!(type_string(&Column::new("id", "BIGINT")), "int64");
        assert_eq!(type_string(&Column::new("n", "INT")), "int");
        assert_eq!(type_string(&Column::new("at", "DATETIME")), "time.Time");
        assert_eq!(type_string(&Column::new("s", "VARCHAR")), "string");
        assert_eq!(type_string(&Column::new("g", "GEOMETRY")), "interface{}");
    }
}
