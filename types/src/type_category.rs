//! SQL type family classification
//!
//! The generator only needs to know whether a declared type is temporal.
//! Matching is case-insensitive and tolerates a trailing `(...)` suffix.

/// Temporal type names
pub(crate) const TIME_TYPES: &[&str] = &[
    "date",
    "datetime",
    "smalldatetime",
    "time",
    "timestamp",
    "timestampz",
    "timestamptz",
    "year",
];

/// Case-insensitive match of `sql_type` against `name`, also accepting `name(...)`.
pub(crate) fn matches_name(sql_type: &str, name: &str) -> bool {
    let sql_type = sql_type.trim();
    if sql_type.eq_ignore_ascii_case(name) {
        return true;
    }
    sql_type.len() > name.len()
        && sql_type.is_char_boundary(name.len())
        && sql_type[..name.len()].eq_ignore_ascii_case(name)
        && sql_type.as_bytes()[name.len()] == b'('
}

/// Whether `sql_type` names a date or time type
pub(crate) fn is_time_type(sql_type: &str) -> bool {
    TIME_TYPES.iter().any(|name| matches_name(sql_type, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_types() {
        assert!(is_time_type("TIMESTAMP"));
        assert!(is_time_type("year"));
        assert!(is_time_type("datetime(6)"));
        assert!(!is_time_type("VARCHAR"));
        assert!(!is_time_type("geometry"));
        assert!(!is_time_type(""));
    }

    #[test]
    fn test_prefix_without_paren_is_not_a_match() {
        // "integer" must not classify as "int" followed by garbage
        assert!(matches_name("integer", "integer"));
        assert!(!matches_name("integer", "int"));
        assert!(matches_name("int(11)", "int"));
        assert!(!matches_name("datetime2", "datetime"));
    }
}
