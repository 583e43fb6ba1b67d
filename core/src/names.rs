//! Column-name predicates and identifier mapping

use heck::ToUpperCamelCase;

use crate::options::AuditColumns;

/// Roles an audit timestamp column can play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditRole {
    Created,
    Updated,
    Deleted,
}

impl AuditRole {
    pub const ALL: [AuditRole; 3] = [Self::Created, Self::Updated, Self::Deleted];

    /// The tag keyword for this role
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }
}

/// Exact, case-sensitive membership test
#[must_use]
pub fn contains(list: &[String], name: &str) -> bool {
    list.iter().any(|s| s == name)
}

/// Whether `name` is configured as an audit column for `role`
#[must_use]
pub fn is_audit_column(audit: &AuditColumns, role: AuditRole, name: &str) -> bool {
    contains(audit.names(role), name)
}

/// Common initialisms kept upper-case by [`NameMapper::Gonic`]
const INITIALISMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID",
    "IP", "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS",
    "TTL", "UDP", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XSRF", "XSS",
];

/// How table and column names become Go identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NameMapper {
    /// `user_id` -> `UserId`, `userID` -> `Userid`, `_id` -> `_id`
    #[default]
    Snake,
    /// `user_id` -> `UserID`, upper-casing common initialisms
    Gonic,
    /// Names are used as-is
    Same,
}

impl NameMapper {
    /// Map a table or column name to an exported Go identifier
    #[must_use]
    pub fn table_to_obj(&self, name: &str) -> String {
        match self {
            Self::Snake => title_cased(name),
            Self::Gonic => name
                .split(|c: char| c == '_' || c == '-' || c == ' ')
                .filter(|word| !word.is_empty())
                .map(|word| {
                    let upper = word.to_ascii_uppercase();
                    if INITIALISMS.contains(&upper.as_str()) {
                        upper
                    } else {
                        word.to_upper_camel_case()
                    }
                })
                .collect(),
            Self::Same => name.to_string(),
        }
    }
}

/// Lower-case the name, then upper-case its first character and every character
/// following an underscore, dropping those underscores. A leading underscore is
/// kept as the first character, so `_id` stays `_id`.
fn title_cased(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut up_next = true;
    for c in name.to_lowercase().chars() {
        if up_next {
            up_next = false;
            out.push(c.to_ascii_uppercase());
        } else if c == '_' {
            up_next = true;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_membership_is_exact() {
        let audit = AuditColumns::default();
        assert!(is_audit_column(&audit, AuditRole::Created, "created_at"));
        assert!(!is_audit_column(&audit, AuditRole::Created, "Created_At"));
        assert!(!is_audit_column(&audit, AuditRole::Created, "created"));
        assert!(!is_audit_column(&audit, AuditRole::Updated, "created_at"));
        assert!(is_audit_column(&audit, AuditRole::Deleted, "deleted_at"));
    }

    #[test]
    fn test_custom_audit_lists() {
        let audit = AuditColumns {
            created: vec!["ctime".into(), "inserted".into()],
            updated: vec![],
            deleted: vec!["removed".into()],
        };
        assert!(is_audit_column(&audit, AuditRole::Created, "inserted"));
        assert!(!is_audit_column(&audit, AuditRole::Updated, "updated_at"));
        assert!(is_audit_column(&audit, AuditRole::Deleted, "removed"));
    }

    #[test]
    fn test_snake_mapper() {
        assert_eq!(NameMapper::Snake.table_to_obj("id"), "Id");
        assert_eq!(NameMapper::Snake.table_to_obj("user_id"), "UserId");
        assert_eq!(NameMapper::Snake.table_to_obj("order_items"), "OrderItems");
    }

    #[test]
    fn test_snake_mapper_lowercases_first() {
        assert_eq!(NameMapper::Snake.table_to_obj("ID"), "Id");
        assert_eq!(NameMapper::Snake.table_to_obj("userID"), "Userid");
        assert_eq!(NameMapper::Snake.table_to_obj("USER_NAME"), "UserName");
    }

    #[test]
    fn test_snake_mapper_underscores() {
        assert_eq!(NameMapper::Snake.table_to_obj("_id"), "_id");
        assert_eq!(NameMapper::Snake.table_to_obj("user__id"), "User_id");
        assert_eq!(NameMapper::Snake.table_to_obj("t_"), "T");
        assert_eq!(NameMapper::Snake.table_to_obj(""), "");
    }

    #[test]
    fn test_gonic_mapper() {
        assert_eq!(NameMapper::Gonic.table_to_obj("id"), "ID");
        assert_eq!(NameMapper::Gonic.table_to_obj("user_id"), "UserID");
        assert_eq!(NameMapper::Gonic.table_to_obj("avatar_url"), "AvatarURL");
        assert_eq!(NameMapper::Gonic.table_to_obj("name"), "Name");
    }

    #[test]
    fn test_same_mapper() {
        assert_eq!(NameMapper::Same.table_to_obj("user_id"), "user_id");
    }
}
