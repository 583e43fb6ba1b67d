//! Struct tag synthesis
//!
//! Every fact about a column that matters to the ORM becomes one fragment, in a
//! fixed order:
//!
//! 1. `not null` (skipped for implicitly non-null primary keys)
//! 2. `pk`
//! 3. `default <value>`
//! 4. `autoincr`
//! 5. `created` / `updated` / `deleted` for temporal audit columns
//! 6. `comment('<text>')` when comments are enabled
//! 7. `unique` / `index`, one per index, ordered by index name; composite
//!    indexes carry their name as `index(<name>)`
//! 8. the SQL type with its length, precision or option list
//!
//! The fragments are wrapped as `gorm:"column:<name>;<fragments>"`, optionally
//! followed by a `json:"..."` sub-tag, and the whole tag is enclosed in backquotes.

use gormgen_types::GoType;

use crate::mapper;
use crate::names::{self, AuditRole};
use crate::options::TagOptions;
use crate::schema::{Column, Table};
use crate::{gormgen_trace_missing_index, gormgen_trace_tag};

/// The ordered fragments of one column's ORM sub-tag
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagFacts(Vec<String>);

impl TagFacts {
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, fragment: impl Into<String>) {
        self.0.push(fragment.into());
    }

    /// Fragments joined by single spaces
    #[must_use]
    pub fn join(&self) -> String {
        self.0.join(" ")
    }
}

/// One generated struct field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedField {
    /// Go identifier for the field
    pub name: String,
    pub go_type: GoType,
    /// Complete tag including backquotes, empty when the field is untagged
    pub tag: String,
}

/// Whether the ORM already treats this column as non-null
fn is_implicit_not_null(column: &Column, opts: &TagOptions) -> bool {
    let policy = &opts.implicit_not_null;
    policy.enabled
        && opts
            .mapper
            .table_to_obj(&column.name)
            .eq_ignore_ascii_case(&policy.identifier)
        && mapper::go_type(column) == policy.go_type
}

fn quoted_options<'a>(options: impl IntoIterator<Item = &'a String>) -> String {
    let mut sorted: Vec<&String> = options.into_iter().collect();
    sorted.sort();
    sorted
        .iter()
        .map(|o| format!("'{o}'"))
        .collect::<Vec<_>>()
        .join(",")
}

/// The SQL type with its length/precision suffix or its enum/set option list
#[must_use]
pub fn type_detail(column: &Column) -> String {
    let name = column.sql_type.name();
    if let Some((length, length2)) = column.lengths() {
        match length2 {
            Some(length2) => format!("{name}({length},{length2})"),
            None => format!("{name}({length})"),
        }
    } else if !column.enum_options.is_empty() {
        format!("{name}({})", quoted_options(&column.enum_options))
    } else if !column.set_options.is_empty() {
        format!("{name}({})", quoted_options(&column.set_options))
    } else {
        name.to_string()
    }
}

/// Collect the ORM fragments for a column, in tag order
#[must_use]
pub fn tag_facts(table: &Table, column: &Column, opts: &TagOptions) -> TagFacts {
    let mut facts = TagFacts::default();

    if !column.nullable && !is_implicit_not_null(column, opts) {
        facts.push("not null");
    }
    if column.is_primary_key {
        facts.push("pk");
    }
    if !column.default.is_empty() {
        facts.push(format!("default {}", column.default));
    }
    if column.is_autoincrement {
        facts.push("autoincr");
    }

    if column.sql_type.is_time() {
        for role in AuditRole::ALL {
            if names::is_audit_column(&opts.audit, role, &column.name) {
                facts.push(role.keyword());
            }
        }
    }

    if opts.comments && !column.comment.is_empty() {
        facts.push(format!("comment('{}')", column.comment));
    }

    let mut index_names: Vec<&String> = column.indexes.keys().collect();
    index_names.sort();
    for name in index_names {
        let Some(index) = table.indexes.get(name) else {
            gormgen_trace_missing_index!(table.name, column.name, name);
            continue;
        };
        if index.is_composite() {
            facts.push(format!("{}({})", index.kind.keyword(), index.name));
        } else {
            facts.push(index.kind.keyword());
        }
    }

    facts.push(type_detail(column));
    facts
}

/// Build the complete struct tag for a column.
///
/// Never fails; an empty string means the field is emitted without a tag.
#[must_use]
pub fn build_tag(table: &Table, column: &Column, opts: &TagOptions) -> String {
    let facts = tag_facts(table, column, opts);

    let mut tags = Vec::with_capacity(2);
    if !facts.is_empty() {
        tags.push(format!(
            "{}:\"column:{};{}\"",
            opts.orm_key,
            column.name,
            facts.join()
        ));
    }
    if opts.json {
        if names::contains(&opts.json_ignore, &column.name) {
            tags.push(format!("{}:\"-\"", opts.json_key));
        } else {
            tags.push(format!("{}:\"{}\"", opts.json_key, column.name));
        }
    }

    let tag = if tags.is_empty() {
        String::new()
    } else {
        format!("`{}`", tags.join(" "))
    };
    gormgen_trace_tag!(table.name, column.name, tag);
    tag
}

/// Type and tag for one column, ready to be written as a struct field
#[must_use]
pub fn generate_field(table: &Table, column: &Column, opts: &TagOptions) -> GeneratedField {
    GeneratedField {
        name: opts.mapper.table_to_obj(&column.name),
        go_type: mapper::go_type(column),
        tag: build_tag(table, column, opts),
    }
}

/// Fields for every column of a table, in column order
#[must_use]
pub fn generate_fields(table: &Table, opts: &TagOptions) -> Vec<GeneratedField> {
    table
        .columns
        .iter()
        .map(|column| generate_field(table, column, opts))
        .collect()
}
