//! JSON schema description loading
//!
//! The generator never talks to a database; tables are read from a JSON file
//! describing columns and indexes, then converted into the core model.

use std::path::{Path, PathBuf};

use gormgen_core::{Column, Index, IndexType, Table};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] serde_json::Error),

    #[error("index '{index}' on table '{table}' names unknown column '{column}'")]
    UnknownIndexColumn {
        table: String,
        index: String,
        column: String,
    },
}

pub type SchemaError = Error;

// ============================================================================
// File format
// ============================================================================

#[derive(Debug, Deserialize)]
struct SchemaFile {
    #[serde(default)]
    tables: Vec<TableDef>,
}

#[derive(Debug, Deserialize)]
struct TableDef {
    name: String,
    #[serde(default)]
    columns: Vec<ColumnDef>,
    #[serde(default)]
    indexes: Vec<IndexDef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColumnDef {
    name: String,
    #[serde(rename = "type")]
    sql_type: String,
    #[serde(default)]
    length: Option<i64>,
    #[serde(default)]
    length2: Option<i64>,
    #[serde(default = "default_nullable")]
    nullable: bool,
    #[serde(default)]
    primary_key: bool,
    #[serde(default)]
    auto_increment: bool,
    #[serde(default)]
    default: Option<String>,
    #[serde(default)]
    comment: Option<String>,
    #[serde(default)]
    enum_options: Vec<String>,
    #[serde(default)]
    set_options: Vec<String>,
}

fn default_nullable() -> bool { true }

#[derive(Debug, Deserialize)]
struct IndexDef {
    name: String,
    #[serde(rename = "type", default)]
    kind: IndexType,
    columns: Vec<String>,
}

impl From<ColumnDef> for Column {
    fn from(def: ColumnDef) -> Self {
        Column {
            name: def.name,
            sql_type: def.sql_type.into(),
            length: def.length,
            length2: def.length2,
            nullable: def.nullable,
            is_primary_key: def.primary_key,
            is_autoincrement: def.auto_increment,
            default: def.default.unwrap_or_default(),
            comment: def.comment.unwrap_or_default(),
            enum_options: def.enum_options.into_iter().collect(),
            set_options: def.set_options.into_iter().collect(),
            indexes: Default::default(),
        }
    }
}

impl TableDef {
    fn into_table(self) -> Result<Table, Error> {
        let mut table = Table::new(self.name);
        for column in self.columns {
            table.add_column(column.into());
        }
        for index in self.indexes {
            if let Some(missing) = index.columns.iter().find(|c| table.column(c).is_none()) {
                return Err(Error::UnknownIndexColumn {
                    table: table.name.clone(),
                    index: index.name,
                    column: missing.clone(),
                });
            }
            table.add_index(Index {
                name: index.name,
                kind: index.kind,
                columns: index.columns,
            });
        }
        Ok(table)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Read and convert every table in a schema description file
pub fn load_schema(path: &Path) -> Result<Vec<Table>, Error> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io(path.into(), e))?;
    parse_schema(&content).map_err(|e| match e {
        ParseFailure::Json(e) => Error::Parse(path.into(), e),
        ParseFailure::Invalid(e) => e,
    })
}

fn parse_schema(content: &str) -> Result<Vec<Table>, ParseFailure> {
    let file: SchemaFile = serde_json::from_str(content).map_err(ParseFailure::Json)?;
    file.tables
        .into_iter()
        .map(TableDef::into_table)
        .collect::<Result<_, _>>()
        .map_err(ParseFailure::Invalid)
}

#[derive(Debug)]
enum ParseFailure {
    Json(serde_json::Error),
    Invalid(Error),
}
