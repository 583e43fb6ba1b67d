//! Go source rendering
//!
//! Lays out the package clause, import block and one struct per table, with
//! fields aligned the way `gofmt` aligns struct fields.

use thiserror::Error;

use crate::compare::{self, CompareError, Value};
use crate::imports::{collect_imports, sorted_imports};
use crate::options::RenderOptions;
use crate::schema::Table;
use crate::tag::{GeneratedField, generate_fields};

#[derive(Debug, Error)]
pub enum RenderError {
    /// A template condition compared values it cannot compare
    #[error("template condition failed: {0}")]
    Condition(#[from] CompareError),
}

/// Struct name for a table, after trimming the configured prefix
#[must_use]
pub fn struct_name(table: &Table, opts: &RenderOptions) -> String {
    let name = table
        .name
        .strip_prefix(opts.table_prefix.as_str())
        .filter(|rest| !rest.is_empty())
        .unwrap_or(&table.name);
    opts.tags.mapper.table_to_obj(name)
}

/// Output file name for a table: the struct name with a lower-case first letter
#[must_use]
pub fn file_name(table: &Table, opts: &RenderOptions) -> String {
    format!("{}.go", un_title(&struct_name(table, opts)))
}

fn un_title(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render one struct declaration
#[must_use]
pub fn render_struct(table: &Table, opts: &RenderOptions) -> String {
    let fields = generate_fields(table, &opts.tags);
    let mut code = format!("type {} struct {{\n", struct_name(table, opts));
    for line in aligned_fields(&fields) {
        code.push('\t');
        code.push_str(&line);
        code.push('\n');
    }
    code.push_str("}\n");
    code
}

/// Field lines padded to common widths, measured in characters as gofmt does
fn aligned_fields(fields: &[GeneratedField]) -> Vec<String> {
    let name_width = fields
        .iter()
        .map(|f| f.name.chars().count())
        .max()
        .unwrap_or(0);
    let type_width = fields
        .iter()
        .filter(|f| !f.tag.is_empty())
        .map(|f| f.go_type.as_str().len())
        .max()
        .unwrap_or(0);

    fields
        .iter()
        .map(|f| {
            if f.tag.is_empty() {
                format!("{:<name_width$} {}", f.name, f.go_type)
            } else {
                format!(
                    "{:<name_width$} {:<type_width$} {}",
                    f.name,
                    f.go_type.as_str(),
                    f.tag
                )
            }
        })
        .collect()
}

/// Render a complete Go file holding every table in `tables`
pub fn render_go(tables: &[Table], opts: &RenderOptions) -> Result<String, RenderError> {
    let mut code = format!("package {}\n\n", opts.package);

    let imports = collect_imports(tables);
    if compare::greater_than(&Value::from(imports.len()), &Value::from(0usize))? {
        code.push_str("import (\n");
        for path in sorted_imports(&imports) {
            code.push_str(&format!("\t\"{path}\"\n"));
        }
        code.push_str(")\n\n");
    }

    for (i, table) in tables.iter().enumerate() {
        if i > 0 {
            code.push('\n');
        }
        code.push_str(&render_struct(table, opts));
    }

    Ok(code)
}
