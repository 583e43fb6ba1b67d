//! Import collection for generated files

use std::collections::HashMap;

use crate::gormgen_trace_import;
use crate::mapper;
use crate::schema::Table;

/// Packages a file containing `tables` must import.
///
/// Keys and values are both the import path, so the map can be written straight
/// into an import block. Currently the only trigger is a column mapped to
/// `time.Time`, which needs `time`.
#[must_use]
pub fn collect_imports(tables: &[Table]) -> HashMap<String, String> {
    let mut imports = HashMap::new();
    for table in tables {
        for column in &table.columns {
            let Some(package) = mapper::go_type(column).package() else {
                continue;
            };
            if !imports.contains_key(package) {
                gormgen_trace_import!(package, table.name, column.name);
                imports.insert(package.to_string(), package.to_string());
            }
        }
    }
    imports
}

/// Import paths in a stable order
#[must_use]
pub fn sorted_imports(imports: &HashMap<String, String>) -> Vec<&str> {
    let mut paths: Vec<&str> = imports.values().map(String::as_str).collect();
    paths.sort_unstable();
    paths
}
