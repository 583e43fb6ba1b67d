//! Generate command
//!
//! This command renders Go models by:
//! 1. Loading the schema description named in the config
//! 2. Keeping the tables selected by the `tables` filters
//! 3. Rendering one file per table, or a single `models.go`
//! 4. Writing the files into the output directory

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use gormgen_core::{Table, file_name, render_go};

use crate::config::{Config, SINGLE_FILE_NAME};
use crate::error::CliError;
use crate::output;
use crate::schema::load_schema;

/// Command-line overrides for values also present in the config
#[derive(Debug, Default)]
pub struct GenerateOptions {
    pub out: Option<PathBuf>,
    pub package: Option<String>,
    pub single_file: bool,
}

pub fn run(config: &Config, opts: GenerateOptions) -> Result<(), CliError> {
    let mut config = config.clone();
    if let Some(out) = opts.out {
        config.out = out;
    }
    if let Some(package) = opts.package {
        config.render.package = package;
    }
    config.single_file |= opts.single_file;
    config.validate()?;

    println!("{}", output::heading("Generating models..."));
    println!();
    println!("  {}: {}", output::label("Schema"), config.schema.display());
    println!("  {}: {}", output::label("Tables"), config.tables_display());
    println!("  {}: {}", output::label("Output"), config.out.display());
    println!();

    let tables = selected_tables(&config)?;
    let files = render_files(&config, &tables)?;

    std::fs::create_dir_all(&config.out).map_err(|e| {
        CliError::IoError(format!("failed to create {}: {e}", config.out.display()))
    })?;

    for (name, code) in &files {
        let path = config.out.join(name);
        write_file(&path, code)?;
        println!("  {} {}", output::success("wrote"), path.display());
    }

    println!();
    println!(
        "{}",
        output::success(&format!(
            "Generated {} file(s) for {} table(s).",
            files.len(),
            tables.len()
        ))
    );
    Ok(())
}

/// Load the schema description and apply the table filters
pub fn selected_tables(config: &Config) -> Result<Vec<Table>, CliError> {
    let patterns = config.table_patterns()?;
    let tables: Vec<Table> = load_schema(&config.schema)?
        .into_iter()
        .filter(|t| Config::selects(&patterns, &t.name))
        .collect();

    if tables.is_empty() {
        return Err(CliError::NoTables(config.tables_display()));
    }
    Ok(tables)
}

/// File name and contents for every output file, in schema order
fn render_files(config: &Config, tables: &[Table]) -> Result<Vec<(String, String)>, CliError> {
    if config.single_file {
        let code = render_go(tables, &config.render)?;
        return Ok(vec![(SINGLE_FILE_NAME.to_string(), code)]);
    }

    let mut seen = HashSet::new();
    let mut files = Vec::with_capacity(tables.len());
    for table in tables {
        let name = file_name(table, &config.render);
        if !seen.insert(name.clone()) {
            return Err(CliError::Other(format!(
                "table '{}' maps to {name}, which another table already uses",
                table.name
            )));
        }
        let code = render_go(std::slice::from_ref(table), &config.render)?;
        files.push((name, code));
    }
    Ok(files)
}

fn write_file(path: &Path, code: &str) -> Result<(), CliError> {
    std::fs::write(path, code)
        .map_err(|e| CliError::IoError(format!("failed to write {}: {e}", path.display())))
}
