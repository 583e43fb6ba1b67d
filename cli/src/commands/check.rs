//! Check command - validates configuration and the schema description

use gormgen_core::imports::sorted_imports;
use gormgen_core::{collect_imports, file_name};

use crate::commands::generate::selected_tables;
use crate::config::Config;
use crate::error::CliError;
use crate::output;

pub fn run(config: &Config) -> Result<(), CliError> {
    println!("{}", output::heading("Checking configuration..."));
    println!();

    println!("  {}: {}", output::label("Package"), config.render.package);
    println!("  {}: {}", output::label("Schema"), config.schema.display());
    println!("  {}: {}", output::label("Tables"), config.tables_display());
    println!("  {}: {}", output::label("Output"), config.out.display());
    if !config.render.table_prefix.is_empty() {
        println!("  {}: {}", output::label("Prefix"), config.render.table_prefix);
    }

    println!();
    print!("  {} Schema description... ", output::label("Checking"));
    let tables = match selected_tables(config) {
        Ok(tables) => {
            println!("{}", output::status_ok());
            tables
        }
        Err(e) => {
            println!("{}", output::status_error());
            println!("    {e}");
            println!();
            println!("{}", output::error("Configuration has errors."));
            return Err(CliError::Other("config check failed".into()));
        }
    };

    for table in &tables {
        println!(
            "    {} {}",
            table.name,
            output::muted(&format!(
                "({} columns -> {})",
                table.columns.len(),
                file_name(table, &config.render)
            ))
        );
    }

    let imports = collect_imports(&tables);
    let imports = sorted_imports(&imports);
    println!();
    if imports.is_empty() {
        println!("  {}: {}", output::label("Imports"), output::muted("none"));
    } else {
        println!("  {}: {}", output::label("Imports"), imports.join(", "));
    }

    println!();
    println!(
        "{}",
        output::success(&format!("Configuration OK. {} table(s) selected.", tables.len()))
    );
    Ok(())
}
