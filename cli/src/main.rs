//! gormgen CLI - Main entry point
//!
//! This is the main binary for the gormgen tool.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use gormgen_cli::commands::generate::GenerateOptions;
use gormgen_cli::config::{CONFIG_FILE, Config};
use gormgen_cli::error::CliError;

/// gormgen - Generate Go ORM models from a schema description
#[derive(Parser, Debug)]
#[command(name = "gormgen")]
#[command(author, version, about = "Generate Go ORM models from a schema description", long_about = None)]
struct Cli {
    /// Path to config file (default: gormgen.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new gormgen.toml configuration file
    Init,

    /// Render Go model files
    Generate {
        /// Override output directory
        #[arg(long)]
        out: Option<PathBuf>,

        /// Override Go package name
        #[arg(long)]
        package: Option<String>,

        /// Write every table into a single models.go
        #[arg(long)]
        single_file: bool,
    },

    /// Validate configuration and schema description
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Init => run_init(cli.config.unwrap_or_else(|| PathBuf::from(CONFIG_FILE))),
        Command::Generate {
            out,
            package,
            single_file,
        } => {
            let config = load_config(cli.config.as_deref())?;
            gormgen_cli::commands::generate::run(
                &config,
                GenerateOptions {
                    out,
                    package,
                    single_file,
                },
            )
        }
        Command::Check => {
            let config = load_config(cli.config.as_deref())?;
            gormgen_cli::commands::check::run(&config)
        }
    }
}

/// Load configuration with fallback to default path
fn load_config(custom_path: Option<&std::path::Path>) -> Result<Config, CliError> {
    match custom_path {
        Some(path) => Config::load_from(path).map_err(Into::into),
        None => Config::load().map_err(Into::into),
    }
}

/// Initialize a new gormgen.toml file
fn run_init(config_path: PathBuf) -> Result<(), CliError> {
    if config_path.exists() {
        return Err(CliError::Other(format!(
            "{} already exists. Delete it first to reinitialize.",
            config_path.display()
        )));
    }

    std::fs::write(&config_path, INIT_CONFIG).map_err(|e| CliError::IoError(e.to_string()))?;

    println!(
        "{}",
        format!("Created {}", config_path.display()).bright_green()
    );
    println!();
    println!("Next steps:");
    println!("  1. Describe your tables in {}", "schema.json".bright_cyan());
    println!("  2. Run {} to validate it", "gormgen check".bright_cyan());
    println!("  3. Run {} to write the models", "gormgen generate".bright_cyan());

    Ok(())
}

const INIT_CONFIG: &str = r#"# gormgen configuration

schema = "schema.json"
out = "./models"
package = "models"

# Only generate tables matching these globs
# tables = ["user*", "orders"]

# Prefix trimmed from table names before they become struct names
# tablePrefix = "t_"

# Write every table into models.go
# singleFile = true

# Emit comment('...') fragments
comments = false

# Emit json:"name" next to the gorm tag
json = false
# jsonIgnore = ["password"]

# Struct and field naming: "snake", "gonic" or "same"
mapper = "snake"

[audit]
created = ["created_at"]
updated = ["updated_at"]
deleted = ["deleted_at"]

# Primary keys the ORM already treats as non-null
[implicitNotNull]
enabled = true
identifier = "Id"
type = "int64"
"#;
