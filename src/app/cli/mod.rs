//! CLI Adapter.

mod discover;
mod generate;
mod list;

use std::io::{ErrorKind, IsTerminal};

use clap::{Parser, Subcommand};
use dialoguer::{Error as DialoguerError, Input};
use tracing_subscriber::EnvFilter;

use crate::domain::{AppError, PROJECT_CONFIG_FILE};

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "HACSGEN_LOG";

#[derive(Parser)]
#[command(name = "hacsgen")]
#[command(version)]
#[command(
    about = "Generate HACS-ready Home Assistant integrations for RSS feeds",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the integration files and print them
    #[clap(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: generate::GenerateArgs,
        /// Print the artifacts as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the generated files with their descriptions
    #[clap(visible_alias = "ls")]
    List {
        /// Description language (en, el)
        #[arg(short, long)]
        locale: Option<crate::domain::Locale>,
        /// Project file (defaults to ./hacsgen.toml)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },
    /// Print a single generated file
    Show {
        /// File name, e.g. const.py
        filename: String,
        #[command(flatten)]
        args: generate::GenerateArgs,
    },
    /// Write the integration into a directory in the HACS repository layout
    #[clap(visible_alias = "x")]
    Export {
        /// Target directory (bundle root)
        dir: std::path::PathBuf,
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
        #[command(flatten)]
        args: generate::GenerateArgs,
    },
    /// Ask the discovery assistant for a feed URL
    #[clap(visible_alias = "d")]
    Discover {
        /// Free-text query, e.g. "bbc world news"
        query: String,
        /// Notice language (en, el)
        #[arg(short, long)]
        locale: Option<crate::domain::Locale>,
        /// Project file (defaults to ./hacsgen.toml)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { args, json } => generate::run_generate(args, json),
        Commands::List { locale, config } => list::run_list(locale, config),
        Commands::Show { filename, args } => generate::run_show(args, &filename),
        Commands::Export { dir, force, args } => generate::run_export(args, dir, force),
        Commands::Discover { query, locale, config } => {
            discover::run_discover(&query, locale, config)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load the project file named by `--config`, or `./hacsgen.toml` when present.
fn load_config(
    path: Option<&std::path::Path>,
) -> Result<crate::domain::ProjectConfig, AppError> {
    match path {
        Some(path) => crate::app::api::load_project_config(path),
        None => crate::app::api::load_project_config_in(&std::env::current_dir()?),
    }
}

/// Ask for a missing integration field. Fails outright when stdin is not a terminal.
fn prompt_field(field: &'static str) -> Result<Option<String>, AppError> {
    let (label, flag) = match field {
        "name" => ("Integration name", "--name"),
        _ => ("Feed URL", "--feed-url"),
    };
    if !std::io::stdin().is_terminal() {
        return Err(AppError::Configuration(format!(
            "Missing integration {}: pass {} or set it in {}",
            field, flag, PROJECT_CONFIG_FILE
        )));
    }

    match Input::<String>::new().with_prompt(label).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Configuration(format!("Failed to read {}: {}", label, err))),
    }
}
