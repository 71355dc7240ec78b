//! Snippets CLI
//!
//! Command-line interface for the named-snippet store

use clap::{Parser, Subcommand};
use snippets_core::logging_facility::{self, Profile};
use snippets_engine::SnippetStore;
use snippets_store::StoreConfig;
use std::path::PathBuf;
use std::time::Duration;

mod commands;
mod output;

use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "snippets")]
#[command(about = "Snippets - store, retrieve and search named text snippets", long_about = None)]
struct Cli {
    /// Path to the snippet database
    #[arg(long, global = true, default_value = ".snippets/store.db")]
    db: PathBuf,

    /// Bound in milliseconds for lock waits and connection checkout
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Store a snippet under a name, replacing any existing one
    Put(commands::put::PutArgs),
    /// Retrieve a snippet by exact name
    Get(commands::get::GetArgs),
    /// List the names of all visible snippets
    Catalog(commands::catalog::CatalogArgs),
    /// Find visible snippets whose content contains a substring
    Search(commands::search::SearchArgs),
    /// Hide or reveal a snippet
    Hide(commands::hide::HideArgs),
}

impl Cli {
    fn store_config(&self) -> StoreConfig {
        match self.timeout_ms {
            Some(ms) => StoreConfig::default().with_timeout(Duration::from_millis(ms)),
            None => StoreConfig::default(),
        }
    }

    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

fn init_logging(cli: &Cli) -> std::io::Result<()> {
    let profile = if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    };

    match &cli.log_file {
        Some(path) => logging_facility::init_with_file(profile, path),
        None => {
            logging_facility::init(profile);
            Ok(())
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&cli)?;

    tracing::debug!(db = %cli.db.display(), "opening snippet store");
    let store = SnippetStore::open(&cli.db, &cli.store_config())?;
    let format = cli.output_format();

    match cli.command {
        Commands::Put(args) => commands::put::execute(args, &store, format),
        Commands::Get(args) => commands::get::execute(args, &store, format),
        Commands::Catalog(args) => commands::catalog::execute(args, &store, format),
        Commands::Search(args) => commands::search::execute(args, &store, format),
        Commands::Hide(args) => commands::hide::execute(args, &store, format),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
