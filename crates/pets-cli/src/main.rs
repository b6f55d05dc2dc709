//! Pets CLI
//!
//! Command-line front end for the shelter pet store: the catalog listing
//! and the add/edit form.

use clap::{Parser, Subcommand, ValueEnum};
use pets_core::logging_facility::{self, Profile};
use pets_store::{PetStore, StoreConfig};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "pets")]
#[command(about = "Shelter pet catalog", long_about = None)]
struct Cli {
    /// Database file (overrides pets.toml and PETS_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Emit logs to stderr in the given format
    #[arg(long, global = true, value_enum)]
    log: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    /// Human-readable, debug level
    Dev,
    /// JSON lines, info level
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List all pets
    List(commands::list::ListArgs),
    /// Show one pet
    Show(commands::show::ShowArgs),
    /// Add a new pet
    Add(commands::add::AddArgs),
    /// Edit an existing pet
    Edit(commands::edit::EditArgs),
    /// Delete one pet
    Delete(commands::delete::DeleteArgs),
    /// Delete every pet
    DeleteAll,
    /// Insert a sample pet
    InsertDummy,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Some(format) = cli.log {
        logging_facility::init(match format {
            LogFormat::Dev => Profile::Development,
            LogFormat::Json => Profile::Production,
        });
    }

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = StoreConfig::load(&cwd, cli.db)?;
    let store = PetStore::open(&config).await?;

    match cli.command {
        Commands::List(args) => commands::list::execute(args, &store).await,
        Commands::Show(args) => commands::show::execute(args, &store).await,
        Commands::Add(args) => commands::add::execute(args, &store).await,
        Commands::Edit(args) => commands::edit::execute(args, &store).await,
        Commands::Delete(args) => commands::delete::execute(args, &store).await,
        Commands::DeleteAll => commands::catalog::delete_all(&store).await,
        Commands::InsertDummy => commands::catalog::insert_dummy(&store).await,
    }
}
