//! fskv CLI
//!
//! Command-line interface for inspecting and editing a store directory.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fskv::{Config, Encoding, FileStore, KeyValueStore};
use tracing_subscriber::{fmt, EnvFilter};

/// fskv CLI
#[derive(Parser, Debug)]
#[command(name = "fskv")]
#[command(about = "CLI for the fskv file-per-key store")]
#[command(version)]
struct Args {
    /// Root directory of the store
    #[arg(short, long)]
    storage_path: Option<PathBuf>,

    /// Value encoding (utf8 or base64)
    #[arg(short, long, default_value = "utf8")]
    encoding: Encoding,

    /// Print per-operation diagnostics
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a value by key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair
    Set {
        /// The key to set
        key: String,

        /// The value to set
        value: String,
    },

    /// Delete a key
    Del {
        /// The key to delete
        key: String,
    },

    /// List every key
    Keys,

    /// Delete every entry
    Clear,
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fskv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut builder = Config::builder()
        .encoding(args.encoding)
        .debug(args.debug)
        .production(false)
        .name("fskv");
    if let Some(path) = &args.storage_path {
        builder = builder.storage_path(path);
    }
    let config = builder.build();

    tracing::debug!("fskv v{}", fskv::VERSION);
    tracing::debug!("Storage path: {}", config.storage_path.display());

    let store = FileStore::new(config);

    if let Err(e) = run(&store, args.command).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(store: &FileStore, command: Commands) -> fskv::Result<()> {
    match command {
        Commands::Get { key } => match store.try_get_item(&key).await? {
            Some(value) => println!("{}", value),
            None => {
                eprintln!("(nil)");
                std::process::exit(2);
            }
        },
        Commands::Set { key, value } => {
            store.set_item(&key, &value).await?;
            println!("OK");
        }
        Commands::Del { key } => {
            store.remove_item(&key).await?;
            println!("OK");
        }
        Commands::Keys => {
            for key in store.get_all_keys().await? {
                println!("{}", key);
            }
        }
        Commands::Clear => {
            store.clear().await?;
            println!("OK");
        }
    }
    Ok(())
}
