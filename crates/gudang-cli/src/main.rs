//! Command-line driver for the loader-request pipeline.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "gudang", about = "Warehouse loader-request tool", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a loader request from a JSON file, optionally with photos
    Submit {
        /// JSON file with the request fields (camelCase names)
        #[arg(long)]
        input: PathBuf,

        /// Directory of photos named `<section>.<ext>`
        #[arg(long)]
        photos: Option<PathBuf>,

        /// Where to write the rendered report
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a stored loader request
    Show {
        #[arg(long)]
        id: Uuid,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Submit { input, photos, out } => commands::submit(input, photos, out).await,
        Commands::Show { id } => commands::show(id).await,
    }
}
