//! bookmerge
//!
//! Reconciles records exported from several sources into one JSON store,
//! and links stored books to the audio files that hold them.
//!
//! Usage:
//!   bookmerge merge --store db --type book storefront.json reviews.json
//!   bookmerge files --store db /media/audiobooks

use anyhow::Result;
use bookmerge_cli::{ModelKind, link_files, load_config, merge_files};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "bookmerge")]
#[command(about = "Reconcile book, author, narrator and series records from many sources")]
struct Args {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Merge JSON arrays of records into the store, in the order given
    Merge {
        /// Store root directory
        #[arg(short, long)]
        store: PathBuf,

        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Record type of every input file
        #[arg(short = 't', long = "type", value_enum, default_value_t = ModelKind::Book)]
        kind: ModelKind,

        /// JSON files, one per source
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Link stored books to audio files under the given roots
    Files {
        /// Store root directory
        #[arg(short, long)]
        store: PathBuf,

        /// Audio library roots
        #[arg(required = true)]
        roots: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let lines = match args.command {
        Command::Merge {
            store,
            config,
            kind,
            files,
        } => {
            let config = load_config(config.as_deref())?;
            merge_files(kind, &store, &config, &files)?
        }
        Command::Files { store, roots } => link_files(&store, &roots)?,
    };
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
