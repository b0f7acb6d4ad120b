//! Terminal frontend for Word Dungeon, a vocabulary drill dungeon crawl.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "wd",
    about = "Word Dungeon: answer flashcards to fight your way down",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine internals to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive run
    Play {
        /// RNG seed for the dungeon and prompt draws
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Width and height of each floor
        #[arg(short, long, default_value = "15")]
        grid_size: i32,

        /// Flashcard deck (JSON); the built-in sample deck if omitted
        #[arg(short, long)]
        content: Option<PathBuf>,
    },

    /// List the chapters of a flashcard deck
    Chapters {
        /// Flashcard deck (JSON); the built-in sample deck if omitted
        #[arg(short, long)]
        content: Option<PathBuf>,
    },

    /// Print the first floor generated for a seed
    Map {
        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Width and height of the floor
        #[arg(short, long, default_value = "15")]
        grid_size: i32,

        /// Flashcard deck (JSON); the built-in sample deck if omitted
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// Print the full game snapshot as JSON instead of a map
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            seed,
            grid_size,
            content,
        } => commands::play::run(content.as_deref(), seed, grid_size),
        Commands::Chapters { content } => commands::chapters::run(content.as_deref()),
        Commands::Map {
            seed,
            grid_size,
            content,
            json,
        } => commands::map::run(content.as_deref(), seed, grid_size, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
