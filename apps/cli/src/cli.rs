//! Command-line arguments.

use crate::config::{Overrides, Palette};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "puzzle-cards")]
#[command(about = "Turn chess puzzles into flashcards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Import puzzles from a YAML file
    Import(ImportArgs),
    /// Create an empty collection
    Init {
        #[command(flatten)]
        target: CollectionArgs,
    },
    /// Write a puzzle file skeleton
    Template {
        /// File to create
        file: PathBuf,

        /// Number of entries
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },
    /// List boards filed with more than one solution
    Duplicates {
        /// Deck to inspect
        #[arg(short, long)]
        deck: String,

        #[command(flatten)]
        target: CollectionArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Which collection to use.
#[derive(Debug, Clone, Default, Args)]
pub struct CollectionArgs {
    /// Profile under the collections root
    #[arg(short, long, conflicts_with = "collection")]
    pub profile: Option<String>,

    /// Collection file, overriding the profile
    #[arg(long)]
    pub collection: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Puzzle file
    pub file: PathBuf,

    /// Base deck name (defaults to the file name without extension)
    #[arg(short, long)]
    pub deck: Option<String>,

    #[command(flatten)]
    pub target: CollectionArgs,

    /// Board size in pixels, 0 for unsized
    #[arg(long)]
    pub pixels: Option<u32>,

    /// Board colours
    #[arg(long, value_enum)]
    pub colors: Option<Palette>,

    /// Draw file and rank labels
    #[arg(long)]
    pub coordinates: bool,

    /// Show what would be created without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl CollectionArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            profile: self.profile.clone(),
            collection: self.collection.clone(),
            ..Overrides::default()
        }
    }
}

impl ImportArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            board_pixels: self.pixels,
            color_scheme: self.colors,
            coordinates: self.coordinates.then_some(true),
            ..self.target.overrides()
        }
    }
}
