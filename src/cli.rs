//! Command-line interface definitions

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::catalog::{MediaKind, Section};

#[derive(Parser, Debug)]
#[command(name = "reelview")]
#[command(version, about = "Browse movies and TV shows from TMDB in your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive browser (default)
    Tui,

    /// Print one page of a catalog list
    List {
        /// List to show: now-playing, popular, top-rated, upcoming,
        /// tv-top-rated, airing-today, on-the-air, tv-popular
        #[arg(value_parser = parse_section)]
        section: Section,

        /// Page to print, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Items per page (defaults to the configured carousel size)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Search movies and TV shows by keyword
    Search {
        keyword: String,

        #[arg(long, value_enum, default_value_t = SearchKind::All)]
        kind: SearchKind,
    },

    /// Inspect or edit the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Store the TMDB API key
    SetKey { key: String },
    /// Print the config file location
    Path,
}

/// Which result lists a search prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchKind {
    Movie,
    Tv,
    All,
}

impl SearchKind {
    pub fn kinds(&self) -> &'static [MediaKind] {
        match self {
            SearchKind::Movie => &[MediaKind::Movie],
            SearchKind::Tv => &[MediaKind::Tv],
            SearchKind::All => &[MediaKind::Movie, MediaKind::Tv],
        }
    }
}

fn parse_section(value: &str) -> Result<Section, String> {
    Section::from_slug(value).ok_or_else(|| {
        let valid: Vec<&str> = Section::all().iter().map(Section::slug).collect();
        format!("unknown list '{value}' (expected one of: {})", valid.join(", "))
    })
}
