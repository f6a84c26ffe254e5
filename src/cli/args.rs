//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};

/// Plum Blossom (Meihua) divination: time-seeded original, nuclear and changed hexagrams
#[derive(Parser, Debug)]
#[command(name = "meihua")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Print author and version
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cast original, nuclear and changed hexagrams
    Cast {
        /// Identifier to score, e.g. a stock code (AAPL, 2330)
        identifier: String,
        /// Any integer, negative allowed
        #[arg(allow_negative_numbers = true)]
        number: String,
        /// Cast at this RFC 3339 time instead of now
        #[arg(long)]
        at: Option<String>,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
        /// Read the UTC clock instead of local time
        #[arg(long, conflicts_with = "at")]
        utc: bool,
    },

    /// Print the interpretation prompt for a casting
    Prompt {
        /// Identifier to score
        identifier: String,
        /// Any integer, negative allowed
        #[arg(allow_negative_numbers = true)]
        number: String,
        /// Cast at this RFC 3339 time instead of now
        #[arg(long)]
        at: Option<String>,
        /// Print the request payload as JSON instead of the prompt text
        #[arg(long)]
        json: bool,
    },

    /// Show the numerology score of an identifier
    Score {
        /// Identifier to score
        identifier: String,
    },

    /// List the eight trigrams
    Trigrams,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,
}
