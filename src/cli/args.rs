//! Command line argument parsing for the spellmend CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::config::SpellingConfig;

/// spellmend - "Did you mean?" suggestions from search backend corrections
#[derive(Parser, Debug, Clone)]
#[command(name = "spellmend")]
#[command(about = "Turn search backend spelling corrections into query suggestions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellmendArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellmendArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Split a query into terms and phrases
    Tokenize(TokenizeArgs),

    /// Build suggestions for a single query
    Suggest(SuggestArgs),

    /// Build suggestions for every request in a JSON Lines file
    Batch(BatchArgs),
}

/// Arguments for tokenizing a query
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,
}

/// Arguments for building suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Query string as typed by the user
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// JSON file holding the backend's corrections
    #[arg(short, long, value_name = "CORRECTIONS_FILE")]
    pub corrections: PathBuf,

    /// Search handler/field the query was run against
    #[arg(long, default_value = "AllFields")]
    pub handler: String,

    #[command(flatten)]
    pub spelling: SpellingOptions,
}

/// Arguments for batch processing
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// JSON Lines file, one `{query, handler, corrections}` request per line
    #[arg(value_name = "REQUESTS_FILE")]
    pub requests: PathBuf,

    #[command(flatten)]
    pub spelling: SpellingOptions,
}

/// Spelling options shared by the suggestion commands
#[derive(Args, Debug, Clone, Default)]
pub struct SpellingOptions {
    /// Spelling configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Maximum number of candidates per term
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Keep purely numeric terms
    #[arg(long)]
    pub no_skip_numeric: bool,

    /// Do not produce `(term OR candidate)` clauses
    #[arg(long)]
    pub no_expand: bool,

    /// Key suggestions by the full corrected query
    #[arg(long)]
    pub phrase: bool,
}

impl SpellingOptions {
    /// Resolve the effective configuration: file first, then flag overrides.
    pub fn resolve(&self) -> Result<SpellingConfig> {
        let mut config = match &self.config {
            Some(path) => SpellingConfig::from_file(path)?,
            None => SpellingConfig::default(),
        };

        if let Some(limit) = self.limit {
            config = config.with_limit(limit);
        }
        if self.no_skip_numeric {
            config = config.with_skip_numeric(false);
        }
        if self.no_expand {
            config = config.with_expand(false);
        }
        if self.phrase {
            config = config.with_phrase(true);
        }

        Ok(config)
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
