//! Command line argument parsing for the folio CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// folio - clean, lemmatize and count the words of plays and articles
#[derive(Parser, Debug, Clone)]
#[command(name = "folio")]
#[command(about = "Text cleaning, lemmatization and bag-of-words corpus building")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FolioArgs {
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

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "FOLIO_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FolioArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Clean a text file and list its most frequent words
    Clean(CleanArgs),

    /// Count words per line and bin the counts
    Lines(LinesArgs),

    /// Split a text file into sentences
    Sentences(SentencesArgs),

    /// Search a text file with a regular expression
    Find(FindArgs),

    /// Build a bag-of-words corpus from URLs and files
    Corpus(CorpusArgs),
}

/// Cleaning options shared by `clean` and `corpus`.
#[derive(Parser, Debug, Clone, Default)]
pub struct CleanOptions {
    /// Blank out stage directions (speaker labels, [bracketed] lines, Enter lines)
    #[arg(long)]
    pub strip_directions: bool,

    /// Also drop early-modern English function words (thou, hath, ...)
    #[arg(long)]
    pub early_modern: bool,

    /// Additional stop word (repeatable)
    #[arg(long = "stopword", value_name = "WORD")]
    pub stopwords: Vec<String>,

    /// Drop tokens shorter than this many characters
    #[arg(long, value_name = "N")]
    pub min_length: Option<usize>,

    /// Keep inflected forms instead of reducing them to lemmas
    #[arg(long)]
    pub no_lemmatize: bool,
}

/// Arguments for cleaning a file
#[derive(Parser, Debug, Clone)]
pub struct CleanArgs {
    /// Text file to clean
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of most frequent words to report
    #[arg(short = 'k', long, default_value = "20")]
    pub top: usize,

    /// Include the full cleaned token list in the output
    #[arg(long)]
    pub tokens: bool,

    #[command(flatten)]
    pub options: CleanOptions,
}

/// Arguments for per-line counts
#[derive(Parser, Debug, Clone)]
pub struct LinesArgs {
    /// Text file to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Blank out stage directions before counting
    #[arg(long)]
    pub strip_directions: bool,

    /// Histogram bin edges, comma separated (default: 0,1,...,15,200)
    #[arg(long, value_delimiter = ',', value_name = "EDGES")]
    pub bins: Option<Vec<usize>>,
}

/// Arguments for sentence splitting
#[derive(Parser, Debug, Clone)]
pub struct SentencesArgs {
    /// Text file to split
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Show the word tokens of this sentence (0-based)
    #[arg(short, long)]
    pub index: Option<usize>,
}

/// Arguments for pattern search
#[derive(Parser, Debug, Clone)]
pub struct FindArgs {
    /// Text file to search
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Regular expression
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Report only the first match with its byte span
    #[arg(long)]
    pub first: bool,
}

/// Arguments for corpus building
#[derive(Parser, Debug, Clone)]
pub struct CorpusArgs {
    /// URL of an HTML page to fetch (repeatable)
    #[arg(long = "url", value_name = "URL")]
    pub urls: Vec<String>,

    /// Local text file to add as a document (repeatable)
    #[arg(long = "file", value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Report the id of this token
    #[arg(long, value_name = "TOKEN")]
    pub lookup: Option<String>,

    /// Report the most frequent words of this document (0-based)
    #[arg(long, value_name = "N")]
    pub doc: Option<usize>,

    /// Number of most frequent words to report
    #[arg(short = 'k', long, default_value = "10")]
    pub top: usize,

    /// Per-request timeout in seconds (overrides the configuration file)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    #[command(flatten)]
    pub options: CleanOptions,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
