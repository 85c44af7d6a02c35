//! # lodot-config
//!
//! **Tier 4 (Configuration)**
//!
//! CLI arguments and the `lodot.toml` configuration file structures.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Configuration file struct definitions (Serde)
//! * Default values and enums
//!
//! ## What does NOT belong here
//! * Analysis logic
//! * Input loading and file discovery
//! * Higher-tier crate dependencies

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
pub use lodot_types::{Focus, ReportFormat, VizKind};

/// Default number of rows in the word frequency table.
pub const DEFAULT_TOP: usize = 20;
/// Default number of lexicon entries.
pub const DEFAULT_LEXICON_TOP: usize = 50;
/// Default number of bigrams and trigrams.
pub const DEFAULT_NGRAM_TOP: usize = 10;
pub const DEFAULT_READING_WPM: f64 = 225.0;
pub const DEFAULT_SPEAKING_WPM: f64 = 125.0;

/// Name of the configuration file looked up in the working directory and the
/// user config directory.
pub const CONFIG_FILE_NAME: &str = "lodot.toml";

/// `lodot` analyzes prose and reports statistics, readability, sentiment and
/// word usage as stream, JSON, text, Markdown or RDF Turtle.
///
/// Default mode (no subcommand) analyzes the given text or files.
#[derive(Parser, Debug)]
#[command(name = "lodot", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(flatten)]
    pub analyze: CliAnalyzeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration profile to use (a `[view.<name>]` table).
    #[arg(long, visible_alias = "view", global = true)]
    pub profile: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Explicit configuration file (skips discovery).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable progress spinners.
    #[arg(long, global = true)]
    pub no_progress: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CliAnalyzeArgs {
    /// Raw text to analyze, or `-` to read stdin.
    #[arg(value_name = "TEXT")]
    pub input: Option<String>,

    /// Files to analyze (.txt, .md, .text, .docx, .pdf). Contents are joined with a blank line.
    #[arg(long, short = 'f', value_name = "PATH", num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Analyses to run. Takes several values, comma lists, or repeats.
    ///
    /// Examples:
    ///   --analyze text read
    ///   --analyze text,read
    ///   --analyze sent --analyze ngrams
    #[arg(
        long,
        short = 'a',
        value_enum,
        num_args = 1..,
        value_delimiter = ',',
        value_name = "FOCUS"
    )]
    pub analyze: Vec<Focus>,

    /// Report format (default: stream).
    #[arg(long, short = 'o', value_enum)]
    pub output: Option<ReportFormat>,

    /// Output file name without extension; the format name is appended.
    #[arg(long, value_name = "NAME")]
    pub outfile: Option<PathBuf>,

    /// Visualize frequency-bearing analyses.
    #[arg(long, value_enum)]
    pub viz: Option<VizKind>,

    /// Rows in the word frequency table.
    #[arg(long)]
    pub top: Option<usize>,

    /// Entries in the lexicon section.
    #[arg(long)]
    pub lexicon_top: Option<usize>,

    /// Bigrams and trigrams to keep.
    #[arg(long)]
    pub ngram_top: Option<usize>,

    /// TOML file with a `[senses]` table mapping words to definitions.
    #[arg(long, value_name = "PATH")]
    pub glossary: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a `lodot.toml` template to the target directory.
    Init(InitArgs),

    /// List available analysis modules.
    Modules,

    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Target directory (defaults to ".").
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing `lodot.toml`.
    #[arg(long)]
    pub force: bool,

    /// Print the template to stdout instead of writing a file.
    #[arg(long)]
    pub print: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Powershell,
    Zsh,
}

// =============================================================================
// TOML Configuration File Structures
// =============================================================================

/// Root TOML configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    /// Analysis defaults.
    pub analyze: AnalyzeConfig,

    /// Named view profiles (e.g., [view.brief], [view.rdf]).
    pub view: BTreeMap<String, ViewProfile>,
}

/// `[analyze]` settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeConfig {
    /// Analyses to run, e.g. `["text", "read"]`.
    pub focus: Option<Vec<String>>,

    /// Report format: "stream", "json", "txt", "md", "ttl".
    pub output: Option<String>,

    /// Output file name without extension.
    pub outfile: Option<String>,

    /// Visualization kind: "table", "plot", "image".
    pub viz: Option<String>,

    pub top: Option<usize>,
    pub lexicon_top: Option<usize>,
    pub ngram_top: Option<usize>,

    /// Reading speed in words per minute.
    pub reading_wpm: Option<f64>,

    /// Speaking speed in words per minute.
    pub speaking_wpm: Option<f64>,

    /// Sense glossary path, relative to the config file.
    pub glossary: Option<String>,
}

/// A named view profile. Every field overrides the matching `[analyze]` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewProfile {
    pub focus: Option<Vec<String>>,
    pub output: Option<String>,
    pub outfile: Option<String>,
    pub viz: Option<String>,
    pub top: Option<usize>,
    pub lexicon_top: Option<usize>,
    pub ngram_top: Option<usize>,
    pub reading_wpm: Option<f64>,
    pub speaking_wpm: Option<f64>,
    pub glossary: Option<String>,
}

impl TomlConfig {
    /// Load configuration from a TOML string.
    pub fn parse(s: &str) -> TomlResult<Self> {
        toml::from_str(s)
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Look up a view profile by name.
    pub fn profile(&self, name: &str) -> Option<&ViewProfile> {
        self.view.get(name)
    }
}

/// Result type alias for TOML parsing errors.
pub type TomlResult<T> = Result<T, toml::de::Error>;
