//! # lodot-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the data structures and contracts for `lodot` analysis
//! receipts. It contains only data types, Serde definitions, and the
//! `SCHEMA_VERSION`.
//!
//! ## Stability Policy
//!
//! **JSON-first stability**: the primary contract is the JSON receipt, not Rust
//! struct literals. New sections are added as `Option` fields so older
//! consumers keep working; removed or renamed fields bump `SCHEMA_VERSION`.
//!
//! ## What belongs here
//! * Pure data structs (receipts, section reports, rows)
//! * Shared enums used by the CLI (`Focus`, `ReportFormat`, `VizKind`)
//!
//! ## What does NOT belong here
//! * Text processing
//! * File I/O
//! * Rendering

use serde::{Deserialize, Serialize};

/// The current schema version for analysis receipts.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "lodot".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Complete,
    Partial,
}

// -----------------------------------------------------------------------------
// Enums shared with CLI
// -----------------------------------------------------------------------------

/// An analysis focus. Each focus plugs exactly one analysis module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    /// Character, word, sentence, paragraph and syllable statistics.
    Text,
    /// Most frequent words.
    Words,
    /// Part-of-speech distribution.
    Pos,
    /// Text composition by word class.
    Composition,
    /// Readability indices.
    #[cfg_attr(feature = "clap", value(alias = "readability"))]
    Read,
    /// Sentiment polarity and subjectivity.
    #[cfg_attr(feature = "clap", value(alias = "sentiment"))]
    Sent,
    /// Per-lemma details with part of speech and senses.
    #[cfg_attr(feature = "clap", value(alias = "word"))]
    Lexicon,
    /// Most frequent bigrams and trigrams.
    Ngrams,
}

pub const FOCUS_ORDER: [Focus; 8] = [
    Focus::Text,
    Focus::Words,
    Focus::Pos,
    Focus::Composition,
    Focus::Read,
    Focus::Sent,
    Focus::Lexicon,
    Focus::Ngrams,
];

impl Focus {
    pub const fn all() -> &'static [Focus; 8] {
        &FOCUS_ORDER
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Words => "words",
            Self::Pos => "pos",
            Self::Composition => "composition",
            Self::Read => "read",
            Self::Sent => "sent",
            Self::Lexicon => "lexicon",
            Self::Ngrams => "ngrams",
        }
    }

    /// Parse a focus name, accepting the long aliases used by older configs.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "words" | "word_stats" => Some(Self::Words),
            "pos" | "pos_stats" => Some(Self::Pos),
            "composition" => Some(Self::Composition),
            "read" | "readability" => Some(Self::Read),
            "sent" | "sentiment" => Some(Self::Sent),
            "lexicon" | "word" => Some(Self::Lexicon),
            "ngrams" | "ngram" => Some(Self::Ngrams),
            _ => None,
        }
    }

    /// Report section title used by the text writers.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Text => "Text statistics",
            Self::Words => "Word frequencies",
            Self::Pos => "Part of speech",
            Self::Composition => "Text composition",
            Self::Read => "Readability",
            Self::Sent => "Sentiment analysis",
            Self::Lexicon => "Word analysis",
            Self::Ngrams => "N-grams",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// Indented dump to stdout.
    #[default]
    Stream,
    /// Pretty-printed JSON receipt.
    Json,
    /// Plain text report.
    Txt,
    /// Markdown report.
    Md,
    /// RDF graph in Turtle syntax.
    #[cfg_attr(feature = "clap", value(alias = "turtle"))]
    Ttl,
}

impl ReportFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stream => "stream",
            Self::Json => "json",
            Self::Txt => "txt",
            Self::Md => "md",
            Self::Ttl => "ttl",
        }
    }

    /// File extension for saved reports; `None` for formats that only print.
    pub const fn extension(self) -> Option<&'static str> {
        match self {
            Self::Stream => None,
            other => Some(other.as_str()),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "stream" => Some(Self::Stream),
            "json" => Some(Self::Json),
            "txt" | "text" => Some(Self::Txt),
            "md" | "markdown" => Some(Self::Md),
            "ttl" | "turtle" => Some(Self::Ttl),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum VizKind {
    /// Fixed-width frequency table.
    Table,
    /// ASCII bar plot.
    Plot,
    /// SVG bar chart written next to the report.
    Image,
}

// -----------------------------------------------------------------------------
// Receipt
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReceipt {
    pub schema_version: u32,
    pub generated_at_ms: u128,
    pub tool: ToolInfo,
    pub mode: String,
    pub status: AnalysisStatus,
    pub warnings: Vec<String>,
    pub source: DocumentSource,
    pub args: AnalysisArgsMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<WordFrequencyReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<PosReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<CompositionReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readability: Option<ReadabilityReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<LexiconReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ngrams: Option<NgramReport>,
}

impl AnalysisReceipt {
    /// Focuses whose section is present, in canonical order.
    pub fn present_focuses(&self) -> Vec<Focus> {
        FOCUS_ORDER
            .iter()
            .copied()
            .filter(|focus| self.has_section(*focus))
            .collect()
    }

    pub fn has_section(&self, focus: Focus) -> bool {
        match focus {
            Focus::Text => self.text.is_some(),
            Focus::Words => self.words.is_some(),
            Focus::Pos => self.pos.is_some(),
            Focus::Composition => self.composition.is_some(),
            Focus::Read => self.readability.is_some(),
            Focus::Sent => self.sentiment.is_some(),
            Focus::Lexicon => self.lexicon.is_some(),
            Focus::Ngrams => self.ngrams.is_some(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentSource {
    /// File paths, or `<inline>` / `<stdin>` for raw text.
    pub inputs: Vec<String>,
    pub bytes: usize,
    /// BLAKE3 hex digest of the analyzed text.
    pub hash: String,
}

impl DocumentSource {
    /// Human-facing document name used in report titles.
    pub fn display_name(&self) -> String {
        match self.inputs.as_slice() {
            [] => "<inline>".to_string(),
            [single] => single.clone(),
            [first, rest @ ..] => format!("{first} (+{} more)", rest.len()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AnalysisArgsMeta {
    pub focus: Vec<String>,
    pub output: String,
    pub top: usize,
    pub lexicon_top: usize,
    pub ngram_top: usize,
}

// -----------------------------------------------------------------------------
// Sections
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextStats {
    pub character_count: usize,
    pub character_per_word: f64,
    pub average_word_length: f64,
    pub syllable_count: usize,
    pub syllables_per_word: f64,
    pub word_count: usize,
    pub unique_word_count: usize,
    pub type_token_ratio: f64,
    pub paragraph_count: usize,
    pub words_per_paragraph: f64,
    pub sentences_per_paragraph: f64,
    pub sentence_count: usize,
    pub words_per_sentence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordFrequencyReport {
    pub total_words: usize,
    pub distinct_words: usize,
    pub rows: Vec<WordRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordRow {
    pub word: String,
    pub count: usize,
    /// Percent of all alphabetic words.
    pub freq: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PosReport {
    pub total_tokens: usize,
    pub rows: Vec<PosRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PosRow {
    pub tag: String,
    pub count: usize,
    pub freq: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CompositionReport {
    pub adjectives: usize,
    pub adverbs: usize,
    pub conjunctions: usize,
    pub determiners: usize,
    pub nouns: usize,
    pub proper_nouns: usize,
    pub prepositions: usize,
    pub pronouns: usize,
    pub verbs: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadabilityReport {
    pub flesch_reading_ease: f64,
    pub flesch_kincaid_grade: f64,
    pub gunning_fog: f64,
    pub smog_index: f64,
    pub automated_readability_index: f64,
    pub coleman_liau_index: f64,
    pub linsear_write_formula: f64,
    pub difficult_words: usize,
    pub text_standard: String,
    pub reading_time_min: f64,
    pub speaking_time_min: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Classify a polarity score; `threshold` is exclusive on both sides.
    pub fn from_polarity(polarity: f64, threshold: f64) -> Self {
        if polarity > threshold {
            Self::Positive
        } else if polarity < -threshold {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PolarityScore {
    pub polarity: f64,
    pub subjectivity: f64,
    pub label: SentimentLabel,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentimentReport {
    pub overall: PolarityScore,
    pub sentences: Vec<SentenceSentiment>,
    #[serde(default)]
    pub paragraphs: Vec<ParagraphSentiment>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentenceSentiment {
    /// 1-based position in the document.
    pub id: usize,
    pub content: String,
    pub polarity: f64,
    pub subjectivity: f64,
    pub label: SentimentLabel,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParagraphSentiment {
    /// 1-based position in the document.
    pub id: usize,
    pub polarity: f64,
    pub subjectivity: f64,
    /// Derived from `breakdown.compound`.
    pub label: SentimentLabel,
    pub breakdown: SentimentBreakdown,
}

/// Shares of negative, neutral and positive sentences in a paragraph, plus
/// the mean sentence polarity as `compound`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct SentimentBreakdown {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexiconReport {
    pub entries: Vec<WordDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordDetail {
    pub word: String,
    pub occurrences: usize,
    pub frequency_percent: f64,
    pub pos_tag: String,
    pub lemma: String,
    pub senses: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NgramReport {
    pub bigrams: Vec<NgramRow>,
    pub trigrams: Vec<NgramRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NgramRow {
    /// Space-joined words.
    pub gram: String,
    pub count: usize,
}
