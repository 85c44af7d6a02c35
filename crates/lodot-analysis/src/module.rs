use std::collections::BTreeMap;

use anyhow::Result;
use serde::Deserialize;

use lodot_types::{
    CompositionReport, Focus, LexiconReport, NgramReport, PosReport, ReadabilityReport,
    SentimentReport, TextStats, WordFrequencyReport,
};

use crate::analyzer::TextAnalyzer;

/// An analysis plugin. Each module answers exactly one [`Focus`].
pub trait AnalysisModule {
    fn focus(&self) -> Focus;

    fn description(&self) -> &'static str;

    fn analyze(&self, doc: &TextAnalyzer<'_>, opts: &ModuleOptions) -> Result<Section>;
}

/// The typed output of one module.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Text(TextStats),
    Words(WordFrequencyReport),
    Pos(PosReport),
    Composition(CompositionReport),
    Read(ReadabilityReport),
    Sent(SentimentReport),
    Lexicon(LexiconReport),
    Ngrams(NgramReport),
}

impl Section {
    pub fn focus(&self) -> Focus {
        match self {
            Self::Text(_) => Focus::Text,
            Self::Words(_) => Focus::Words,
            Self::Pos(_) => Focus::Pos,
            Self::Composition(_) => Focus::Composition,
            Self::Read(_) => Focus::Read,
            Self::Sent(_) => Focus::Sent,
            Self::Lexicon(_) => Focus::Lexicon,
            Self::Ngrams(_) => Focus::Ngrams,
        }
    }
}

/// Word senses keyed by lowercase word or lemma.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Glossary {
    #[serde(default)]
    senses: BTreeMap<String, Vec<String>>,
}

impl Glossary {
    pub fn new(senses: BTreeMap<String, Vec<String>>) -> Self {
        let senses = senses
            .into_iter()
            .map(|(word, defs)| (word.to_lowercase(), defs))
            .collect();
        Self { senses }
    }

    /// Senses for `word`, falling back to `lemma`.
    pub fn senses(&self, word: &str, lemma: &str) -> &[String] {
        self.senses
            .get(word)
            .or_else(|| self.senses.get(lemma))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.senses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }

    /// Lowercase keys after deserialization.
    pub fn normalized(self) -> Self {
        Self::new(self.senses)
    }
}

/// Knobs shared by all modules.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleOptions {
    pub top_words: usize,
    pub lexicon_top: usize,
    pub ngram_top: usize,
    pub reading_wpm: f64,
    pub speaking_wpm: f64,
    /// Polarity magnitude a sentence must exceed to be non-neutral.
    pub sentiment_threshold: f64,
    pub glossary: Glossary,
}

impl Default for ModuleOptions {
    fn default() -> Self {
        Self {
            top_words: 20,
            lexicon_top: 50,
            ngram_top: 10,
            reading_wpm: 225.0,
            speaking_wpm: 125.0,
            sentiment_threshold: 0.05,
            glossary: Glossary::default(),
        }
    }
}
