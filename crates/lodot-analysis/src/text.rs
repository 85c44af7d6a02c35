use std::collections::HashSet;

use anyhow::Result;
use lodot_math::ratio;
use lodot_types::{Focus, TextStats};

use crate::analyzer::TextAnalyzer;
use crate::module::{AnalysisModule, ModuleOptions, Section};

/// Character, word, sentence, paragraph and syllable statistics.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextModule;

pub(crate) fn build_text_stats(doc: &TextAnalyzer<'_>) -> TextStats {
    let words = doc.words();
    let word_count = words.len();
    let sentence_count = doc.sentences().len();
    let paragraph_count = doc.paragraphs().len();
    let character_count = doc.text().chars().count();
    let syllable_count = doc.syllable_count();
    let letters: usize = words
        .iter()
        .map(|w| w.chars().filter(|c| c.is_alphabetic()).count())
        .sum();
    let unique_word_count = words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<HashSet<_>>()
        .len();

    TextStats {
        character_count,
        character_per_word: ratio(character_count, word_count, 2),
        average_word_length: ratio(letters, word_count, 2),
        syllable_count,
        syllables_per_word: ratio(syllable_count, word_count, 2),
        word_count,
        unique_word_count,
        type_token_ratio: ratio(unique_word_count, word_count, 2),
        paragraph_count,
        words_per_paragraph: ratio(word_count, paragraph_count, 2),
        sentences_per_paragraph: ratio(sentence_count, paragraph_count, 2),
        sentence_count,
        words_per_sentence: ratio(word_count, sentence_count, 2),
    }
}

impl AnalysisModule for TextModule {
    fn focus(&self) -> Focus {
        Focus::Text
    }

    fn description(&self) -> &'static str {
        "Character, word, sentence, paragraph and syllable statistics"
    }

    fn analyze(&self, doc: &TextAnalyzer<'_>, _opts: &ModuleOptions) -> Result<Section> {
        Ok(Section::Text(build_text_stats(doc)))
    }
}
