use std::collections::HashSet;

use anyhow::Result;
use lodot_math::percent;
use lodot_types::{Focus, WordFrequencyReport, WordRow};

use crate::analyzer::TextAnalyzer;
use crate::module::{AnalysisModule, ModuleOptions, Section};
use crate::util::{count_items, rank};

/// Most frequent lowercase alphabetic words.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordsModule;

pub(crate) fn build_word_frequencies(doc: &TextAnalyzer<'_>, top: usize) -> WordFrequencyReport {
    let words = doc.alpha_words();
    let total_words = words.len();
    let distinct_words = words.iter().collect::<HashSet<_>>().len();
    let counts = count_items(words.iter().map(String::as_str));

    let rows = rank(counts, top)
        .into_iter()
        .map(|(word, count)| WordRow {
            word: word.to_string(),
            count,
            freq: percent(count, total_words, 2),
        })
        .collect();

    WordFrequencyReport {
        total_words,
        distinct_words,
        rows,
    }
}

impl AnalysisModule for WordsModule {
    fn focus(&self) -> Focus {
        Focus::Words
    }

    fn description(&self) -> &'static str {
        "Most frequent words with counts and percentages"
    }

    fn analyze(&self, doc: &TextAnalyzer<'_>, opts: &ModuleOptions) -> Result<Section> {
        Ok(Section::Words(build_word_frequencies(doc, opts.top_words)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_case_insensitive_and_ranked() {
        let doc = TextAnalyzer::new("The cat saw the dog. THE end, 42 times.");
        let report = build_word_frequencies(&doc, 2);

        assert_eq!(report.total_words, 8);
        assert_eq!(report.distinct_words, 6);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].word, "the");
        assert_eq!(report.rows[0].count, 3);
        assert_eq!(report.rows[0].freq, 37.5);
        assert_eq!(report.rows[1].word, "cat");
    }
}
