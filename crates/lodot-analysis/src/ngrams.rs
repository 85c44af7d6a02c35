use anyhow::Result;
use lodot_text::is_alpha_word;
use lodot_types::{Focus, NgramReport, NgramRow};

use crate::analyzer::TextAnalyzer;
use crate::module::{AnalysisModule, ModuleOptions, Section};
use crate::util::{count_items, rank};

/// Most frequent bigrams and trigrams. N-grams never span sentences.
#[derive(Debug, Default, Clone, Copy)]
pub struct NgramModule;

fn ngrams(doc: &TextAnalyzer<'_>, n: usize, top: usize) -> Vec<NgramRow> {
    let mut grams = Vec::new();
    for sentence in doc.sentences() {
        let words: Vec<String> = lodot_text::words(sentence)
            .into_iter()
            .filter(|w| is_alpha_word(w))
            .map(str::to_lowercase)
            .collect();
        grams.extend(words.windows(n).map(|window| window.join(" ")));
    }

    rank(count_items(grams), top)
        .into_iter()
        .map(|(gram, count)| NgramRow { gram, count })
        .collect()
}

pub(crate) fn build_ngrams(doc: &TextAnalyzer<'_>, top: usize) -> NgramReport {
    NgramReport {
        bigrams: ngrams(doc, 2, top),
        trigrams: ngrams(doc, 3, top),
    }
}

impl AnalysisModule for NgramModule {
    fn focus(&self) -> Focus {
        Focus::Ngrams
    }

    fn description(&self) -> &'static str {
        "Most frequent word bigrams and trigrams"
    }

    fn analyze(&self, doc: &TextAnalyzer<'_>, opts: &ModuleOptions) -> Result<Section> {
        Ok(Section::Ngrams(build_ngrams(doc, opts.ngram_top)))
    }
}
