use std::collections::HashMap;

use anyhow::Result;
use lodot_math::percent;
use lodot_text::{Tag, is_stopword, lemmatize};
use lodot_types::{Focus, LexiconReport, WordDetail};

use crate::analyzer::TextAnalyzer;
use crate::module::{AnalysisModule, Glossary, ModuleOptions, Section};
use crate::util::{count_items, rank};

/// Per-lemma detail: occurrences, share of all words, tag and senses.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconModule;

/// Surface forms and tags observed for one lemma.
#[derive(Default)]
struct LemmaSightings {
    forms: HashMap<String, usize>,
    tags: HashMap<Tag, usize>,
}

fn most_common<K: Ord + Clone>(counts: &HashMap<K, usize>) -> Option<K> {
    counts
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(key, _)| key.clone())
}

pub(crate) fn build_lexicon(
    doc: &TextAnalyzer<'_>,
    top: usize,
    glossary: &Glossary,
) -> LexiconReport {
    let word_count = doc.words().len();
    let counts = count_items(doc.lemmas().iter().map(String::as_str));

    let mut sightings: HashMap<String, LemmaSightings> = HashMap::new();
    for (token, tag) in doc.tagged_alpha() {
        let lower = token.to_lowercase();
        if is_stopword(&lower) {
            continue;
        }
        let entry = sightings.entry(lemmatize(&lower)).or_default();
        *entry.forms.entry(lower).or_insert(0) += 1;
        *entry.tags.entry(*tag).or_insert(0) += 1;
    }

    let entries = rank(counts, top)
        .into_iter()
        .map(|(lemma, occurrences)| {
            let seen = sightings.get(lemma);
            let word = seen
                .and_then(|s| most_common(&s.forms))
                .unwrap_or_else(|| lemma.to_string());
            let pos_tag = seen
                .and_then(|s| most_common(&s.tags))
                .unwrap_or(Tag::X)
                .as_str()
                .to_string();
            let senses = glossary.senses(&word, lemma).to_vec();
            WordDetail {
                word,
                occurrences,
                frequency_percent: percent(occurrences, word_count, 2),
                pos_tag,
                lemma: lemma.to_string(),
                senses,
            }
        })
        .collect();

    LexiconReport { entries }
}

impl AnalysisModule for LexiconModule {
    fn focus(&self) -> Focus {
        Focus::Lexicon
    }

    fn description(&self) -> &'static str {
        "Top lemmas with part of speech and word senses"
    }

    fn analyze(&self, doc: &TextAnalyzer<'_>, opts: &ModuleOptions) -> Result<Section> {
        Ok(Section::Lexicon(build_lexicon(
            doc,
            opts.lexicon_top,
            &opts.glossary,
        )))
    }
}
