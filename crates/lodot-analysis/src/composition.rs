use anyhow::Result;
use lodot_text::Tag;
use lodot_types::{CompositionReport, Focus};

use crate::analyzer::TextAnalyzer;
use crate::module::{AnalysisModule, ModuleOptions, Section};

/// Word-class composition of the text.
#[derive(Debug, Default, Clone, Copy)]
pub struct CompositionModule;

pub(crate) fn build_composition(doc: &TextAnalyzer<'_>) -> CompositionReport {
    let mut report = CompositionReport::default();
    for (_, tag) in doc.tagged_alpha() {
        match tag {
            Tag::Adj => report.adjectives += 1,
            Tag::Adv => report.adverbs += 1,
            Tag::Cconj | Tag::Sconj => report.conjunctions += 1,
            Tag::Det => report.determiners += 1,
            Tag::Noun => report.nouns += 1,
            Tag::Propn => report.proper_nouns += 1,
            Tag::Adp => report.prepositions += 1,
            Tag::Pron => report.pronouns += 1,
            Tag::Verb => report.verbs += 1,
            _ => {}
        }
    }
    report
}

impl AnalysisModule for CompositionModule {
    fn focus(&self) -> Focus {
        Focus::Composition
    }

    fn description(&self) -> &'static str {
        "Counts of nouns, verbs, adjectives and other word classes"
    }

    fn analyze(&self, doc: &TextAnalyzer<'_>, _opts: &ModuleOptions) -> Result<Section> {
        Ok(Section::Composition(build_composition(doc)))
    }
}
