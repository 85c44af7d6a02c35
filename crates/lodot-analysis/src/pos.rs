use anyhow::Result;
use lodot_math::percent;
use lodot_types::{Focus, PosReport, PosRow};

use crate::analyzer::TextAnalyzer;
use crate::module::{AnalysisModule, ModuleOptions, Section};
use crate::util::{count_items, rank};

/// Part-of-speech distribution over alphabetic tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct PosModule;

pub(crate) fn build_pos_report(doc: &TextAnalyzer<'_>) -> PosReport {
    let tags: Vec<&'static str> = doc.tagged_alpha().map(|(_, tag)| tag.as_str()).collect();
    let total_tokens = tags.len();
    let counts = count_items(tags);

    let rows = rank(counts, usize::MAX)
        .into_iter()
        .map(|(tag, count)| PosRow {
            tag: tag.to_string(),
            count,
            freq: percent(count, total_tokens, 2),
        })
        .collect();

    PosReport { total_tokens, rows }
}

impl AnalysisModule for PosModule {
    fn focus(&self) -> Focus {
        Focus::Pos
    }

    fn description(&self) -> &'static str {
        "Part-of-speech tag counts and percentages"
    }

    fn analyze(&self, doc: &TextAnalyzer<'_>, _opts: &ModuleOptions) -> Result<Section> {
        Ok(Section::Pos(build_pos_report(doc)))
    }
}
