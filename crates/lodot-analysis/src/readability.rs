//! Readability indices.
//!
//! Formulas are the standard published ones (Flesch, Flesch-Kincaid,
//! Gunning, McLaughlin, Smith-Senter, Coleman-Liau, Linsear Write) fed by the
//! rule-based counts in `lodot-text`, so scores track but do not exactly
//! reproduce dictionary-backed implementations.

use std::collections::{BTreeMap, HashSet};

use anyhow::{Result, bail};
use lodot_math::{round_f64, safe_div};
use lodot_text::{is_alpha_word, is_stopword, syllables};
use lodot_types::{Focus, ReadabilityReport};
use tracing::trace;

use crate::analyzer::TextAnalyzer;
use crate::module::{AnalysisModule, ModuleOptions, Section};

/// Words sampled by Linsear Write.
const LINSEAR_SAMPLE: usize = 100;
/// Syllables at which a word counts as polysyllabic.
const POLYSYLLABLE: usize = 3;
/// SMOG is undefined for shorter texts.
const SMOG_MIN_SENTENCES: usize = 3;

#[derive(Debug, Default, Clone, Copy)]
pub struct ReadabilityModule;

pub(crate) fn build_readability(
    doc: &TextAnalyzer<'_>,
    opts: &ModuleOptions,
) -> Result<ReadabilityReport> {
    let words = doc.words();
    if words.is_empty() {
        bail!("text contains no words to score");
    }

    let word_count = words.len() as f64;
    let sentence_count = doc.sentences().len().max(1);
    let sentences = sentence_count as f64;
    let syllable_count = doc.syllable_count() as f64;
    let polysyllables = doc
        .syllables()
        .iter()
        .filter(|n| **n >= POLYSYLLABLE)
        .count() as f64;
    let letters: usize = words
        .iter()
        .map(|w| w.chars().filter(|c| c.is_alphabetic()).count())
        .sum();
    let characters: usize = words
        .iter()
        .map(|w| w.chars().filter(|c| c.is_alphanumeric()).count())
        .sum();

    let words_per_sentence = word_count / sentences;
    let syllables_per_word = syllable_count / word_count;

    let flesch_reading_ease = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    let flesch_kincaid_grade = 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59;
    let gunning_fog = 0.4 * (words_per_sentence + 100.0 * polysyllables / word_count);
    let smog_index = if doc.sentences().len() < SMOG_MIN_SENTENCES {
        0.0
    } else {
        1.043 * (polysyllables * 30.0 / sentences).sqrt() + 3.1291
    };
    let automated_readability_index =
        4.71 * (characters as f64 / word_count) + 0.5 * words_per_sentence - 21.43;
    let coleman_liau_index = 0.0588 * (letters as f64 / word_count * 100.0)
        - 0.296 * (sentences / word_count * 100.0)
        - 15.8;
    let linsear_write_formula = linsear_write(doc);

    let mut grades = vec![
        flesch_kincaid_grade,
        gunning_fog,
        automated_readability_index,
        coleman_liau_index,
        linsear_write_formula,
        grade_from_reading_ease(flesch_reading_ease),
    ];
    if doc.sentences().len() >= SMOG_MIN_SENTENCES {
        grades.push(smog_index);
    }
    let text_standard = text_standard(&grades);
    trace!(?grades, %text_standard, "readability consensus");

    Ok(ReadabilityReport {
        flesch_reading_ease: round_f64(flesch_reading_ease, 2),
        flesch_kincaid_grade: round_f64(flesch_kincaid_grade, 2),
        gunning_fog: round_f64(gunning_fog, 2),
        smog_index: round_f64(smog_index, 2),
        automated_readability_index: round_f64(automated_readability_index, 2),
        coleman_liau_index: round_f64(coleman_liau_index, 2),
        linsear_write_formula: round_f64(linsear_write_formula, 2),
        difficult_words: difficult_words(doc),
        text_standard,
        reading_time_min: round_f64(safe_div(word_count, opts.reading_wpm), 2),
        speaking_time_min: round_f64(safe_div(word_count, opts.speaking_wpm), 2),
    })
}

/// Distinct content words of three or more syllables.
fn difficult_words(doc: &TextAnalyzer<'_>) -> usize {
    doc.alpha_words()
        .iter()
        .filter(|w| !is_stopword(w) && syllables(w) >= POLYSYLLABLE)
        .collect::<HashSet<_>>()
        .len()
}

fn linsear_write(doc: &TextAnalyzer<'_>) -> f64 {
    let mut easy = 0usize;
    let mut hard = 0usize;
    let mut sampled_sentences = 0usize;
    let mut taken = 0usize;

    for sentence in doc.sentences() {
        if taken >= LINSEAR_SAMPLE {
            break;
        }
        let words: Vec<&str> = lodot_text::words(sentence)
            .into_iter()
            .filter(|w| is_alpha_word(w))
            .collect();
        if words.is_empty() {
            continue;
        }
        sampled_sentences += 1;
        for word in words.iter().take(LINSEAR_SAMPLE - taken) {
            if syllables(word) >= POLYSYLLABLE {
                hard += 1;
            } else {
                easy += 1;
            }
            taken += 1;
        }
    }

    if sampled_sentences == 0 {
        return 0.0;
    }
    let score = (easy + 3 * hard) as f64 / sampled_sentences as f64;
    if score > 20.0 {
        score / 2.0
    } else {
        (score - 2.0) / 2.0
    }
}

fn grade_from_reading_ease(score: f64) -> f64 {
    match score {
        s if s >= 90.0 => 5.0,
        s if s >= 80.0 => 6.0,
        s if s >= 70.0 => 7.0,
        s if s >= 60.0 => 8.5,
        s if s >= 50.0 => 10.0,
        s if s >= 40.0 => 11.0,
        s if s >= 30.0 => 12.0,
        _ => 13.0,
    }
}

fn ordinal(n: i64) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Most common rounded grade across indices, ties to the lower grade.
fn text_standard(grades: &[f64]) -> String {
    let mut votes: BTreeMap<i64, usize> = BTreeMap::new();
    for grade in grades {
        *votes.entry(grade.round() as i64).or_insert(0) += 1;
    }
    let winner = votes
        .iter()
        .fold(None::<(i64, usize)>, |best, (grade, count)| match best {
            Some((_, best_count)) if best_count >= *count => best,
            _ => Some((*grade, *count)),
        })
        .map_or(1, |(grade, _)| grade)
        .max(1);
    format!("{} and {} grade", ordinal(winner - 1), ordinal(winner))
}

impl AnalysisModule for ReadabilityModule {
    fn focus(&self) -> Focus {
        Focus::Read
    }

    fn description(&self) -> &'static str {
        "Readability indices, grade consensus and reading time"
    }

    fn analyze(&self, doc: &TextAnalyzer<'_>, opts: &ModuleOptions) -> Result<Section> {
        build_readability(doc, opts).map(Section::Read)
    }
}
