//! Lexicon-based polarity and subjectivity scoring.
//!
//! Scores follow the averaging scheme of pattern/TextBlob: every lexicon hit
//! contributes a `(polarity, subjectivity)` pair and the text score is the
//! mean of its hits. A negator flips and dampens the next hit; an intensifier
//! scales it.

use std::collections::HashMap;

use crate::segment::words;

/// Polarity in `[-1, 1]`, subjectivity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polarity {
    pub polarity: f64,
    pub subjectivity: f64,
}

pub trait PolarityScorer {
    fn score(&self, text: &str) -> Polarity;
}

const NEGATION_FACTOR: f64 = -0.5;

const NEGATORS: &[&str] = &["not", "never", "no", "n't", "cannot"];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("so", 1.2),
    ("quite", 1.1),
    ("too", 1.2),
    ("absolutely", 1.5),
    ("highly", 1.3),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("barely", 0.4),
];

/// `(word, polarity, subjectivity)`.
const DEFAULT_LEXICON: &[(&str, f64, f64)] = &[
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("wonderful", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("awesome", 1.0, 1.0),
    ("brilliant", 0.9, 1.0),
    ("perfect", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("nice", 0.6, 1.0),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("lovely", 0.5, 0.75),
    ("beautiful", 0.85, 1.0),
    ("pleasant", 0.73, 0.97),
    ("enjoy", 0.4, 0.5),
    ("enjoyed", 0.4, 0.5),
    ("fun", 0.3, 0.2),
    ("interesting", 0.5, 0.5),
    ("useful", 0.3, 0.0),
    ("helpful", 0.3, 0.5),
    ("clear", 0.1, 0.38),
    ("easy", 0.43, 0.83),
    ("fine", 0.42, 0.5),
    ("positive", 0.23, 0.55),
    ("successful", 0.75, 0.95),
    ("impressive", 1.0, 1.0),
    ("favorite", 0.5, 1.0),
    ("kind", 0.6, 0.9),
    ("calm", 0.3, 0.75),
    ("bright", 0.7, 0.9),
    ("strong", 0.43, 0.73),
    ("fresh", 0.3, 0.5),
    ("important", 0.4, 1.0),
    ("bad", -0.7, 0.67),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("unhappy", -0.6, 0.9),
    ("angry", -0.5, 1.0),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("boring", -1.0, 1.0),
    ("ugly", -0.7, 1.0),
    ("wrong", -0.5, 0.9),
    ("difficult", -0.5, 1.0),
    ("hard", -0.29, 0.54),
    ("dark", -0.15, 0.4),
    ("dull", -0.31, 0.54),
    ("weak", -0.38, 0.63),
    ("disappointing", -0.6, 0.7),
    ("disappointed", -0.75, 0.75),
    ("annoying", -0.8, 0.9),
    ("stupid", -0.8, 1.0),
    ("useless", -0.5, 0.2),
    ("painful", -0.7, 0.9),
    ("dangerous", -0.6, 0.9),
    ("broken", -0.4, 0.4),
    ("negative", -0.3, 0.4),
    ("evil", -1.0, 1.0),
    ("fear", -0.6, 0.8),
    ("afraid", -0.6, 0.9),
    ("lonely", -0.5, 0.8),
    ("cold", -0.6, 1.0),
    ("slow", -0.3, 0.39),
    ("dirty", -0.6, 0.8),
    ("tired", -0.4, 0.7),
    ("sick", -0.71, 0.86),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
];

/// Scores text against a word lexicon.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: HashMap<String, (f64, f64)>,
    intensifiers: HashMap<String, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    /// Scorer with the built-in English lexicon.
    pub fn new() -> Self {
        let lexicon = DEFAULT_LEXICON
            .iter()
            .map(|(word, p, s)| ((*word).to_string(), (*p, *s)))
            .collect();
        Self::with_lexicon(lexicon)
    }

    /// Scorer with a caller-provided lexicon mapping words to
    /// `(polarity, subjectivity)`.
    pub fn with_lexicon(lexicon: HashMap<String, (f64, f64)>) -> Self {
        let intensifiers = INTENSIFIERS
            .iter()
            .map(|(word, factor)| ((*word).to_string(), *factor))
            .collect();
        Self {
            lexicon,
            intensifiers,
        }
    }

    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token) || token.ends_with("n't")
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> Polarity {
        let mut hits: Vec<(f64, f64)> = Vec::new();
        let mut negated = false;
        let mut intensity = 1.0;

        for token in words(text) {
            let token = token.to_lowercase().replace('\u{2019}', "'");
            if is_negator(&token) {
                negated = true;
                continue;
            }
            if let Some(factor) = self.intensifiers.get(&token) {
                intensity *= factor;
                continue;
            }
            match self.lexicon.get(&token) {
                Some(&(polarity, subjectivity)) => {
                    let mut polarity = (polarity * intensity).clamp(-1.0, 1.0);
                    if negated {
                        polarity *= NEGATION_FACTOR;
                    }
                    let subjectivity = (subjectivity * intensity).clamp(0.0, 1.0);
                    hits.push((polarity, subjectivity));
                    negated = false;
                    intensity = 1.0;
                }
                None => intensity = 1.0,
            }
        }

        if hits.is_empty() {
            return Polarity::default();
        }
        let n = hits.len() as f64;
        Polarity {
            polarity: hits.iter().map(|(p, _)| p).sum::<f64>() / n,
            subjectivity: hits.iter().map(|(_, s)| s).sum::<f64>() / n,
        }
    }
}
