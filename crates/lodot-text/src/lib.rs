//! # lodot-text
//!
//! **Tier 1 (Text Primitives)**
//!
//! Small, deterministic English text primitives used by the analysis modules.
//! None of these aim to be research grade; each sits behind a plain function
//! or trait so that a heavier backend can replace it.
//!
//! ## What belongs here
//! * Segmentation (words, sentences, paragraphs)
//! * Word-level heuristics (syllables, stopwords, lemmas)
//! * The `Tagger` and `PolarityScorer` seams and their rule-based defaults
//!
//! ## What does NOT belong here
//! * Receipt types
//! * Aggregation across a document (see `lodot-analysis`)
//! * I/O

#![forbid(unsafe_code)]

mod lemma;
mod normalize;
mod polarity;
mod segment;
mod stopwords;
mod syllable;
mod tagger;

pub use lemma::lemmatize;
pub use normalize::{is_alpha_word, normalize};
pub use polarity::{LexiconScorer, Polarity, PolarityScorer};
pub use segment::{paragraphs, sentences, words};
pub use stopwords::is_stopword;
pub use syllable::syllables;
pub use tagger::{RuleTagger, Tag, Tagger};
