//! # lodot-analysis
//!
//! **Tier 2 (Orchestration)**
//!
//! Builds a shared [`TextAnalyzer`] over the input, plugs one
//! [`AnalysisModule`] per requested focus into the [`Analyzer`] registry, and
//! merges the module outputs into an [`lodot_types::AnalysisReceipt`].
//!
//! A module that fails does not abort the run; its error becomes a receipt
//! warning and the receipt status becomes partial.

mod analysis;
mod analyzer;
mod composition;
mod lexicon;
mod module;
mod ngrams;
mod plan;
mod pos;
mod readability;
mod registry;
mod sentiment;
mod text;
mod util;
mod words;

pub use analysis::{AnalysisContext, AnalysisRequest, analyze};
pub use analyzer::TextAnalyzer;
pub use composition::CompositionModule;
pub use lexicon::LexiconModule;
pub use module::{AnalysisModule, Glossary, ModuleOptions, Section};
pub use ngrams::NgramModule;
pub use plan::{FocusPlan, focus_plan_for};
pub use pos::PosModule;
pub use readability::ReadabilityModule;
pub use registry::{Analyzer, default_module};
pub use sentiment::SentimentModule;
pub use text::TextModule;
pub use words::WordsModule;
