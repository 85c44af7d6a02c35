use anyhow::Result;
use tracing::{debug, warn};

use lodot_types::Focus;

use crate::analyzer::TextAnalyzer;
use crate::module::{AnalysisModule, ModuleOptions, Section};
use crate::{
    CompositionModule, LexiconModule, NgramModule, PosModule, ReadabilityModule,
    SentimentModule, TextModule, WordsModule,
};

/// The built-in module for `focus`.
pub fn default_module(focus: Focus) -> Box<dyn AnalysisModule> {
    match focus {
        Focus::Text => Box::new(TextModule),
        Focus::Words => Box::new(WordsModule),
        Focus::Pos => Box::new(PosModule),
        Focus::Composition => Box::new(CompositionModule),
        Focus::Read => Box::new(ReadabilityModule),
        Focus::Sent => Box::new(SentimentModule::new()),
        Focus::Lexicon => Box::new(LexiconModule),
        Focus::Ngrams => Box::new(NgramModule),
    }
}

/// Plugin registry. Modules run in plug order against one shared document.
#[derive(Default)]
pub struct Analyzer {
    modules: Vec<Box<dyn AnalysisModule>>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plug a module. A second module for an already plugged focus is
    /// ignored and `false` is returned.
    pub fn plug(&mut self, module: Box<dyn AnalysisModule>) -> bool {
        let focus = module.focus();
        if self.modules.iter().any(|m| m.focus() == focus) {
            warn!(focus = focus.as_str(), "module already plugged; ignoring");
            return false;
        }
        debug!(focus = focus.as_str(), "plugged module");
        self.modules.push(module);
        true
    }

    /// Plug the built-in module for each focus.
    pub fn plug_modules(&mut self, focuses: &[Focus]) -> &mut Self {
        for focus in focuses {
            self.plug(default_module(*focus));
        }
        self
    }

    pub fn focuses(&self) -> Vec<Focus> {
        self.modules.iter().map(|m| m.focus()).collect()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Run every plugged module. Failures are returned per module, not raised.
    pub fn generate_analysis(
        &self,
        doc: &TextAnalyzer<'_>,
        opts: &ModuleOptions,
    ) -> Vec<(Focus, Result<Section>)> {
        self.modules
            .iter()
            .map(|module| {
                let focus = module.focus();
                debug!(focus = focus.as_str(), "running module");
                (focus, module.analyze(doc, opts))
            })
            .collect()
    }
}
