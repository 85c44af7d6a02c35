use anyhow::{Result, bail};
use tracing::{debug, info, warn};

use lodot_types::{
    AnalysisArgsMeta, AnalysisReceipt, AnalysisStatus, DocumentSource, Focus, SCHEMA_VERSION,
    ToolInfo,
};

use crate::analyzer::TextAnalyzer;
use crate::module::{ModuleOptions, Section};
use crate::plan::focus_plan_for;
use crate::registry::Analyzer;
use crate::util::now_ms;

/// The document under analysis.
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    pub text: String,
    pub source: DocumentSource,
}

impl AnalysisContext {
    /// Context with a source whose byte count and hash are filled from `text`.
    pub fn new(text: impl Into<String>, inputs: Vec<String>) -> Self {
        let text = text.into();
        let source = DocumentSource {
            inputs,
            bytes: text.len(),
            hash: content_hash(&text),
        };
        Self { text, source }
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub focus: Vec<Focus>,
    pub options: ModuleOptions,
    pub args: AnalysisArgsMeta,
}

fn content_hash(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}

pub fn analyze(ctx: AnalysisContext, req: AnalysisRequest) -> Result<AnalysisReceipt> {
    if ctx.text.trim().is_empty() {
        bail!("No input text or file provided.");
    }

    let mut source = ctx.source;
    if source.hash.is_empty() {
        source.hash = content_hash(&ctx.text);
    }
    if source.bytes == 0 {
        source.bytes = ctx.text.len();
    }

    let plan = focus_plan_for(&req.focus);
    let focuses = plan.focuses();
    info!(
        focus = ?focuses.iter().map(|f| f.as_str()).collect::<Vec<_>>(),
        bytes = source.bytes,
        "analyzing document"
    );

    let doc = TextAnalyzer::new(&ctx.text);
    debug!(
        words = doc.words().len(),
        sentences = doc.sentences().len(),
        paragraphs = doc.paragraphs().len(),
        "document segmented"
    );

    let mut registry = Analyzer::new();
    registry.plug_modules(&focuses);

    let mut receipt = AnalysisReceipt {
        schema_version: SCHEMA_VERSION,
        generated_at_ms: now_ms(),
        tool: ToolInfo::current(),
        mode: "analyze".to_string(),
        status: AnalysisStatus::Complete,
        warnings: Vec::new(),
        source,
        args: req.args,
        text: None,
        words: None,
        pos: None,
        composition: None,
        readability: None,
        sentiment: None,
        lexicon: None,
        ngrams: None,
    };

    for (focus, result) in registry.generate_analysis(&doc, &req.options) {
        match result {
            Ok(section) => merge_section(&mut receipt, section),
            Err(err) => {
                warn!(focus = focus.as_str(), error = %err, "module failed");
                receipt
                    .warnings
                    .push(format!("{} analysis failed: {err:#}", focus.as_str()));
            }
        }
    }

    if !receipt.warnings.is_empty() {
        receipt.status = AnalysisStatus::Partial;
    }

    Ok(receipt)
}

fn merge_section(receipt: &mut AnalysisReceipt, section: Section) {
    match section {
        Section::Text(stats) => receipt.text = Some(stats),
        Section::Words(report) => receipt.words = Some(report),
        Section::Pos(report) => receipt.pos = Some(report),
        Section::Composition(report) => receipt.composition = Some(report),
        Section::Read(report) => receipt.readability = Some(report),
        Section::Sent(report) => receipt.sentiment = Some(report),
        Section::Lexicon(report) => receipt.lexicon = Some(report),
        Section::Ngrams(report) => receipt.ngrams = Some(report),
    }
}
