use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use lodot_analysis::{AnalysisContext, AnalysisRequest, Glossary, ModuleOptions, analyze};
use lodot_config as cli;
use lodot_format::{VizOutput, render, supports_viz, visualize};
use lodot_types::{AnalysisArgsMeta, AnalysisReceipt, ReportFormat, VizKind};
use tracing::{debug, info};

use crate::config::{self, AnalyzeSettings};
use crate::glossary;
use crate::input;
use crate::progress::Progress;

pub(crate) fn handle(
    args: &cli::CliAnalyzeArgs,
    global: &cli::GlobalArgs,
    profile: Option<&str>,
) -> Result<()> {
    let ctx = config::load_config(global.config.as_deref())?;
    let settings = config::resolve_analyze(args, &ctx, profile)?;
    debug!(?settings, "resolved analysis settings");

    let loaded = input::load(args)?;
    let target = report_path(settings.output, settings.outfile.as_deref())?;

    let glossary = match settings.glossary.as_deref() {
        Some(path) => glossary::load(path)?,
        None => Glossary::default(),
    };

    let progress = Progress::new(!global.no_progress);
    progress.set_message("Analyzing text...");
    let receipt = analyze(
        AnalysisContext::new(loaded.text, loaded.inputs),
        build_request(&settings, glossary),
    )?;
    progress.finish_and_clear();

    if let Some(kind) = settings.viz {
        emit_visualizations(&receipt, kind)?;
    }

    let rendered = render(&receipt, settings.output)?;
    match target {
        Some(path) => {
            std::fs::write(&path, ensure_newline(rendered))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "report written");
            eprintln!("Report saved to {}", path.display());
        }
        None => print!("{}", ensure_newline(rendered)),
    }
    Ok(())
}

fn build_request(settings: &AnalyzeSettings, glossary: Glossary) -> AnalysisRequest {
    AnalysisRequest {
        focus: settings.focus.clone(),
        options: ModuleOptions {
            top_words: settings.top,
            lexicon_top: settings.lexicon_top,
            ngram_top: settings.ngram_top,
            reading_wpm: settings.reading_wpm,
            speaking_wpm: settings.speaking_wpm,
            glossary,
            ..ModuleOptions::default()
        },
        args: AnalysisArgsMeta {
            focus: settings.focus.iter().map(|f| f.as_str().to_string()).collect(),
            output: settings.output.as_str().to_string(),
            top: settings.top,
            lexicon_top: settings.lexicon_top,
            ngram_top: settings.ngram_top,
        },
    }
}

/// `None` means stdout. File formats need an outfile; the format name is
/// appended as the extension.
pub(crate) fn report_path(format: ReportFormat, outfile: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(ext) = format.extension() else {
        if let Some(outfile) = outfile {
            debug!(outfile = %outfile.display(), "stream output ignores --outfile");
        }
        return Ok(None);
    };
    match outfile {
        Some(name) => {
            let mut file = name.as_os_str().to_os_string();
            file.push(".");
            file.push(ext);
            Ok(Some(PathBuf::from(file)))
        }
        None => bail!("Filename required for .{ext} output"),
    }
}

/// One chart per present section, in canonical order.
fn emit_visualizations(receipt: &AnalysisReceipt, kind: VizKind) -> Result<()> {
    for focus in receipt.present_focuses().into_iter().filter(|f| supports_viz(*f)) {
        match visualize(receipt, focus, kind) {
            Some(VizOutput::Text(text)) => println!("{text}"),
            Some(VizOutput::Svg { file_name, content }) => {
                std::fs::write(&file_name, content)
                    .with_context(|| format!("Failed to write {file_name}"))?;
                eprintln!("Chart saved to {file_name}");
            }
            None => debug!(focus = focus.as_str(), "nothing to visualize"),
        }
    }
    Ok(())
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
