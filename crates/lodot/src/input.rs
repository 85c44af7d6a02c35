//! Input loading: positional text, stdin, or files (plain text, Word, PDF).

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};
use lodot_config::CliAnalyzeArgs;
use tracing::debug;

const STDIN_MARKER: &str = "-";

/// How a file's bytes become text, decided by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    Plain,
    Docx,
    Pdf,
}

impl FileKind {
    fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "txt" | "md" | "text" => Some(Self::Plain),
            "docx" => Some(Self::Docx),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

/// Text to analyze plus the names of where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LoadedInput {
    pub(crate) text: String,
    pub(crate) inputs: Vec<String>,
}

/// Files win over positional text. Multiple files are joined with a blank line.
pub(crate) fn load(args: &CliAnalyzeArgs) -> Result<LoadedInput> {
    if !args.files.is_empty() {
        let mut texts = Vec::with_capacity(args.files.len());
        let mut inputs = Vec::with_capacity(args.files.len());
        for path in &args.files {
            if path.as_os_str() == STDIN_MARKER {
                texts.push(read_stdin()?);
                inputs.push("<stdin>".to_string());
            } else {
                texts.push(load_file(path)?);
                inputs.push(path.display().to_string());
            }
        }
        return Ok(LoadedInput {
            text: texts.join("\n\n"),
            inputs,
        });
    }

    match args.input.as_deref() {
        Some(STDIN_MARKER) => Ok(LoadedInput {
            text: read_stdin()?,
            inputs: vec!["<stdin>".to_string()],
        }),
        Some(text) if !text.trim().is_empty() => Ok(LoadedInput {
            text: text.to_string(),
            inputs: Vec::new(),
        }),
        _ => bail!("No input text or file provided."),
    }
}

/// Read one input file as text after checking its extension.
pub(crate) fn load_file(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let Some(kind) = FileKind::from_extension(&extension) else {
        bail!("Unsupported file type: .{extension}");
    };
    debug!(path = %path.display(), ?kind, "loading input file");
    match kind {
        FileKind::Plain => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        FileKind::Docx => {
            let bytes = read_bytes(path)?;
            docx_text(&bytes)
                .with_context(|| format!("Failed to extract text from {}", path.display()))
        }
        FileKind::Pdf => {
            let bytes = read_bytes(path)?;
            pdf_extract::extract_text_from_mem(&bytes)
                .map_err(|err| anyhow!("{err}"))
                .with_context(|| format!("Failed to extract text from {}", path.display()))
        }
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Body paragraphs of a Word document, one blank line apart. Table cells are
/// skipped.
fn docx_text(bytes: &[u8]) -> Result<String> {
    let docx = docx_rs::read_docx(bytes).map_err(|err| anyhow!("{err}"))?;
    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .filter(|text| !text.trim().is_empty())
        .collect();
    Ok(paragraphs.join("\n\n"))
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut out = String::new();
    push_runs(&paragraph.children, &mut out);
    out
}

fn push_runs(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for item in &run.children {
                    match item {
                        RunChild::Text(text) => out.push_str(&text.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_runs(&link.children, out),
            _ => {}
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}
