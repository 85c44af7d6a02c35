//! Sense glossary loading: a TOML file with a `[senses]` table.

use std::path::Path;

use anyhow::{Context, Result};
use lodot_analysis::Glossary;
use tracing::info;

pub(crate) fn parse(content: &str) -> Result<Glossary> {
    let glossary: Glossary = toml::from_str(content).context("Invalid glossary TOML")?;
    Ok(glossary.normalized())
}

pub(crate) fn load(path: &Path) -> Result<Glossary> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read glossary {}", path.display()))?;
    let glossary = parse(&content).with_context(|| format!("In {}", path.display()))?;
    info!(entries = glossary.len(), path = %path.display(), "loaded sense glossary");
    Ok(glossary)
}
