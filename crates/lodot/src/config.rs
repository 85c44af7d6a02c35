//! `lodot.toml` discovery and settings resolution.
//!
//! Precedence: CLI flags > `[view.<profile>]` > `[analyze]` > built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use lodot_config::{
    self as cli, AnalyzeConfig, CONFIG_FILE_NAME, Focus, ReportFormat, TomlConfig, ViewProfile,
    VizKind,
};
use tracing::debug;

/// A loaded configuration file, if any.
#[derive(Debug, Clone, Default)]
pub(crate) struct ConfigContext {
    pub(crate) config: Option<TomlConfig>,
    pub(crate) path: Option<PathBuf>,
}

impl ConfigContext {
    fn analyze(&self) -> Option<&AnalyzeConfig> {
        self.config.as_ref().map(|c| &c.analyze)
    }

    /// Directory that relative paths in the config resolve against.
    fn base_dir(&self) -> Option<&Path> {
        self.path.as_deref().and_then(Path::parent)
    }
}

/// Fully resolved settings for one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AnalyzeSettings {
    pub(crate) focus: Vec<Focus>,
    pub(crate) output: ReportFormat,
    pub(crate) outfile: Option<PathBuf>,
    pub(crate) viz: Option<VizKind>,
    pub(crate) top: usize,
    pub(crate) lexicon_top: usize,
    pub(crate) ngram_top: usize,
    pub(crate) reading_wpm: f64,
    pub(crate) speaking_wpm: f64,
    pub(crate) glossary: Option<PathBuf>,
}

/// `explicit`, else `<cwd>/lodot.toml`, else `<config_dir>/lodot/lodot.toml`.
pub(crate) fn discover_config_path(
    explicit: Option<&Path>,
    cwd: &Path,
    config_dir: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let local = cwd.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    config_dir
        .map(|dir| dir.join("lodot").join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}

pub(crate) fn load_config(explicit: Option<&Path>) -> Result<ConfigContext> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let user_dir = dirs::config_dir();
    let Some(path) = discover_config_path(explicit, &cwd, user_dir.as_deref()) else {
        debug!("no lodot.toml found; using built-in defaults");
        return Ok(ConfigContext::default());
    };

    let config = TomlConfig::from_file(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    debug!(path = %path.display(), profiles = config.view.len(), "loaded configuration");
    Ok(ConfigContext {
        config: Some(config),
        path: Some(path),
    })
}

fn resolve_profile<'a>(ctx: &'a ConfigContext, name: Option<&str>) -> Result<Option<&'a ViewProfile>> {
    let Some(name) = name else {
        return Ok(None);
    };
    match ctx.config.as_ref().and_then(|c| c.profile(name)) {
        Some(profile) => Ok(Some(profile)),
        None => bail!("Unknown profile '{name}'"),
    }
}

fn parse_focus_list(values: &[String]) -> Result<Vec<Focus>> {
    values
        .iter()
        .map(|v| Focus::from_str(v).with_context(|| format!("Unknown focus '{v}' in configuration")))
        .collect()
}

fn parse_output(value: &str) -> Result<ReportFormat> {
    ReportFormat::from_str(value)
        .with_context(|| format!("Unknown output format '{value}' in configuration"))
}

fn parse_viz(value: &str) -> Result<VizKind> {
    VizKind::from_str(value, true)
        .map_err(|_| anyhow::anyhow!("Unknown visualization '{value}' in configuration"))
}

pub(crate) fn resolve_analyze(
    args: &cli::CliAnalyzeArgs,
    ctx: &ConfigContext,
    profile_name: Option<&str>,
) -> Result<AnalyzeSettings> {
    let view = resolve_profile(ctx, profile_name)?;
    let base = ctx.analyze();

    let focus = if !args.analyze.is_empty() {
        args.analyze.clone()
    } else if let Some(list) = view.and_then(|v| v.focus.as_ref()).or_else(|| base.and_then(|b| b.focus.as_ref())) {
        parse_focus_list(list)?
    } else {
        vec![Focus::Text]
    };

    let output = match args.output {
        Some(format) => format,
        None => match view.and_then(|v| v.output.as_deref()).or_else(|| base.and_then(|b| b.output.as_deref())) {
            Some(value) => parse_output(value)?,
            None => ReportFormat::Stream,
        },
    };

    let viz = match args.viz {
        Some(kind) => Some(kind),
        None => view
            .and_then(|v| v.viz.as_deref())
            .or_else(|| base.and_then(|b| b.viz.as_deref()))
            .map(parse_viz)
            .transpose()?,
    };

    let outfile = args.outfile.clone().or_else(|| {
        view.and_then(|v| v.outfile.clone())
            .or_else(|| base.and_then(|b| b.outfile.clone()))
            .map(PathBuf::from)
    });

    let glossary = args.glossary.clone().or_else(|| {
        view.and_then(|v| v.glossary.as_deref())
            .or_else(|| base.and_then(|b| b.glossary.as_deref()))
            .map(|raw| match ctx.base_dir() {
                Some(dir) => dir.join(raw),
                None => PathBuf::from(raw),
            })
    });

    Ok(AnalyzeSettings {
        focus,
        output,
        outfile,
        viz,
        top: args
            .top
            .or_else(|| view.and_then(|v| v.top))
            .or_else(|| base.and_then(|b| b.top))
            .unwrap_or(cli::DEFAULT_TOP),
        lexicon_top: args
            .lexicon_top
            .or_else(|| view.and_then(|v| v.lexicon_top))
            .or_else(|| base.and_then(|b| b.lexicon_top))
            .unwrap_or(cli::DEFAULT_LEXICON_TOP),
        ngram_top: args
            .ngram_top
            .or_else(|| view.and_then(|v| v.ngram_top))
            .or_else(|| base.and_then(|b| b.ngram_top))
            .unwrap_or(cli::DEFAULT_NGRAM_TOP),
        reading_wpm: view
            .and_then(|v| v.reading_wpm)
            .or_else(|| base.and_then(|b| b.reading_wpm))
            .unwrap_or(cli::DEFAULT_READING_WPM),
        speaking_wpm: view
            .and_then(|v| v.speaking_wpm)
            .or_else(|| base.and_then(|b| b.speaking_wpm))
            .unwrap_or(cli::DEFAULT_SPEAKING_WPM),
        glossary,
    })
}
