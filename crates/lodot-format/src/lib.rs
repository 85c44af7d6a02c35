//! # lodot-format
//!
//! **Tier 3 (Formatting)**
//!
//! Rendering for analysis receipts. Every text writer walks the same
//! per-section view (scalars plus tables) so that section coverage stays
//! identical across stream, TXT, Markdown and Turtle output.

mod md;
mod stream;
mod turtle;
mod txt;
mod view;
mod viz;

use anyhow::Result;
use lodot_types::{AnalysisReceipt, ReportFormat};
use time::OffsetDateTime;
use time::macros::format_description;

pub use viz::{FrequencySeries, VizOutput, frequency_series, supports_viz, visualize};

pub fn render(receipt: &AnalysisReceipt, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Stream => Ok(stream::render_stream(receipt)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(receipt)?),
        ReportFormat::Txt => Ok(txt::render_txt(receipt)),
        ReportFormat::Md => Ok(md::render_md(receipt)),
        ReportFormat::Ttl => Ok(turtle::render_turtle(receipt)),
    }
}

/// `snake_case` key to `Title Case`.
pub fn title_case(key: &str) -> String {
    key.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn fmt_f64(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn fmt_timestamp(ms: u128) -> String {
    let nanos = i128::try_from(ms).unwrap_or(0).saturating_mul(1_000_000);
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .ok()
        .and_then(|ts| ts.format(&format).ok())
        .unwrap_or_else(|| "unknown".to_string())
}
