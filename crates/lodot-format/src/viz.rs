//! Frequency visualizations: fixed-width table, ASCII bar plot, SVG chart.

use lodot_math::percent;
use lodot_types::{AnalysisReceipt, Focus, VizKind};

const PLOT_WIDTH: usize = 60;
const PLOT_SYMBOL: char = '#';

const SVG_BAR_HEIGHT: usize = 22;
const SVG_LABEL_WIDTH: usize = 160;
const SVG_BAR_WIDTH: usize = 480;

/// One series of `(item, count, freq %)` rows.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencySeries {
    pub title: String,
    pub rows: Vec<(String, usize, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VizOutput {
    /// Printed to stdout.
    Text(String),
    /// Written to `file_name`.
    Svg { file_name: String, content: String },
}

pub fn supports_viz(focus: Focus) -> bool {
    matches!(focus, Focus::Words | Focus::Pos | Focus::Ngrams)
}

/// Frequency series for a section. N-gram frequencies are shares of the
/// listed n-grams, since the receipt keeps no total.
pub fn frequency_series(receipt: &AnalysisReceipt, focus: Focus) -> Vec<FrequencySeries> {
    match focus {
        Focus::Words => receipt
            .words
            .iter()
            .map(|w| FrequencySeries {
                title: "Word frequencies".to_string(),
                rows: w
                    .rows
                    .iter()
                    .map(|r| (r.word.clone(), r.count, r.freq))
                    .collect(),
            })
            .collect(),
        Focus::Pos => receipt
            .pos
            .iter()
            .map(|p| FrequencySeries {
                title: "Part-of-speech frequencies".to_string(),
                rows: p
                    .rows
                    .iter()
                    .map(|r| (r.tag.clone(), r.count, r.freq))
                    .collect(),
            })
            .collect(),
        Focus::Ngrams => receipt
            .ngrams
            .iter()
            .flat_map(|n| {
                [("Bigram frequencies", &n.bigrams), ("Trigram frequencies", &n.trigrams)]
            })
            .map(|(title, rows)| {
                let total: usize = rows.iter().map(|r| r.count).sum();
                FrequencySeries {
                    title: title.to_string(),
                    rows: rows
                        .iter()
                        .map(|r| (r.gram.clone(), r.count, percent(r.count, total, 2)))
                        .collect(),
                }
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Render a visualization for one section, or `None` when the section is
/// absent, empty, or carries no frequencies.
pub fn visualize(receipt: &AnalysisReceipt, focus: Focus, kind: VizKind) -> Option<VizOutput> {
    if !supports_viz(focus) {
        return None;
    }
    let series: Vec<FrequencySeries> = frequency_series(receipt, focus)
        .into_iter()
        .filter(|s| !s.rows.is_empty())
        .collect();
    if series.is_empty() {
        return None;
    }

    Some(match kind {
        VizKind::Table => VizOutput::Text(series.iter().map(render_table).collect::<Vec<_>>().join("\n")),
        VizKind::Plot => VizOutput::Text(series.iter().map(render_plot).collect::<Vec<_>>().join("\n")),
        VizKind::Image => VizOutput::Svg {
            file_name: format!("{}_freq.svg", focus.as_str()),
            content: render_svg(&series),
        },
    })
}

fn item_width(series: &FrequencySeries) -> usize {
    series
        .rows
        .iter()
        .map(|(item, _, _)| item.chars().count())
        .max()
        .unwrap_or(0)
        .max(4)
        + 2
}

fn render_table(series: &FrequencySeries) -> String {
    let width = item_width(series);
    let mut out = format!("{}\n", series.title);
    out.push_str(&format!("{:<width$}{:<10}{:<10}\n", "Item", "Count", "Freq"));
    for (item, count, freq) in &series.rows {
        out.push_str(&format!("{item:<width$}{count:<10}{freq:<10.4}\n"));
    }
    out
}

fn render_plot(series: &FrequencySeries) -> String {
    let width = item_width(series);
    let max_count = series.rows.iter().map(|(_, c, _)| *c).max().unwrap_or(0);
    let mut out = format!("{}\n", series.title);
    for (item, count, _) in &series.rows {
        let bar_len = if max_count == 0 {
            0
        } else {
            count * PLOT_WIDTH / max_count
        };
        let bar: String = std::iter::repeat_n(PLOT_SYMBOL, bar_len).collect();
        out.push_str(&format!("{item:<width$}{count:<5}{bar}\n"));
    }
    out
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn render_svg(series: &[FrequencySeries]) -> String {
    let rows: usize = series.iter().map(|s| s.rows.len() + 1).sum();
    let width = SVG_LABEL_WIDTH + SVG_BAR_WIDTH + 60;
    let height = rows * SVG_BAR_HEIGHT + 10;
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" role=\"img\" font-family=\"Verdana\" font-size=\"12\">"
    );

    let mut y = 0;
    for s in series {
        y += SVG_BAR_HEIGHT;
        out.push_str(&format!(
            "<text x=\"4\" y=\"{}\" font-weight=\"bold\">{}</text>",
            y - 6,
            xml_escape(&s.title)
        ));
        let max_count = s.rows.iter().map(|(_, c, _)| *c).max().unwrap_or(0).max(1);
        for (item, count, _) in &s.rows {
            let bar = count * SVG_BAR_WIDTH / max_count;
            out.push_str(&format!(
                "<text x=\"4\" y=\"{ty}\">{label}</text><rect x=\"{SVG_LABEL_WIDTH}\" y=\"{ry}\" width=\"{bar}\" height=\"{bh}\" fill=\"#4c9aff\"/><text x=\"{vx}\" y=\"{ty}\">{count}</text>",
                ty = y + 16,
                ry = y + 4,
                bh = SVG_BAR_HEIGHT - 6,
                vx = SVG_LABEL_WIDTH + bar + 6,
                label = xml_escape(item),
            ));
            y += SVG_BAR_HEIGHT;
        }
    }
    out.push_str("</svg>");
    out
}
