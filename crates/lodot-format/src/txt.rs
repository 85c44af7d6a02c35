use lodot_types::AnalysisReceipt;

use crate::view::{Table, Value, section_views};
use crate::{fmt_timestamp, title_case};

const SEPARATOR: &str = "\n---\n";

pub(crate) fn render_txt(receipt: &AnalysisReceipt) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "LODOT REPORT FOR {}\n",
        receipt.source.display_name()
    ));
    out.push_str(&format!(
        "Generated {} by {} {}\n",
        fmt_timestamp(receipt.generated_at_ms),
        receipt.tool.name,
        receipt.tool.version
    ));

    for section in section_views(receipt) {
        out.push_str(&format!("\n{}:\n", section.heading()));
        for (key, value) in &section.scalars {
            out.push_str(&format!("- {}: {value}\n", title_case(key)));
        }
        for table in &section.tables {
            out.push_str(&format!("\n{}:\n", title_case(table.caption)));
            out.push_str(&fixed_width_table(table));
        }
        out.push_str(SEPARATOR);
    }

    if !receipt.warnings.is_empty() {
        out.push_str("\nWARNINGS:\n");
        for warning in &receipt.warnings {
            out.push_str(&format!("- {warning}\n"));
        }
    }
    out
}

/// Plain-text table; text columns left aligned, numeric columns right aligned.
fn fixed_width_table(table: &Table) -> String {
    let cells: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(Value::one_line).collect())
        .collect();
    let numeric: Vec<bool> = (0..table.headers.len())
        .map(|col| {
            !table.rows.is_empty()
                && table
                    .rows
                    .iter()
                    .all(|row| row.get(col).is_some_and(|v| v.is_numeric()))
        })
        .collect();
    let widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            cells
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |values: Vec<&str>| -> String {
        let padded: Vec<String> = values
            .iter()
            .enumerate()
            .map(|(col, value)| {
                let width = widths[col];
                if numeric[col] {
                    format!("{value:>width$}")
                } else {
                    format!("{value:<width$}")
                }
            })
            .collect();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let mut out = line(table.headers.clone());
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&line(rule.iter().map(String::as_str).collect()));
    for row in &cells {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out
}
