use lodot_types::AnalysisReceipt;

use crate::view::{Table, section_views};
use crate::{fmt_timestamp, title_case};

pub(crate) fn render_md(receipt: &AnalysisReceipt) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "# LODOT REPORT FOR {}\n\n",
        receipt.source.display_name()
    ));
    out.push_str(&format!(
        "_Generated {} by {} {}_\n",
        fmt_timestamp(receipt.generated_at_ms),
        receipt.tool.name,
        receipt.tool.version
    ));

    for section in section_views(receipt) {
        out.push_str(&format!("\n## {}\n", section.heading()));
        for (key, value) in &section.scalars {
            out.push_str(&format!("- **{}**: {value}\n", title_case(key)));
        }
        for table in &section.tables {
            if table.rows.is_empty() {
                continue;
            }
            out.push_str(&format!("\n### {}\n\n", title_case(table.caption)));
            out.push_str(&md_table(table));
        }
    }

    if !receipt.warnings.is_empty() {
        out.push_str("\n## WARNINGS\n");
        for warning in &receipt.warnings {
            out.push_str(&format!("- {warning}\n"));
        }
    }
    out
}

fn md_table(table: &Table) -> String {
    let mut out = String::new();
    out.push_str(&format!("|{}|\n", table.headers.join("|")));
    let align: Vec<&str> = (0..table.headers.len())
        .map(|col| {
            let numeric = table
                .rows
                .iter()
                .all(|row| row.get(col).is_some_and(|v| v.is_numeric()));
            if numeric { "---:" } else { "---" }
        })
        .collect();
    out.push_str(&format!("|{}|\n", align.join("|")));
    for row in &table.rows {
        let cells: Vec<String> = row.iter().map(|v| escape_cell(&v.to_string())).collect();
        out.push_str(&format!("|{}|\n", cells.join("|")));
    }
    out
}

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|").replace('\n', " ")
}
