use lodot_types::AnalysisReceipt;

use crate::view::section_views;

/// Indented key/value dump for the terminal.
pub(crate) fn render_stream(receipt: &AnalysisReceipt) -> String {
    let mut out = String::new();
    for section in section_views(receipt) {
        out.push_str(section.focus.as_str());
        out.push_str(":\n");
        for (key, value) in &section.scalars {
            out.push_str(&format!("  {key}: {value}\n"));
        }
        for table in &section.tables {
            out.push_str(&format!("  {}:\n", table.caption));
            for row in &table.rows {
                let cells: Vec<String> = table
                    .headers
                    .iter()
                    .zip(row)
                    .map(|(header, value)| {
                        format!("{}={}", header.to_lowercase(), value.one_line())
                    })
                    .collect();
                out.push_str(&format!("    - {}\n", cells.join(", ")));
            }
        }
    }
    for warning in &receipt.warnings {
        out.push_str(&format!("warning: {warning}\n"));
    }
    out
}
