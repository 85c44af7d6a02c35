use anyhow::Result;
use lodot_analysis::default_module;
use lodot_types::Focus;

pub(crate) fn handle() -> Result<()> {
    print!("{}", catalog());
    Ok(())
}

/// One line per analysis: focus key, padded, then its description.
pub(crate) fn catalog() -> String {
    Focus::all()
        .iter()
        .map(|focus| {
            let module = default_module(*focus);
            format!("{:<14}{}\n", focus.as_str(), module.description())
        })
        .collect()
}
