//! Progress spinner for the analysis run.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::time::Duration;

/// A progress indicator that wraps indicatif.
pub(crate) struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    /// The spinner is only shown if `enabled` is true, stdout is a TTY, and
    /// neither `NO_COLOR` nor `LODOT_NO_PROGRESS` is set.
    pub(crate) fn new(enabled: bool) -> Self {
        let bar = (enabled && is_interactive()).then(|| {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
                pb.set_style(
                    style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "]),
                );
            }
            pb.enable_steady_tick(Duration::from_millis(80));
            pb
        });

        Self { bar }
    }

    pub(crate) fn set_message(&self, msg: impl Into<String>) {
        if let Some(bar) = &self.bar {
            bar.set_message(msg.into());
        }
    }

    pub(crate) fn finish_and_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        self.finish_and_clear();
    }
}

fn is_interactive() -> bool {
    std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none()
        && std::env::var_os("LODOT_NO_PROGRESS").is_none()
}
