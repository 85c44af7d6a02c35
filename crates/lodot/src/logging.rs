//! Tracing subscriber setup.
//!
//! Logs go to stderr so that stream output on stdout stays clean.
//! `LODOT_LOG` takes any `EnvFilter` directive and wins over `-v` flags.

use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub(crate) const LOG_ENV: &str = "LODOT_LOG";

pub(crate) fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub(crate) fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .try_init()
        .is_ok();

    if installed {
        debug!("lodot started with verbosity level: {verbose}");
        trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
    }
}
