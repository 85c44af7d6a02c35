pub(crate) mod analyze;
pub(crate) mod completions;
pub(crate) mod init;
pub(crate) mod modules;

use anyhow::Result;
use lodot_config as cli;

pub(crate) fn dispatch(cli: cli::Cli) -> Result<()> {
    match cli.command {
        Some(cli::Commands::Init(args)) => init::handle(args),
        Some(cli::Commands::Modules) => modules::handle(),
        Some(cli::Commands::Completions(args)) => completions::handle(args),
        None => analyze::handle(&cli.analyze, &cli.global, cli.profile.as_deref()),
    }
}
