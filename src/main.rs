use std::io::{self, IsTerminal as _};

use clap::Parser;
use melt::{flakes, init_logging, CliArgs, MeltConfig, Melter};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging()?;

    let config = MeltConfig::try_from(&args)?;
    debug!(?config, "resolved configuration");

    let stdin = io::stdin();
    let piped = (!stdin.is_terminal()).then(|| stdin.lock());

    let written = Melter::new(config).run(flakes(args.flakes, piped), io::stdout().lock())?;
    debug!(written, "done");
    Ok(())
}
