//! The decode, format, print loop

use std::io::{self, Write};

use tracing::{debug, trace};

use crate::config::MeltConfig;
use crate::error::MeltError;
use crate::extractor::Melted;
use crate::formatter::format_melt;

/// Turns snowflakes into output lines using one fixed configuration
#[derive(Debug, Clone)]
pub struct Melter {
    config: MeltConfig,
}

impl Melter {
    pub fn new(config: MeltConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MeltConfig {
        &self.config
    }

    /// Melt a single snowflake into its output line (without newline)
    pub fn melt(&self, id: u64) -> Result<String, MeltError> {
        let melted = Melted::melt(id);
        debug!(
            id,
            timestamp_ms = melted.timestamp_ms,
            data_center = melted.data_center,
            worker = melted.worker,
            sequence = melted.sequence,
            "melted snowflake"
        );
        format_melt(&melted, &self.config)
    }

    /// Melt every snowflake in order, writing one line each.
    ///
    /// Stops at the first error; lines already written stay written. Each line
    /// is flushed before the next snowflake is pulled. A closed output pipe
    /// ends the run quietly. Returns the number of lines written.
    pub fn run<I, W>(&self, flakes: I, mut out: W) -> Result<usize, MeltError>
    where
        I: IntoIterator<Item = Result<u64, MeltError>>,
        W: Write,
    {
        let mut written = 0;
        for flake in flakes {
            let line = self.melt(flake?)?;
            match writeln!(out, "{line}").and_then(|()| out.flush()) {
                Ok(()) => written += 1,
                Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
                    debug!(written, "output closed");
                    break;
                }
                Err(err) => return Err(err.into()),
            }
            trace!(written, "line written");
        }
        Ok(written)
    }
}
