//! Configuration for rendering melted snowflakes

mod builder;
mod epoch;

use chrono_tz::Tz;

pub use builder::{MeltConfigBuilder, DEFAULT_TIMEZONE, HUMAN_FORMAT};
pub use epoch::{Epoch, EpochPreset, DISCORD_EPOCH_MS, TWITTER_EPOCH_MS};

/// How snowflakes are turned into output lines.
///
/// Built once from the command line and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MeltConfig {
    epoch: Epoch,
    epoch_ms: i64,
    format: Option<String>,
    timezone: Tz,
}

impl MeltConfig {
    fn new(epoch: Epoch, format: Option<String>, timezone: Tz) -> Self {
        Self {
            epoch,
            epoch_ms: epoch.millis(),
            format,
            timezone,
        }
    }

    /// Create config from builder
    pub(crate) fn from_builder(b: MeltConfigBuilder) -> Self {
        Self::new(b.epoch, b.format, b.timezone)
    }

    /// Create a new configuration builder
    pub fn builder() -> MeltConfigBuilder {
        MeltConfigBuilder::new()
    }

    #[inline(always)]
    pub const fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Epoch in milliseconds since the Unix epoch
    #[inline(always)]
    pub const fn epoch_ms(&self) -> i64 {
        self.epoch_ms
    }

    /// Format template, `None` for fractional UNIX seconds
    #[inline(always)]
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    #[inline(always)]
    pub const fn timezone(&self) -> Tz {
        self.timezone
    }
}

impl Default for MeltConfig {
    fn default() -> Self {
        Self::new(Epoch::default(), None, DEFAULT_TIMEZONE)
    }
}
