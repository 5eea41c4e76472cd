//! # melt
//!
//! Break snowflake IDs back into their parts and print when they were made.
//!
//! A snowflake packs a 41-bit millisecond timestamp, a 5-bit data center, a
//! 5-bit worker and a 12-bit sequence into one 64-bit integer. The timestamp
//! is relative to an epoch (Twitter's by default, or Discord's, or any UNIX
//! time).
//!
//! ```
//! use melt::{format_melt, EpochPreset, MeltConfig, Melted};
//!
//! let melted = Melted::melt(175928847299117063);
//! assert_eq!(melted.timestamp_ms, 175928847299117063 >> 22);
//!
//! let config = MeltConfig::builder()
//!     .epoch(EpochPreset::Discord)
//!     .format("%Y-%m-%d %H:%M:%S worker %^w")
//!     .build();
//! let line = format_melt(&melted, &config).unwrap();
//! assert!(line.starts_with("2016-04-30"));
//! ```

#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod error;
mod extractor;
pub mod formatter;
pub mod input;
mod melter;
pub mod telemetry;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use cli::{CliArgs, DiscordFormat};
pub use config::{
    Epoch, EpochPreset, MeltConfig, MeltConfigBuilder, DEFAULT_TIMEZONE, DISCORD_EPOCH_MS,
    HUMAN_FORMAT, TWITTER_EPOCH_MS,
};
pub use error::MeltError;
pub use extractor::{
    FlakeExtractor, Melted, DATA_CENTER_BITS, MAX_DATA_CENTER, MAX_SEQUENCE, MAX_WORKER,
    SEQUENCE_BITS, TIMESTAMP_BITS, WORKER_BITS,
};
pub use formatter::format_melt;
pub use input::{flakes, parse_flake};
pub use melter::Melter;
pub use telemetry::init_logging;
