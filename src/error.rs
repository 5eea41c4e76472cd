use std::io;
use std::num::ParseIntError;

use thiserror::Error;

/// Represents errors that can occur while melting snowflakes
#[derive(Debug, Error)]
pub enum MeltError {
    /// Input token is not an unsigned 64-bit integer
    #[error("Invalid snowflake {input:?}: {source}")]
    InvalidFlake {
        input: String,
        #[source]
        source: ParseIntError,
    },
    /// Epoch is neither a known preset nor a finite number of seconds
    #[error("Invalid epoch {value:?}. Expected `twitter`, `discord` or a UNIX timestamp")]
    InvalidEpoch { value: String },
    /// Timezone name is not in the tz database
    #[error("Unknown timezone {name:?}")]
    UnknownTimezone { name: String },
    /// Format template contains a directive chrono cannot render
    #[error("Invalid format string {template:?}")]
    InvalidFormat { template: String },
    /// Snowflake plus epoch does not fit a representable date
    #[error("Timestamp {timestamp_ms} ms is out of the representable range")]
    TimestampOutOfRange { timestamp_ms: i128 },
    #[error(transparent)]
    Io(#[from] io::Error),
}
