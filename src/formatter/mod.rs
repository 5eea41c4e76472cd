//! Rendering melted snowflakes
//!
//! Without a template the instant is printed as fractional seconds since the
//! Unix epoch with millisecond precision. The timezone only matters when a
//! template is given; the absolute instant is the same in every zone.

mod template;

use std::fmt::Write as _;

use chrono::{DateTime, TimeZone, Utc};

pub use template::{
    substitute_fields, DATA_CENTER_DIRECTIVE, ESCAPED_PERCENT, SEQUENCE_DIRECTIVE,
    WORKER_DIRECTIVE,
};

use crate::config::MeltConfig;
use crate::error::MeltError;
use crate::extractor::Melted;

/// Absolute instant of a melted snowflake, `epoch_ms + timestamp_ms`
pub fn absolute_time(melted: &Melted, epoch_ms: i64) -> Result<DateTime<Utc>, MeltError> {
    let timestamp_ms = i128::from(epoch_ms) + i128::from(melted.timestamp_ms);
    i64::try_from(timestamp_ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .ok_or(MeltError::TimestampOutOfRange { timestamp_ms })
}

/// Render a melted snowflake according to `config`
pub fn format_melt(melted: &Melted, config: &MeltConfig) -> Result<String, MeltError> {
    let timestamp = absolute_time(melted, config.epoch_ms())?.with_timezone(&config.timezone());
    match config.format() {
        None => Ok(unix_seconds(&timestamp)),
        Some(template) => render(&timestamp, &substitute_fields(template, melted)),
    }
}

/// Seconds since the Unix epoch with a three digit fraction, e.g. `1490270550.277`
pub fn unix_seconds<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String {
    let ms = timestamp.timestamp_millis();
    let sign = if ms < 0 { "-" } else { "" };
    let ms = ms.unsigned_abs();
    format!("{sign}{}.{:03}", ms / 1000, ms % 1000)
}

/// Run a strftime template, reporting bad directives instead of panicking
fn render<Tz>(timestamp: &DateTime<Tz>, template: &str) -> Result<String, MeltError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::with_capacity(template.len() + 16);
    write!(out, "{}", timestamp.format(template)).map_err(|_| MeltError::InvalidFormat {
        template: template.to_owned(),
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EpochPreset, MeltConfig};

    const TWEET: u64 = 844882040566702080;
    const DISCORD_MESSAGE: u64 = 86841168427495424;

    #[test]
    fn test_unix_seconds() {
        let config = MeltConfig::default();
        assert_eq!(
            format_melt(&Melted::melt(TWEET), &config).unwrap(),
            "1490270550.277"
        );

        let config = MeltConfig::builder().epoch(EpochPreset::Discord).build();
        assert_eq!(
            format_melt(&Melted::melt(DISCORD_MESSAGE), &config).unwrap(),
            "1440774947.984"
        );
    }

    #[test]
    fn test_unix_seconds_keeps_trailing_zeros() {
        let config = MeltConfig::builder().epoch(EpochPreset::Discord).build();
        assert_eq!(format_melt(&Melted::melt(0), &config).unwrap(), "1420070400.000");
    }

    #[test]
    fn test_unix_seconds_before_1970() {
        let config = MeltConfig::builder().epoch_str("-1.5").unwrap().build();
        assert_eq!(format_melt(&Melted::melt(0), &config).unwrap(), "-1.500");
        assert_eq!(
            format_melt(&Melted::melt(250 << 22), &config).unwrap(),
            "-1.250"
        );
    }

    #[test]
    fn test_timezone_does_not_change_unix_seconds() {
        let config = MeltConfig::builder()
            .timezone_name("Asia/Kolkata")
            .unwrap()
            .build();
        assert_eq!(
            format_melt(&Melted::melt(TWEET), &config).unwrap(),
            "1490270550.277"
        );
    }

    #[test]
    fn test_template_in_timezone() {
        let utc = MeltConfig::builder().format("%d.%m.%Y %H:%M:%S").build();
        assert_eq!(
            format_melt(&Melted::melt(TWEET), &utc).unwrap(),
            "23.03.2017 12:02:30"
        );

        let berlin = MeltConfig::builder()
            .format("%d.%m.%Y %H:%M:%S")
            .timezone_name("Europe/Berlin")
            .unwrap()
            .build();
        assert_eq!(
            format_melt(&Melted::melt(TWEET), &berlin).unwrap(),
            "23.03.2017 13:02:30"
        );
    }

    #[test]
    fn test_invalid_template() {
        let config = MeltConfig::builder().format("%Y %Q").build();
        match format_melt(&Melted::melt(TWEET), &config) {
            Err(MeltError::InvalidFormat { template }) => assert_eq!(template, "%Y %Q"),
            other => panic!("Expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range() {
        let melted = Melted::melt(u64::MAX);
        assert!(matches!(
            absolute_time(&melted, i64::MAX),
            Err(MeltError::TimestampOutOfRange { .. })
        ));
    }
}
