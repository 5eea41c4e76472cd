//! Reference points for the timestamp embedded in a snowflake

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::MeltError;

/// Twitter's epoch, 2010-11-04 01:42:54.657 UTC
pub const TWITTER_EPOCH_MS: i64 = 1_288_834_974_657;
/// Discord's epoch, 2015-01-01 00:00:00 UTC
pub const DISCORD_EPOCH_MS: i64 = 1_420_070_400_000;

/// Named presets, keyed by lower-case name
static PRESETS: Lazy<HashMap<&'static str, EpochPreset>> = Lazy::new(|| {
    EpochPreset::ALL
        .into_iter()
        .map(|preset| (preset.name(), preset))
        .collect()
});

/// Well-known snowflake epochs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EpochPreset {
    Twitter,
    Discord,
}

impl EpochPreset {
    pub const ALL: [EpochPreset; 2] = [EpochPreset::Twitter, EpochPreset::Discord];

    pub const fn name(self) -> &'static str {
        match self {
            EpochPreset::Twitter => "twitter",
            EpochPreset::Discord => "discord",
        }
    }

    #[inline(always)]
    pub const fn millis(self) -> i64 {
        match self {
            EpochPreset::Twitter => TWITTER_EPOCH_MS,
            EpochPreset::Discord => DISCORD_EPOCH_MS,
        }
    }

    /// Look a preset up by name, ignoring case
    pub fn lookup(name: &str) -> Option<Self> {
        PRESETS.get(name.to_ascii_lowercase().as_str()).copied()
    }
}

/// Time zero for a snowflake's relative timestamp.
///
/// Either a named preset or a literal number of seconds since the Unix epoch.
/// Literals are rounded to the nearest millisecond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Epoch {
    Preset(EpochPreset),
    Literal(f64),
}

impl Epoch {
    /// Milliseconds since the Unix epoch
    pub fn millis(&self) -> i64 {
        match *self {
            Epoch::Preset(preset) => preset.millis(),
            Epoch::Literal(seconds) => (seconds * 1000.0).round() as i64,
        }
    }
}

impl Default for Epoch {
    fn default() -> Self {
        Epoch::Preset(EpochPreset::Twitter)
    }
}

impl From<EpochPreset> for Epoch {
    fn from(preset: EpochPreset) -> Self {
        Epoch::Preset(preset)
    }
}

impl FromStr for Epoch {
    type Err = MeltError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(preset) = EpochPreset::lookup(s) {
            return Ok(Epoch::Preset(preset));
        }
        let invalid = || MeltError::InvalidEpoch {
            value: s.to_owned(),
        };
        let seconds: f64 = s.parse().map_err(|_| invalid())?;
        // Must survive the conversion to whole milliseconds in an i64
        if !seconds.is_finite() || (seconds * 1000.0).abs() >= i64::MAX as f64 {
            return Err(invalid());
        }
        Ok(Epoch::Literal(seconds))
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Epoch::Preset(preset) => f.write_str(preset.name()),
            Epoch::Literal(seconds) => write!(f, "{seconds}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!("twitter".parse::<Epoch>().unwrap().millis(), 1288834974657);
        assert_eq!("discord".parse::<Epoch>().unwrap().millis(), 1420070400000);
        assert_eq!(
            "Discord".parse::<Epoch>().unwrap(),
            Epoch::Preset(EpochPreset::Discord)
        );
        assert_eq!(
            "TWITTER".parse::<Epoch>().unwrap(),
            Epoch::Preset(EpochPreset::Twitter)
        );
    }

    #[test]
    fn test_literal() {
        let epoch: Epoch = "1420070400".parse().unwrap();
        assert_eq!(epoch, Epoch::Literal(1420070400.0));
        assert_eq!(epoch.millis(), DISCORD_EPOCH_MS);

        let epoch: Epoch = "1288834974.657".parse().unwrap();
        assert_eq!(epoch.millis(), TWITTER_EPOCH_MS);

        assert_eq!("0".parse::<Epoch>().unwrap().millis(), 0);
        assert_eq!("-1.5".parse::<Epoch>().unwrap().millis(), -1500);
    }

    #[test]
    fn test_invalid() {
        for value in ["", "slack", "NaN", "inf", "1e300", "12abc"] {
            match value.parse::<Epoch>() {
                Err(MeltError::InvalidEpoch { .. }) => {}
                other => panic!("Expected InvalidEpoch for {value:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_default_is_twitter() {
        assert_eq!(Epoch::default(), Epoch::Preset(EpochPreset::Twitter));
        assert_eq!(Epoch::default().to_string(), "twitter");
    }
}
