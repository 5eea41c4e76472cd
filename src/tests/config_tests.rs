//! Configuration tests

#[cfg(test)]
mod tests {
    use chrono_tz::Tz;

    use crate::{
        Epoch, EpochPreset, MeltConfig, MeltError, DEFAULT_TIMEZONE, DISCORD_EPOCH_MS,
        HUMAN_FORMAT, TWITTER_EPOCH_MS,
    };

    #[test]
    fn test_default_config() {
        let config = MeltConfig::default();
        assert_eq!(config.epoch(), Epoch::Preset(EpochPreset::Twitter));
        assert_eq!(config.epoch_ms(), TWITTER_EPOCH_MS);
        assert_eq!(config.format(), None);
        assert_eq!(config.timezone(), DEFAULT_TIMEZONE);
        assert_eq!(MeltConfig::builder().build(), config);
    }

    #[test]
    fn test_builder() {
        let config = MeltConfig::builder()
            .epoch(EpochPreset::Discord)
            .format("%^s")
            .timezone(Tz::Europe__Berlin)
            .build();
        assert_eq!(config.epoch_ms(), DISCORD_EPOCH_MS);
        assert_eq!(config.format(), Some("%^s"));
        assert_eq!(config.timezone(), Tz::Europe__Berlin);
    }

    #[test]
    fn test_human_shorthand() {
        let config = MeltConfig::builder().human().build();
        assert_eq!(config.format(), Some(HUMAN_FORMAT));
        assert_eq!(HUMAN_FORMAT, "%Y-%m-%d %H:%M:%S");
    }

    #[test]
    fn test_literal_epoch() {
        let config = MeltConfig::builder().epoch_str("1500000000.5").unwrap().build();
        assert_eq!(config.epoch(), Epoch::Literal(1500000000.5));
        assert_eq!(config.epoch_ms(), 1_500_000_000_500);
    }

    #[test]
    fn test_invalid_epoch() {
        match MeltConfig::builder().epoch_str("yesterday") {
            Err(MeltError::InvalidEpoch { value }) => assert_eq!(value, "yesterday"),
            other => panic!("Expected InvalidEpoch, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_timezone() {
        match MeltConfig::builder().timezone_name("Mars/Olympus_Mons") {
            Err(MeltError::UnknownTimezone { name }) => assert_eq!(name, "Mars/Olympus_Mons"),
            other => panic!("Expected UnknownTimezone, got {other:?}"),
        }
    }
}
