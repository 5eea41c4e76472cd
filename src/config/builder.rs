//! MeltConfig builder for constructing configuration

use chrono_tz::Tz;

use super::{Epoch, MeltConfig};
use crate::error::MeltError;

/// Template selected by `-H`
pub const HUMAN_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DEFAULT_TIMEZONE: Tz = Tz::UTC;

/// Builder for MeltConfig
#[derive(Debug, Clone)]
pub struct MeltConfigBuilder {
    pub(super) epoch: Epoch,
    pub(super) format: Option<String>,
    pub(super) timezone: Tz,
}

impl MeltConfigBuilder {
    /// Create a new MeltConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            epoch: Epoch::default(),
            format: None,
            timezone: DEFAULT_TIMEZONE,
        }
    }

    pub fn epoch(mut self, epoch: impl Into<Epoch>) -> Self {
        self.epoch = epoch.into();
        self
    }

    /// Parse the epoch from a preset name or a number of seconds
    pub fn epoch_str(self, epoch: &str) -> Result<Self, MeltError> {
        Ok(self.epoch(epoch.parse::<Epoch>()?))
    }

    /// Render timestamps through a strftime template
    pub fn format(mut self, template: impl Into<String>) -> Self {
        self.format = Some(template.into());
        self
    }

    /// Shorthand for `format(HUMAN_FORMAT)`
    pub fn human(self) -> Self {
        self.format(HUMAN_FORMAT)
    }

    pub fn timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Look the timezone up in the tz database
    pub fn timezone_name(self, name: &str) -> Result<Self, MeltError> {
        let timezone = name.parse::<Tz>().map_err(|_| MeltError::UnknownTimezone {
            name: name.to_owned(),
        })?;
        Ok(self.timezone(timezone))
    }

    /// Build the final MeltConfig
    pub fn build(self) -> MeltConfig {
        MeltConfig::from_builder(self)
    }
}

impl Default for MeltConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
