use std::time::Duration;

use serde::Deserialize;
use tickcount_core::error::{Result, TickerError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TickcountConfig {
    pub version: u32,

    pub ticker: TickerSection,
}

impl TickcountConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TickerError::UnsupportedVersion);
        }

        self.ticker.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TickerSection {
    pub max: u32,

    #[serde(default = "default_period_ms")]
    pub period_ms: u64,
}

impl TickerSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=1_000_000).contains(&self.max) {
            return Err(TickerError::InvalidConfig(
                "ticker.max must be between 1 and 1000000".into(),
            ));
        }
        if !(1..=3_600_000).contains(&self.period_ms) {
            return Err(TickerError::InvalidConfig(
                "ticker.period_ms must be between 1 and 3600000".into(),
            ));
        }
        Ok(())
    }

    pub fn settings(&self) -> TickerSettings {
        TickerSettings {
            max: self.max,
            period: Duration::from_millis(self.period_ms),
        }
    }
}

fn default_period_ms() -> u64 {
    1000
}

/// Validated runtime view of `TickerSection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickerSettings {
    pub max: u32,
    pub period: Duration,
}
