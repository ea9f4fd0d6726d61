//! Ticker config loader (strict parsing).

pub mod schema;

use tickcount_core::error::{Result, TickerError};

pub use schema::{TickcountConfig, TickerSection, TickerSettings};

pub fn load_from_str(s: &str) -> Result<TickcountConfig> {
    let cfg: TickcountConfig = serde_yaml::from_str(s)
        .map_err(|e| TickerError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
