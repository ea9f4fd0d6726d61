//! Process-level glue shared by both binaries.

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use tickcount_core::error::Result;
use tickcount_core::Progress;

use crate::config;
use crate::sink::StdoutSink;
use crate::ticker::Ticker;

/// Diagnostics go to stderr; stdout carries only progress lines.
pub fn init_tracing() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Load a preset and count it out on stdout.
pub async fn run_preset(preset: &str) -> Result<Option<Progress>> {
    let cfg = config::load_from_str(preset)?;
    let mut ticker = Ticker::new(cfg.ticker.settings(), StdoutSink::new())?;
    ticker.run().await
}

pub async fn main_with(preset: &str) -> ExitCode {
    init_tracing();

    match run_preset(preset).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "tickcount failed");
            ExitCode::FAILURE
        }
    }
}
