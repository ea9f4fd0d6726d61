//! tickcount: counts to 50, one line per second.

use std::process::ExitCode;

use tickcount_runner::{app, presets};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    app::main_with(presets::FIFTY).await
}
