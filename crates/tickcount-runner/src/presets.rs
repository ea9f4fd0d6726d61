//! Compiled-in configs. The bound is fixed at build time; nothing is read at runtime.

/// Counts to 10.
pub const TEN: &str = include_str!("../presets/ten.yaml");

/// Counts to 50.
pub const FIFTY: &str = include_str!("../presets/fifty.yaml");
