//! tickcount runner library entry.
//!
//! This crate wires the strict config loader, the compiled-in presets, the
//! timer-driven `Ticker`, and its output sinks into the two binaries. It is
//! intended to be consumed by the `src/bin/` binaries and by integration tests.

pub mod app;
pub mod config;
pub mod presets;
pub mod sink;
pub mod ticker;
