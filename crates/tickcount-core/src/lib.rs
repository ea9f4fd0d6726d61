//! tickcount core: runtime-free counter primitives, lifecycle states, and errors.
//!
//! This crate defines the bounded counter and the error surface shared by the
//! runner and its binaries. It carries no timer or runtime dependencies so the
//! counting rules can be exercised without a scheduler.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `TickerError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;
pub mod state;

pub use counter::{Counter, Progress};
/// Shared result type.
pub use error::{Result, TickerError};
pub use state::TickerState;
