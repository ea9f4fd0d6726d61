//! Top-level facade crate for tickcount.
//!
//! Re-exports the core counter types and the runner library so users can depend on a single crate.

pub mod core {
    pub use tickcount_core::*;
}

pub mod runner {
    pub use tickcount_runner::*;
}
