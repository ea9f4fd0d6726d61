//! Bounded monotonic counter.
//!
//! The value starts at 0, moves up by exactly one per `advance`, and never
//! leaves `[0, max]`.

use std::fmt;

use crate::error::{Result, TickerError};

/// One progress report: the value right after an increment, and the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub value: u32,
    pub max: u32,
}

impl Progress {
    /// True on the report that reached the bound.
    pub fn is_final(&self) -> bool {
        self.value >= self.max
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Counting {}/{}", self.value, self.max)
    }
}

#[derive(Debug, Clone)]
pub struct Counter {
    value: u32,
    max: u32,
}

impl Counter {
    /// `max` must be at least 1; a zero bound would be overshot by the first tick.
    pub fn new(max: u32) -> Result<Self> {
        if max == 0 {
            return Err(TickerError::InvalidConfig("max must be at least 1".into()));
        }
        Ok(Self { value: 0, max })
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_complete(&self) -> bool {
        self.value >= self.max
    }

    /// Increment by one and report. Returns `None` once the bound is reached,
    /// leaving the value unchanged.
    pub fn advance(&mut self) -> Option<Progress> {
        if self.is_complete() {
            return None;
        }
        self.value += 1;
        Some(Progress {
            value: self.value,
            max: self.max,
        })
    }
}
