//! I/O boundary traits for testability
//!
//! The wall clock is the only non-deterministic input of a casting. It is
//! abstracted here so services can be tested with a fixed reading.

use chrono::{DateTime, FixedOffset, Local, Utc};

use crate::config::ClockSource;

/// Clock abstraction for testability.
pub trait Clock: Send + Sync {
    /// Current wall-clock time, with the offset it was read in.
    fn now(&self) -> DateTime<FixedOffset>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// System clock reading local or UTC time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock {
    pub source: ClockSource,
}

impl SystemClock {
    pub fn new(source: ClockSource) -> Self {
        Self { source }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        match self.source {
            ClockSource::Local => Local::now().fixed_offset(),
            ClockSource::Utc => Utc::now().fixed_offset(),
        }
    }
}

/// Clock frozen at one instant (`--at`, tests).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
