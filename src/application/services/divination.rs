//! Divination service
//!
//! Reads the injected clock, validates raw input and runs the domain casting.

use std::sync::Arc;

use tracing::debug;

use crate::application::input::parse_user_number;
use crate::application::ApplicationResult;
use crate::domain::{divine, score, DivinationResult};
use crate::infrastructure::traits::Clock;

/// Service for casting hexagrams at the current time.
pub struct DivinationService {
    clock: Arc<dyn Clock>,
}

impl DivinationService {
    /// Create a new divination service.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Cast for an already validated number.
    pub fn cast(&self, identifier: &str, user_number: i64) -> DivinationResult {
        let now = self.clock.now();
        debug!(
            "cast: identifier={:?} number={} score={} at={}",
            identifier,
            user_number,
            score(identifier),
            now.to_rfc3339()
        );

        let result = divine(identifier, user_number, now);
        debug!(
            "cast: original={}/{} nuclear={}/{} changed={}/{} moving={}",
            result.original.upper_id(),
            result.original.lower_id(),
            result.nuclear.upper_id(),
            result.nuclear.lower_id(),
            result.changed.upper_id(),
            result.changed.lower_id(),
            result.moving_line
        );
        result
    }

    /// Validate the raw number, then cast.
    ///
    /// A non-numeric number is rejected before the clock is read.
    pub fn cast_raw(&self, identifier: &str, raw_number: &str) -> ApplicationResult<DivinationResult> {
        let user_number = parse_user_number(raw_number)?;
        Ok(self.cast(identifier, user_number))
    }
}
