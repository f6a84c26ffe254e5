//! Plum Blossom (Meihua) casting: time- and input-seeded hexagrams.

use chrono::{DateTime, FixedOffset, Timelike};
use serde::Serialize;

use crate::domain::hexagram::{Hexagram, MovingLine};
use crate::domain::numerology::score;
use crate::domain::phase::Relation;
use crate::domain::trigram::{Trigram, TrigramId};

/// Outcome of one casting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivinationResult {
    pub original: Hexagram,
    pub nuclear: Hexagram,
    pub changed: Hexagram,
    pub moving_line: MovingLine,
    pub timestamp: DateTime<FixedOffset>,
    pub identifier: String,
    pub user_number: i64,
}

/// Body (ti) and use (yong) trigrams of the original hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyUse {
    pub ti: &'static Trigram,
    pub yong: &'static Trigram,
    pub relation: Relation,
}

/// Seed values derived from the clock and the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seeds {
    pub upper: TrigramId,
    pub lower: TrigramId,
    pub moving_line: MovingLine,
}

impl Seeds {
    /// Derive trigram ids and moving line.
    ///
    /// upper  = seconds + score + number           (mod 8, 0 -> 8)
    /// lower  = seconds + minutes + score + number (mod 8, 0 -> 8)
    /// moving = seconds + minutes + score + number (mod 6, 0 -> 6)
    ///
    /// Sums are taken in i128 so no i64 number can overflow.
    pub fn derive(seconds: u32, minutes: u32, value: u64, user_number: i64) -> Self {
        let base = i128::from(seconds) + i128::from(value) + i128::from(user_number);
        let full = base + i128::from(minutes);
        Self {
            upper: TrigramId::from_seed(base),
            lower: TrigramId::from_seed(full),
            moving_line: MovingLine::from_seed(full),
        }
    }
}

/// Cast the hexagrams for `identifier` and `user_number` at `now`.
///
/// Pure given the clock reading; callers validate the number beforehand.
pub fn divine(identifier: &str, user_number: i64, now: DateTime<FixedOffset>) -> DivinationResult {
    let value = score(identifier);
    let seeds = Seeds::derive(now.second(), now.minute(), value, user_number);

    let original = Hexagram::from_trigrams(seeds.upper, seeds.lower);
    let nuclear = original.nuclear();
    let changed = original.changed(seeds.moving_line);

    DivinationResult {
        original,
        nuclear,
        changed,
        moving_line: seeds.moving_line,
        timestamp: now,
        identifier: identifier.to_string(),
        user_number,
    }
}

impl DivinationResult {
    /// The trigram holding the moving line is use, the other is body.
    pub fn body_use(&self) -> BodyUse {
        let (ti, yong) = if self.moving_line.in_upper() {
            (self.original.lower(), self.original.upper())
        } else {
            (self.original.upper(), self.original.lower())
        };
        BodyUse {
            ti,
            yong,
            relation: Relation::between(ti.phase, yong.phase),
        }
    }
}
