//! Hexagram construction and trigram re-identification.

use std::fmt;

use serde::Serialize;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::names::{self, HexagramName};
use crate::domain::trigram::{Line, Trigram, TrigramId};

/// Six lines, index 0 = bottom, index 5 = top.
pub type Lines = [Line; 6];

/// Upper and lower trigram of a hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrigramPair {
    pub upper: TrigramId,
    pub lower: TrigramId,
}

/// Stack two trigrams into six lines.
///
/// Trigram patterns are stored top-first, hexagram lines bottom-first, so
/// each pattern is reversed: lower fills positions 0-2, upper 3-5.
pub fn compose(upper: TrigramId, lower: TrigramId) -> Lines {
    let [u_top, u_mid, u_bot] = Trigram::get(upper).pattern;
    let [l_top, l_mid, l_bot] = Trigram::get(lower).pattern;
    [l_bot, l_mid, l_top, u_bot, u_mid, u_top]
}

/// Recover the upper and lower trigram from six lines.
pub fn identify(lines: &Lines) -> TrigramPair {
    TrigramPair {
        upper: identify_group([lines[3], lines[4], lines[5]]),
        lower: identify_group([lines[0], lines[1], lines[2]]),
    }
}

/// Identify three bottom-first lines. The table covers all eight patterns
/// (see `validate_table`), so the Kun fallback is never taken.
fn identify_group(group: [Line; 3]) -> TrigramId {
    let pattern = [group[2], group[1], group[0]];
    match Trigram::from_pattern(pattern) {
        Some(trigram) => trigram.id,
        None => {
            debug_assert!(false, "trigram table misses pattern {pattern:?}");
            TrigramId::KUN
        }
    }
}

/// Regroup the middle four lines: lines 2-4 form the new lower trigram,
/// lines 3-5 the new upper.
pub fn nuclear_lines(lines: &Lines) -> Lines {
    [lines[1], lines[2], lines[3], lines[2], lines[3], lines[4]]
}

/// Position of the moving line, 1 = bottom, 6 = top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MovingLine(u8);

impl MovingLine {
    pub fn new(line: u8) -> DomainResult<Self> {
        match line {
            1..=6 => Ok(Self(line)),
            _ => Err(DomainError::InvalidMovingLine(line)),
        }
    }

    /// Map an arbitrary seed onto 1..=6; a remainder of 0 selects line 6.
    pub fn from_seed(seed: i128) -> Self {
        match seed.rem_euclid(6) {
            0 => Self(6),
            r => Self(r as u8),
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// 0-based index into `Lines`.
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Whether the line sits in the upper trigram.
    pub const fn in_upper(self) -> bool {
        self.0 > 3
    }
}

impl fmt::Display for MovingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Six-line figure with its trigram decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hexagram {
    upper_trigram_id: TrigramId,
    lower_trigram_id: TrigramId,
    lines: Lines,
}

impl Hexagram {
    pub fn from_trigrams(upper: TrigramId, lower: TrigramId) -> Self {
        Self {
            upper_trigram_id: upper,
            lower_trigram_id: lower,
            lines: compose(upper, lower),
        }
    }

    /// Build from raw lines, deriving trigram ids by identification.
    pub fn from_lines(lines: Lines) -> Self {
        let TrigramPair { upper, lower } = identify(&lines);
        Self {
            upper_trigram_id: upper,
            lower_trigram_id: lower,
            lines,
        }
    }

    /// Nuclear (hu) hexagram: a function of the lines only.
    pub fn nuclear(&self) -> Self {
        Self::from_lines(nuclear_lines(&self.lines))
    }

    /// Changed (bian) hexagram: the moving line inverted.
    pub fn changed(&self, moving: MovingLine) -> Self {
        let mut lines = self.lines;
        lines[moving.index()] = lines[moving.index()].flipped();
        Self::from_lines(lines)
    }

    pub fn upper_id(&self) -> TrigramId {
        self.upper_trigram_id
    }

    pub fn lower_id(&self) -> TrigramId {
        self.lower_trigram_id
    }

    pub fn upper(&self) -> &'static Trigram {
        Trigram::get(self.upper_trigram_id)
    }

    pub fn lower(&self) -> &'static Trigram {
        Trigram::get(self.lower_trigram_id)
    }

    pub fn lines(&self) -> &Lines {
        &self.lines
    }

    pub fn name(&self) -> HexagramName {
        names::lookup(self.upper_trigram_id, self.lower_trigram_id)
    }
}

impl fmt::Display for Hexagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        write!(
            f,
            "#{} {} {} ({} over {})",
            name.number,
            name.name,
            name.display_name,
            self.upper().element,
            self.lower().element
        )
    }
}
