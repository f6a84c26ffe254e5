//! The eight trigrams (bagua) and their fixed lookup table.

use std::fmt;

use serde::Serialize;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::phase::FivePhase;

/// A single line of a trigram or hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Line {
    /// Yin
    Broken,
    /// Yang
    Solid,
}

impl Line {
    /// The opposite line (yin <-> yang).
    pub fn flipped(self) -> Self {
        match self {
            Line::Broken => Line::Solid,
            Line::Solid => Line::Broken,
        }
    }

    pub fn is_solid(self) -> bool {
        self == Line::Solid
    }
}

/// Elemental nature of a trigram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Element {
    Heaven,
    Lake,
    Fire,
    Thunder,
    Wind,
    Water,
    Mountain,
    Earth,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::Heaven => "Heaven",
            Element::Lake => "Lake",
            Element::Fire => "Fire",
            Element::Thunder => "Thunder",
            Element::Wind => "Wind",
            Element::Water => "Water",
            Element::Mountain => "Mountain",
            Element::Earth => "Earth",
        };
        f.write_str(name)
    }
}

/// Identifier of a trigram, always in 1..=8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TrigramId(u8);

impl TrigramId {
    pub const QIAN: Self = Self(1);
    pub const DUI: Self = Self(2);
    pub const LI: Self = Self(3);
    pub const ZHEN: Self = Self(4);
    pub const XUN: Self = Self(5);
    pub const KAN: Self = Self(6);
    pub const GEN: Self = Self(7);
    pub const KUN: Self = Self(8);

    pub fn new(id: u8) -> DomainResult<Self> {
        match id {
            1..=8 => Ok(Self(id)),
            _ => Err(DomainError::InvalidTrigramId(id)),
        }
    }

    /// Map an arbitrary seed onto 1..=8.
    ///
    /// Uses the Euclidean remainder so negative seeds stay in range;
    /// a remainder of 0 selects the eighth trigram (Kun).
    pub fn from_seed(seed: i128) -> Self {
        match seed.rem_euclid(8) {
            0 => Self::KUN,
            // rem_euclid(8) is in 1..=7 here
            r => Self(r as u8),
        }
    }

    /// Iterate all ids in table order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=8).map(Self)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for TrigramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the eight fixed three-line symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigram {
    pub id: TrigramId,
    /// Pinyin name, e.g. "Qian"
    pub name: &'static str,
    /// Chinese name, e.g. "乾"
    pub display_name: &'static str,
    pub element: Element,
    pub phase: FivePhase,
    /// Lines ordered top, middle, bottom
    pub pattern: [Line; 3],
}

use Line::{Broken as B, Solid as S};

/// The eight trigrams indexed by `id - 1`.
///
/// The id-to-pattern association follows the classical binary ordering
/// (Qian = 1 ... Kun = 8); seed arithmetic relies on it.
pub static TRIGRAMS: [Trigram; 8] = [
    Trigram {
        id: TrigramId::QIAN,
        name: "Qian",
        display_name: "乾",
        element: Element::Heaven,
        phase: FivePhase::Metal,
        pattern: [S, S, S],
    },
    Trigram {
        id: TrigramId::DUI,
        name: "Dui",
        display_name: "兌",
        element: Element::Lake,
        phase: FivePhase::Metal,
        pattern: [B, S, S],
    },
    Trigram {
        id: TrigramId::LI,
        name: "Li",
        display_name: "離",
        element: Element::Fire,
        phase: FivePhase::Fire,
        pattern: [S, B, S],
    },
    Trigram {
        id: TrigramId::ZHEN,
        name: "Zhen",
        display_name: "震",
        element: Element::Thunder,
        phase: FivePhase::Wood,
        pattern: [B, B, S],
    },
    Trigram {
        id: TrigramId::XUN,
        name: "Xun",
        display_name: "巽",
        element: Element::Wind,
        phase: FivePhase::Wood,
        pattern: [S, S, B],
    },
    Trigram {
        id: TrigramId::KAN,
        name: "Kan",
        display_name: "坎",
        element: Element::Water,
        phase: FivePhase::Water,
        pattern: [B, S, B],
    },
    Trigram {
        id: TrigramId::GEN,
        name: "Gen",
        display_name: "艮",
        element: Element::Mountain,
        phase: FivePhase::Earth,
        pattern: [S, B, B],
    },
    Trigram {
        id: TrigramId::KUN,
        name: "Kun",
        display_name: "坤",
        element: Element::Earth,
        phase: FivePhase::Earth,
        pattern: [B, B, B],
    },
];

impl Trigram {
    /// Look up a trigram by validated id.
    pub fn get(id: TrigramId) -> &'static Trigram {
        &TRIGRAMS[id.index()]
    }

    /// Look up a trigram by raw number, rejecting anything outside 1..=8.
    pub fn by_number(id: u8) -> DomainResult<&'static Trigram> {
        TrigramId::new(id).map(Self::get)
    }

    /// Find the trigram with the given (top, middle, bottom) pattern.
    pub fn from_pattern(pattern: [Line; 3]) -> Option<&'static Trigram> {
        TRIGRAMS.iter().find(|t| t.pattern == pattern)
    }

    /// Pattern as a 3-bit number, solid = 1, top line most significant.
    pub fn bits(&self) -> u8 {
        self.pattern
            .iter()
            .fold(0, |acc, line| (acc << 1) | u8::from(line.is_solid()))
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.name, self.display_name, self.element)
    }
}

/// Check that the table is ordered by id and covers every 3-bit pattern once.
///
/// Pattern identification falls back to Kun on a miss; this check makes that
/// branch unreachable.
pub fn validate_table() -> DomainResult<()> {
    let mut seen = [false; 8];
    for (index, trigram) in TRIGRAMS.iter().enumerate() {
        if trigram.id.index() != index {
            return Err(DomainError::InvalidTrigramTable {
                message: format!("{} stored at position {}", trigram.name, index + 1),
            });
        }
        let bits = usize::from(trigram.bits());
        if seen[bits] {
            return Err(DomainError::InvalidTrigramTable {
                message: format!("duplicate pattern {:03b} at {}", bits, trigram.name),
            });
        }
        seen[bits] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_builtin_table_when_validating_then_succeeds() {
        assert_eq!(validate_table(), Ok(()));
    }

    #[test]
    fn given_out_of_range_number_when_looking_up_then_returns_error() {
        assert_eq!(
            Trigram::by_number(0).unwrap_err(),
            DomainError::InvalidTrigramId(0)
        );
        assert_eq!(
            Trigram::by_number(9).unwrap_err(),
            DomainError::InvalidTrigramId(9)
        );
    }

    #[test]
    fn given_each_pattern_when_looking_up_then_finds_matching_id() {
        for trigram in &TRIGRAMS {
            let found = Trigram::from_pattern(trigram.pattern).expect("pattern present");
            assert_eq!(found.id, trigram.id);
        }
    }

    #[test]
    fn given_negative_seed_when_mapping_then_stays_in_range() {
        assert_eq!(TrigramId::from_seed(-1), TrigramId::GEN);
        assert_eq!(TrigramId::from_seed(-8), TrigramId::KUN);
        assert_eq!(TrigramId::from_seed(0), TrigramId::KUN);
        assert_eq!(TrigramId::from_seed(9), TrigramId::QIAN);
    }

    #[test]
    fn test_line_flipped() {
        assert_eq!(Line::Solid.flipped(), Line::Broken);
        assert_eq!(Line::Broken.flipped(), Line::Solid);
    }

    #[test]
    fn test_bits() {
        assert_eq!(Trigram::get(TrigramId::QIAN).bits(), 0b111);
        assert_eq!(Trigram::get(TrigramId::ZHEN).bits(), 0b001);
        assert_eq!(Trigram::get(TrigramId::KUN).bits(), 0b000);
    }
}
