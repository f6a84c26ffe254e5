//! Domain layer: trigram table and divination logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading,
//! no clock reads).

pub mod divination;
pub mod error;
pub mod hexagram;
pub mod names;
pub mod numerology;
pub mod phase;
pub mod trigram;

pub use divination::{divine, BodyUse, DivinationResult, Seeds};
pub use error::{DomainError, DomainResult};
pub use hexagram::{compose, identify, nuclear_lines, Hexagram, Lines, MovingLine, TrigramPair};
pub use names::HexagramName;
pub use numerology::score;
pub use phase::{FivePhase, Relation};
pub use trigram::{validate_table, Element, Line, Trigram, TrigramId, TRIGRAMS};
