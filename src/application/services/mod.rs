//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (Clock) but are themselves
//! concrete structs, not traits.

mod divination;

pub use divination::DivinationService;
