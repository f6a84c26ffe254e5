//! Application layer: services and use cases
//!
//! This layer validates raw input, orchestrates domain logic and depends on
//! I/O boundary traits.

pub mod error;
pub mod error_ext;
pub mod input;
pub mod interpretation;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use input::{parse_timestamp, parse_user_number};
pub use interpretation::{HexagramSummary, InterpretationRequest};
