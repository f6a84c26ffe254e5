//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the divination rules.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid trigram id: {0} (expected 1-8)")]
    InvalidTrigramId(u8),

    #[error("invalid moving line: {0} (expected 1-6)")]
    InvalidMovingLine(u8),

    #[error("invalid trigram table: {message}")]
    InvalidTrigramTable { message: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
