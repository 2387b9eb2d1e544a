//! Domain-level error type used across the rules engine and the table service.
//!
//! This error type is transport-agnostic. Service code returns
//! `Result<T, crate::error::AppError>` and converts from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use thiserror::Error;

/// Rule violations and malformed input, each rejected without mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Wrong turn, locked-out seat, invalid combination, or fails to beat the table.
    IllegalPlay,
    /// First play of a round did not include the 3 of diamonds.
    MissingThreeOfDiamonds,
    /// Lead seat passing, or passing on the first turn of a round.
    IllegalPass,
    /// Seat already occupied or out of range.
    InvalidSeatSelection,
    /// Seat index out of range, or no player holds the seat, for a seat-scoped operation.
    UnknownSeat,
    ParseCard,
    /// Operation not allowed in the current match status.
    PhaseMismatch,
    InvalidRoundExtension,
    /// Seat connection status change outside the permitted transitions.
    IllegalStatusTransition,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Table,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input/user validation or game rule violation
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Missing resource in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    /// Validation kind, if this is a validation error.
    pub fn kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            _ => None,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d) | DomainError::NotFound(_, d) => d,
        }
    }
}
