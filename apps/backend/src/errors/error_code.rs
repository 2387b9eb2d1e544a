//! Error codes for the Big Two table engine.
//!
//! This module defines all error codes surfaced to callers of the table
//! service. Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE.

use core::fmt;

use crate::errors::domain::ValidationKind;

/// Centralized error codes.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that a
/// transport layer can put on the wire unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Game rules
    /// Wrong turn, locked-out seat, invalid combination, or does not beat the table
    IllegalPlay,
    /// First play of the round must include the 3 of diamonds
    MissingThreeOfDiamonds,
    /// Lead seat or opening seat tried to pass
    IllegalPass,
    /// Seat occupied or out of range
    InvalidSeatSelection,
    /// Seat index out of range
    UnknownSeat,
    /// Card token could not be parsed
    ParseCard,
    /// Operation not allowed in the current match status
    PhaseMismatch,
    /// Round extension must add at least one round
    InvalidRoundExtension,
    /// Seat status change not permitted
    IllegalStatusTransition,
    /// General validation error
    ValidationError,

    // Resources
    /// Table not found
    TableNotFound,
    /// Table actor is no longer running
    TableClosed,

    // System
    /// Configuration error
    ConfigError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IllegalPlay => "ILLEGAL_PLAY",
            Self::MissingThreeOfDiamonds => "MISSING_THREE_OF_DIAMONDS",
            Self::IllegalPass => "ILLEGAL_PASS",
            Self::InvalidSeatSelection => "INVALID_SEAT_SELECTION",
            Self::UnknownSeat => "UNKNOWN_SEAT",
            Self::ParseCard => "PARSE_CARD",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::InvalidRoundExtension => "INVALID_ROUND_EXTENSION",
            Self::IllegalStatusTransition => "ILLEGAL_STATUS_TRANSITION",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::TableNotFound => "TABLE_NOT_FOUND",
            Self::TableClosed => "TABLE_CLOSED",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&ValidationKind> for ErrorCode {
    fn from(kind: &ValidationKind) -> Self {
        match kind {
            ValidationKind::IllegalPlay => Self::IllegalPlay,
            ValidationKind::MissingThreeOfDiamonds => Self::MissingThreeOfDiamonds,
            ValidationKind::IllegalPass => Self::IllegalPass,
            ValidationKind::InvalidSeatSelection => Self::InvalidSeatSelection,
            ValidationKind::UnknownSeat => Self::UnknownSeat,
            ValidationKind::ParseCard => Self::ParseCard,
            ValidationKind::PhaseMismatch => Self::PhaseMismatch,
            ValidationKind::InvalidRoundExtension => Self::InvalidRoundExtension,
            ValidationKind::IllegalStatusTransition => Self::IllegalStatusTransition,
            ValidationKind::Other(_) => Self::ValidationError,
        }
    }
}
