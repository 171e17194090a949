//! Domain-level error type returned by every engine operation.
//!
//! `Validation` errors are recoverable: nothing was mutated and the caller is
//! expected to obtain a different intent from the seat and retry.
//! `DeckIntegrity` marks a state that should be unreachable (a bad deck or a
//! lost card) and indicates an engine defect rather than a player mistake.

use thiserror::Error;

/// Reason a player intent was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValidationKind {
    InvalidPassCount,
    DuplicateCardInPass,
    CardNotInHand,
    MustLeadTwoOfClubs,
    PointCardNotYetAllowed,
    MustFollowSuit,
    OutOfTurn,
    PhaseMismatch,
    PassAlreadySubmitted,
    InvalidSeat,
    ParseCard,
}

impl ValidationKind {
    /// Stable machine-readable code, suitable for a shell to map to a prompt.
    pub fn code(self) -> &'static str {
        match self {
            ValidationKind::InvalidPassCount => "INVALID_PASS_COUNT",
            ValidationKind::DuplicateCardInPass => "DUPLICATE_CARD_IN_PASS",
            ValidationKind::CardNotInHand => "CARD_NOT_IN_HAND",
            ValidationKind::MustLeadTwoOfClubs => "MUST_LEAD_TWO_OF_CLUBS",
            ValidationKind::PointCardNotYetAllowed => "POINT_CARD_NOT_YET_ALLOWED",
            ValidationKind::MustFollowSuit => "MUST_FOLLOW_SUIT",
            ValidationKind::OutOfTurn => "OUT_OF_TURN",
            ValidationKind::PhaseMismatch => "PHASE_MISMATCH",
            ValidationKind::PassAlreadySubmitted => "PASS_ALREADY_SUBMITTED",
            ValidationKind::InvalidSeat => "INVALID_SEAT",
            ValidationKind::ParseCard => "PARSE_CARD",
        }
    }
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Player intent violates a rule; state is unchanged
    #[error("validation error {code}: {1}", code = .0.code())]
    Validation(ValidationKind, String),
    /// Card accounting no longer adds up; engine defect
    #[error("deck integrity violation: {0}")]
    DeckIntegrity(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn deck_integrity(detail: impl Into<String>) -> Self {
        Self::DeckIntegrity(detail.into())
    }

    /// The rejection reason, if this is a validation error.
    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            DomainError::DeckIntegrity(_) => None,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        matches!(self, DomainError::Validation(..))
    }
}
