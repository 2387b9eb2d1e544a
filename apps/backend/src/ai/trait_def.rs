//! Automated player trait definition.

use std::fmt;

use crate::domain::auto_play::AutoPlay;
use crate::domain::cards_logic::legal_plays;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{Seat, TableState};
use crate::domain::turns::can_pass;
use crate::domain::Card;
use crate::error::AppError;

/// Errors that can occur during automated decision-making.
#[derive(Debug)]
pub enum AiError {
    /// Player encountered an internal error
    Internal(String),
    /// Player produced, or was left with, no legal move
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::internal(format!("AI error: {err}"))
    }
}

/// What a seat can see when it is on turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnView {
    pub seat: Seat,
    pub hand: Vec<Card>,
    pub table_cards: Vec<Card>,
    pub is_first_turn: bool,
    pub can_pass: bool,
    pub card_counts: [u8; PLAYERS],
}

impl TurnView {
    pub fn for_seat(state: &TableState, seat: Seat) -> Option<Self> {
        let hand = state.seats.get(seat as usize)?.hand.clone();
        Some(Self {
            seat,
            hand,
            table_cards: state.trick.table_cards.clone(),
            is_first_turn: state.trick.is_first_turn,
            can_pass: can_pass(state, seat),
            card_counts: state.card_counts(),
        })
    }

    pub fn is_leading(&self) -> bool {
        self.table_cards.is_empty()
    }

    /// Every play that would be accepted right now, weakest first within a size.
    pub fn legal_plays(&self) -> Vec<Vec<Card>> {
        legal_plays(&self.hand, &self.table_cards, self.is_first_turn)
    }
}

/// Trait for automated players.
///
/// Implementations receive the view of the seat on turn and must choose a
/// legal action: one of `view.legal_plays()`, or a pass when `view.can_pass`.
pub trait AutoPlayer: Send + Sync {
    fn choose_action(&self, view: &TurnView) -> Result<AutoPlay, AiError>;
}
