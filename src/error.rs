//! Error types for engine operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The pacing delay is above the allowed maximum.
    #[error("delay of {delay}ms exceeds the maximum of {max}ms")]
    InvalidDelay {
        /// The requested delay in milliseconds.
        delay: u32,
        /// The largest accepted delay in milliseconds.
        max: u32,
    },
}

/// Errors that can occur when addressing a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Player ids must not be empty.
    #[error("player id is empty")]
    EmptyId,
    /// Player not found.
    #[error("player not found")]
    NotFound,
}

/// Errors raised by a [`Deck`](crate::Deck).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to draw.
    #[error("deck is empty")]
    Empty,
    /// A stacked deck listed the same card twice.
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
}
