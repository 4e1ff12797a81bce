//! A bust-at-42 card game engine with optional `no_std` support.
//!
//! Players and the house are dealt from a 28-card half-deck (eight through
//! ace) until their score busts above 42 or lands on it exactly. The
//! [`GameEngine`] owns the deck and the player registry, settles bets against
//! the house, and reports every step to registered callbacks as an
//! [`EngineEvent`]. [`EngineSupport`] layers presentation bookkeeping on top.
//!
//! # Example
//!
//! ```
//! use bust42::{GameEngine, GameOptions, Player};
//!
//! let engine = GameEngine::new(GameOptions::default().with_pacing(false), 42);
//! engine.add_player(Player::new("1", "The Loser", 500)).unwrap();
//! assert!(engine.place_bet("1", 100).unwrap());
//!
//! let hand = engine.deal_player("1", 0).unwrap().unwrap();
//! assert!(hand.score() <= 42);
//!
//! let round = engine.deal_house(0);
//! assert_eq!(round.players.len(), 1);
//! assert_eq!(engine.get_player("1").unwrap().bet(), 0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod support;
mod sync;

// Re-export main types
pub use card::{Card, HALF_DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DealError, DeckError, PlayerError};
pub use event::{CallbackId, EngineCallback, EngineEvent, Participant};
pub use game::GameEngine;
pub use hand::{BUST_LEVEL, Hand, HandStatus};
pub use options::{GameOptions, SupportOptions};
pub use player::Player;
pub use result::{Outcome, PlayerResult, RoundResult};
pub use support::{EngineSupport, PlayerState, ResultSummary, SupportCallback, SupportEvent};
