//! Notifications emitted by the engine and the callback registry behind them.

use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::card::Card;
use crate::game::GameEngine;
use crate::sync::Mutex;

/// Someone who can be dealt cards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Participant {
    /// A registered player, by id.
    Player(String),
    /// The house.
    House,
}

impl Participant {
    /// Returns the player id, or `None` for the house.
    #[must_use]
    pub fn player_id(&self) -> Option<&str> {
        match self {
            Self::Player(id) => Some(id.as_str()),
            Self::House => None,
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player(id) => write!(f, "player {id}"),
            Self::House => f.write_str("house"),
        }
    }
}

/// A notification from the engine.
///
/// Events fire synchronously, in registration order, after the state change
/// that triggered them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A card was dealt without busting.
    NextCard {
        /// Who received the card.
        participant: Participant,
        /// The dealt card.
        card: Card,
        /// Running score including this card.
        score: u8,
    },
    /// A card pushed the score over the bust level.
    BustCard {
        /// Who received the card.
        participant: Participant,
        /// The busting card.
        card: Card,
    },
    /// A player's deal finished.
    Result {
        /// The player that was dealt.
        player_id: String,
        /// Final pre-bust score.
        score: u8,
    },
    /// The house's deal finished and every player has been settled.
    HouseResult {
        /// Final pre-bust house score.
        score: u8,
    },
}

/// Callback signature for engine notifications.
pub type EngineCallback = dyn Fn(&GameEngine, &EngineEvent) + Send + Sync;

/// Handle returned when registering a callback, used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackId(u32);

/// Ordered list of registered callbacks.
pub(crate) struct Callbacks<F: ?Sized> {
    next_id: AtomicU32,
    entries: Mutex<Vec<(CallbackId, Arc<F>)>>,
}

impl<F: ?Sized> Callbacks<F> {
    pub(crate) const fn new() -> Self {
        Self {
            next_id: AtomicU32::new(0),
            entries: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn add(&self, callback: Arc<F>) -> CallbackId {
        let id = CallbackId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.entries.lock().push((id, callback));
        id
    }

    pub(crate) fn remove(&self, id: CallbackId) -> bool {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|(entry, _)| *entry != id);
        entries.len() != before
    }

    /// Copies the current callbacks so they can run without the lock held.
    pub(crate) fn snapshot(&self) -> Vec<Arc<F>> {
        self.entries
            .lock()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.lock().len()
    }
}
