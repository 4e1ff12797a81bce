//! Game engine and state management.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::PlayerError;
use crate::event::{CallbackId, Callbacks, EngineCallback, EngineEvent};
use crate::options::GameOptions;
use crate::player::Player;
use crate::sync::Mutex;

mod bet;
mod dealer;

/// A bust-at-42 game engine that owns the deck, the player registry and the
/// notification sinks.
///
/// Every method takes `&self`; state lives behind internal locks that are
/// never held while callbacks run, so a callback may query the engine it was
/// called from. Deal operations must still be serialized by the caller.
pub struct GameEngine {
    /// Game options.
    options: GameOptions,
    /// The live deck.
    deck: Mutex<Deck>,
    /// Registered players, keyed (and so ordered) by id.
    players: Mutex<BTreeMap<String, Player>>,
    /// Notification sinks in registration order.
    callbacks: Callbacks<EngineCallback>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl GameEngine {
    /// Creates a new engine with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bust42::{GameEngine, GameOptions, HALF_DECK_SIZE};
    ///
    /// let engine = GameEngine::new(GameOptions::default(), 42);
    /// assert_eq!(engine.cards_remaining(), HALF_DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::build_shuffled(&mut rng);

        Self {
            options,
            deck: Mutex::new(deck),
            players: Mutex::new(BTreeMap::new()),
            callbacks: Callbacks::new(),
            rng: Mutex::new(rng),
        }
    }

    /// Returns the engine options.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns a freshly shuffled half-deck, independent of the live deck.
    pub fn get_shuffled_half_deck(&self) -> Deck {
        Deck::build_shuffled(&mut *self.rng.lock())
    }

    /// Replaces the live deck, e.g. to replay a known sequence of cards.
    ///
    /// Once the replacement runs out the engine goes back to shuffled
    /// half-decks.
    pub fn set_deck(&self, deck: Deck) {
        *self.deck.lock() = deck;
    }

    /// Returns the number of cards left in the live deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Registers a player.
    ///
    /// A player whose id is already registered replaces the previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::EmptyId`] if the player's id is empty.
    pub fn add_player(&self, player: Player) -> Result<(), PlayerError> {
        if player.id().is_empty() {
            return Err(PlayerError::EmptyId);
        }

        self.players.lock().insert(player.id().into(), player);
        Ok(())
    }

    /// Removes a player, returning whether one was registered under `player_id`.
    pub fn remove_player(&self, player_id: &str) -> bool {
        self.players.lock().remove(player_id).is_some()
    }

    /// Returns a copy of the player registered under `player_id`.
    pub fn get_player(&self, player_id: &str) -> Option<Player> {
        self.players.lock().get(player_id).cloned()
    }

    /// Returns copies of all registered players, ascending by id.
    pub fn get_all_players(&self) -> Vec<Player> {
        self.players.lock().values().cloned().collect()
    }

    /// Returns whether a player is registered under `player_id`.
    pub fn contains_player(&self, player_id: &str) -> bool {
        self.players.lock().contains_key(player_id)
    }

    /// Returns the number of registered players.
    pub fn player_count(&self) -> usize {
        self.players.lock().len()
    }

    /// Registers a notification sink.
    ///
    /// Sinks run in registration order for every event.
    ///
    /// # Example
    ///
    /// ```
    /// use bust42::{EngineEvent, GameEngine, GameOptions};
    ///
    /// let engine = GameEngine::new(GameOptions::default(), 1);
    /// let id = engine.add_callback(|_engine: &GameEngine, event: &EngineEvent| {
    ///     let _ = event;
    /// });
    /// assert!(engine.remove_callback(id));
    /// assert!(!engine.remove_callback(id));
    /// ```
    pub fn add_callback<F>(&self, callback: F) -> CallbackId
    where
        F: Fn(&Self, &EngineEvent) + Send + Sync + 'static,
    {
        self.callbacks.add(Arc::new(callback))
    }

    /// Removes a notification sink, returning whether it was registered.
    pub fn remove_callback(&self, id: CallbackId) -> bool {
        self.callbacks.remove(id)
    }

    /// Returns the number of registered notification sinks.
    pub fn callback_count(&self) -> usize {
        self.callbacks.len()
    }

    /// Delivers an event to every sink, in order.
    fn notify(&self, event: &EngineEvent) {
        for callback in self.callbacks.snapshot() {
            callback(self, event);
        }
    }

    fn with_player<T>(
        &self,
        player_id: &str,
        f: impl FnOnce(&mut Player) -> T,
    ) -> Result<T, PlayerError> {
        let mut players = self.players.lock();
        let player = players.get_mut(player_id).ok_or(PlayerError::NotFound)?;
        Ok(f(player))
    }
}
