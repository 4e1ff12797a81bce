//! View-model layer on top of [`GameEngine`].
//!
//! [`EngineSupport`] owns an engine, mirrors every participant's hand and
//! round flags in a [`PlayerState`] table, and relays a second set of
//! notifications ([`SupportEvent`]) that presentation layers need but the
//! engine does not emit.

use alloc::sync::Arc;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DealError, PlayerError};
use crate::event::{CallbackId, Callbacks, EngineEvent, Participant};
use crate::game::GameEngine;
use crate::hand::Hand;
use crate::options::SupportOptions;
use crate::player::Player;
use crate::result::{Outcome, RoundResult};
use crate::sync::Mutex;

mod event;
mod state;

pub use event::{SupportCallback, SupportEvent};
pub use state::{PlayerState, ResultSummary};

type States = Arc<Mutex<HashMap<Participant, PlayerState>>>;

/// An engine wrapper that keeps per-participant state for presentation.
pub struct EngineSupport {
    engine: GameEngine,
    options: SupportOptions,
    states: States,
    callbacks: Callbacks<SupportCallback>,
}

fn record_card(states: &States, participant: &Participant, card: Card, busted: bool) {
    if let Some(state) = states.lock().get_mut(participant) {
        state.card_dealt(card, busted);
    }
}

/// Returns the state for a registered player, creating one if the player
/// was registered behind the view-model's back (e.g. from an engine sink).
fn tracked_state<'a>(
    states: &'a mut HashMap<Participant, PlayerState>,
    player: &Player,
) -> &'a mut PlayerState {
    states
        .entry(Participant::Player(player.id().into()))
        .or_insert_with(|| PlayerState::new(player.points()))
}

fn fresh_states() -> HashMap<Participant, PlayerState> {
    let mut states = HashMap::new();
    states.insert(Participant::House, PlayerState::default());
    states
}

impl EngineSupport {
    /// Wraps `engine`, registering a sink that records every dealt card.
    ///
    /// The recording sink is registered before any sink added through
    /// [`add_callback`](Self::add_callback), so participant hands are already
    /// up to date when later sinks run.
    ///
    /// # Example
    ///
    /// ```
    /// use bust42::{EngineSupport, GameEngine, GameOptions, Participant, SupportOptions};
    ///
    /// let support = EngineSupport::new(
    ///     GameEngine::new(GameOptions::default(), 3),
    ///     SupportOptions::default().with_delay(0),
    /// );
    /// assert!(support.player_state(&Participant::House).is_some());
    /// assert!(!support.all_players_dealt());
    /// ```
    #[must_use]
    pub fn new(engine: GameEngine, options: SupportOptions) -> Self {
        let states: States = Arc::new(Mutex::new(fresh_states()));

        let tracked = Arc::clone(&states);
        engine.add_callback(move |_engine: &GameEngine, event: &EngineEvent| match event {
            EngineEvent::NextCard {
                participant, card, ..
            } => record_card(&tracked, participant, *card, false),
            EngineEvent::BustCard { participant, card } => {
                record_card(&tracked, participant, *card, true);
            }
            EngineEvent::Result { .. } | EngineEvent::HouseResult { .. } => {}
        });

        Self {
            engine,
            options,
            states,
            callbacks: Callbacks::new(),
        }
    }

    /// Replaces the engine's live deck.
    pub fn set_deck(&self, deck: Deck) {
        self.engine.set_deck(deck);
    }

    /// Returns the number of cards left in the engine's live deck.
    pub fn cards_remaining(&self) -> usize {
        self.engine.cards_remaining()
    }

    /// Returns the delay presentation layers should pass when dealing.
    pub const fn delay(&self) -> u32 {
        self.options.delay
    }

    /// Returns the view-model options.
    pub const fn options(&self) -> &SupportOptions {
        &self.options
    }

    /// Returns a copy of a participant's state.
    pub fn player_state(&self, participant: &Participant) -> Option<PlayerState> {
        self.states.lock().get(participant).cloned()
    }

    fn update_state(&self, participant: &Participant, f: impl FnOnce(&mut PlayerState)) {
        if let Some(state) = self.states.lock().get_mut(participant) {
            f(state);
        }
    }

    fn notify(&self, event: &SupportEvent) {
        for callback in self.callbacks.snapshot() {
            callback(self, event);
        }
    }

    /// Deals a player and records the deal in their state.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidDelay`] if the engine rejects the delay.
    pub fn deal_player(&self, player_id: &str, delay: u32) -> Result<Option<Hand>, DealError> {
        let max = self.engine.options().max_player_delay;
        if delay > max {
            return Err(DealError::InvalidDelay { delay, max });
        }

        let participant = Participant::Player(player_id.into());
        if let Some(player) = self.engine.get_player(player_id) {
            tracked_state(&mut self.states.lock(), &player).start_hand();
        }

        let hand = self.engine.deal_player(player_id, delay)?;

        if let Some(player) = self.engine.get_player(player_id) {
            self.update_state(&participant, |state| state.set_previous_bet(player.bet()));
        }

        Ok(hand)
    }

    /// Deals the house, closes the round for every player and removes broke
    /// players when configured to.
    ///
    /// Emits [`SupportEvent::PlayerRemoved`] for every removed player, then
    /// [`SupportEvent::RoundEnded`].
    pub fn deal_house(&self, delay: u32) -> RoundResult {
        self.update_state(&Participant::House, PlayerState::start_hand);

        let round = self.engine.deal_house(delay);

        let players = self.engine.get_all_players();
        {
            let mut states = self.states.lock();
            for player in &players {
                tracked_state(&mut states, player).finish_round(player.points());
            }
        }

        if self.options.remove_broke_players {
            for player in players.iter().filter(|player| player.points() == 0) {
                log::info!("removing {} (id={}): no points left", player.name(), player.id());
                self.remove_player(player.id());
            }
        }

        self.notify(&SupportEvent::RoundEnded);
        round
    }

    /// Returns whether every registered player has been dealt this round.
    ///
    /// Returns `false` when no players are registered.
    pub fn all_players_dealt(&self) -> bool {
        let players = self.engine.get_all_players();
        if players.is_empty() {
            return false;
        }

        let states = self.states.lock();
        players.iter().all(|player| {
            states
                .get(&Participant::Player(player.id().into()))
                .is_some_and(PlayerState::has_been_dealt)
        })
    }

    /// Registers a player with a fresh state.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::EmptyId`] if the player's id is empty.
    pub fn add_player(&self, player: Player) -> Result<(), PlayerError> {
        let participant = Participant::Player(player.id().into());
        let state = PlayerState::new(player.points());
        self.engine.add_player(player.clone())?;
        self.states.lock().insert(participant, state);
        self.notify(&SupportEvent::PlayerAdded(player));
        Ok(())
    }

    /// Removes a player and their state, returning whether one was removed.
    pub fn remove_player(&self, player_id: &str) -> bool {
        let Some(player) = self.engine.get_player(player_id) else {
            return false;
        };
        if !self.engine.remove_player(player_id) {
            return false;
        }

        self.states
            .lock()
            .remove(&Participant::Player(player_id.into()));
        self.notify(&SupportEvent::PlayerRemoved(player));
        true
    }

    /// Places a bet, marking the player's state when it is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NotFound`] if the player is not registered.
    pub fn place_bet(&self, player_id: &str, amount: usize) -> Result<bool, PlayerError> {
        if !self.engine.place_bet(player_id, amount)? {
            return Ok(false);
        }

        self.update_state(&Participant::Player(player_id.into()), |state| {
            state.set_has_bet(true);
        });
        if let Some(player) = self.engine.get_player(player_id) {
            self.notify(&SupportEvent::BetPlaced { player, bet: amount });
        }
        Ok(true)
    }

    /// Clears a player's bet.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NotFound`] if the player is not registered.
    pub fn reset_bet(&self, player_id: &str) -> Result<(), PlayerError> {
        self.engine.reset_bet(player_id)?;

        self.update_state(&Participant::Player(player_id.into()), |state| {
            state.set_has_bet(false);
        });
        if let Some(player) = self.engine.get_player(player_id) {
            self.notify(&SupportEvent::BetReset(player));
        }
        Ok(())
    }

    /// Removes every tracked player and starts over with a fresh house state.
    pub fn reset_game(&self) {
        let tracked: Vec<Participant> = self.states.lock().keys().cloned().collect();
        for participant in &tracked {
            if let Some(player_id) = participant.player_id() {
                self.engine.remove_player(player_id);
            }
        }

        *self.states.lock() = fresh_states();
        log::debug!("game reset, {} participant(s) cleared", tracked.len());
        self.notify(&SupportEvent::GameReset);
    }

    /// Returns a copy of the player registered under `player_id`.
    pub fn get_player(&self, player_id: &str) -> Option<Player> {
        self.engine.get_player(player_id)
    }

    /// Returns copies of all registered players, ascending by id.
    pub fn get_all_players(&self) -> Vec<Player> {
        self.engine.get_all_players()
    }

    /// Settles one player against a house score.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NotFound`] if the player is not registered.
    pub fn apply_win_loss(&self, player_id: &str, house_score: u8) -> Result<Outcome, PlayerError> {
        self.engine.apply_win_loss(player_id, house_score)
    }

    /// Returns a freshly shuffled half-deck.
    pub fn get_shuffled_half_deck(&self) -> Deck {
        self.engine.get_shuffled_half_deck()
    }

    /// Registers an engine notification sink.
    pub fn add_callback<F>(&self, callback: F) -> CallbackId
    where
        F: Fn(&GameEngine, &EngineEvent) + Send + Sync + 'static,
    {
        self.engine.add_callback(callback)
    }

    /// Removes an engine notification sink.
    pub fn remove_callback(&self, id: CallbackId) -> bool {
        self.engine.remove_callback(id)
    }

    /// Registers a view-model notification sink.
    pub fn add_support_callback<F>(&self, callback: F) -> CallbackId
    where
        F: Fn(&Self, &SupportEvent) + Send + Sync + 'static,
    {
        self.callbacks.add(Arc::new(callback))
    }

    /// Removes a view-model notification sink.
    pub fn remove_support_callback(&self, id: CallbackId) -> bool {
        self.callbacks.remove(id)
    }
}
