use crate::error::PlayerError;
use crate::result::Outcome;

use super::GameEngine;

impl GameEngine {
    /// Places a bet for the specified player.
    ///
    /// Returns `Ok(false)` without touching the current bet when the amount is
    /// zero or more than the player's points.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NotFound`] if the player is not registered.
    pub fn place_bet(&self, player_id: &str, amount: usize) -> Result<bool, PlayerError> {
        self.with_player(player_id, |player| player.place_bet(amount))
    }

    /// Clears the current bet of the specified player.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NotFound`] if the player is not registered.
    pub fn reset_bet(&self, player_id: &str) -> Result<(), PlayerError> {
        self.with_player(player_id, |player| player.reset_bet())
    }

    /// Settles the specified player's bet against a house score.
    ///
    /// [`deal_house`](Self::deal_house) calls this for every player; it is
    /// public so settlement can be driven on its own.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NotFound`] if the player is not registered.
    pub fn apply_win_loss(&self, player_id: &str, house_score: u8) -> Result<Outcome, PlayerError> {
        self.with_player(player_id, |player| player.apply_win_loss(house_score))
    }
}
