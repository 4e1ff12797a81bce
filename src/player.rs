//! Player betting and scoring state.

use core::cmp::Ordering;
use core::fmt;

use alloc::string::String;

use crate::result::Outcome;

/// A player seated at the table.
///
/// Players are identified by their id alone: equality, ordering and hashing
/// ignore every other field.
#[derive(Debug, Clone)]
pub struct Player {
    id: String,
    name: String,
    points: usize,
    bet: usize,
    last_result: u8,
}

impl Player {
    /// Creates a new player with no bet and a last result of zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bust42::Player;
    ///
    /// let player = Player::new("1", "The Loser", 500);
    /// assert_eq!(player.points(), 500);
    /// assert_eq!(player.bet(), 0);
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, points: usize) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            points,
            bet: 0,
            last_result: 0,
        }
    }

    /// Returns the player's id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the player.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the player's points.
    #[must_use]
    pub const fn points(&self) -> usize {
        self.points
    }

    /// Sets the player's points.
    pub const fn set_points(&mut self, points: usize) {
        self.points = points;
    }

    /// Returns the bet for the current round (0 if none).
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Places a bet.
    ///
    /// The bet is accepted only if it is positive and covered by the player's
    /// points. A rejected bet leaves the previous bet in place.
    pub const fn place_bet(&mut self, amount: usize) -> bool {
        if amount > 0 && amount <= self.points {
            self.bet = amount;
            true
        } else {
            false
        }
    }

    /// Clears the current bet.
    pub const fn reset_bet(&mut self) {
        self.bet = 0;
    }

    /// Returns the score from the player's most recent deal.
    #[must_use]
    pub const fn last_result(&self) -> u8 {
        self.last_result
    }

    /// Records the score of the player's most recent deal.
    pub const fn set_result(&mut self, result: u8) {
        self.last_result = result;
    }

    /// Settles the current bet against the house score.
    ///
    /// A higher result wins the bet, a lower one loses it and a tie changes
    /// nothing. The bet itself is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use bust42::{Outcome, Player};
    ///
    /// let mut player = Player::new("1", "Ann", 500);
    /// player.place_bet(100);
    /// player.set_result(40);
    /// assert_eq!(player.apply_win_loss(38), Outcome::Won);
    /// assert_eq!(player.points(), 600);
    /// ```
    pub const fn apply_win_loss(&mut self, house_score: u8) -> Outcome {
        if self.last_result > house_score {
            self.points = self.points.saturating_add(self.bet);
            Outcome::Won
        } else if self.last_result < house_score {
            self.points = self.points.saturating_sub(self.bet);
            Outcome::Lost
        } else {
            Outcome::Drew
        }
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl PartialOrd for Player {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Player {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl core::hash::Hash for Player {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (id={}): points={}, bet={}, last result={}",
            self.name, self.id, self.points, self.bet, self.last_result
        )
    }
}
