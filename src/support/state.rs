//! Per-participant bookkeeping kept for presentation layers.

use alloc::vec::Vec;

use crate::card::Card;

/// How a player's points moved over the last round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultSummary {
    /// Points went up.
    Won,
    /// Points went down.
    Lost,
    /// Points did not change.
    Drew,
    /// No round has finished yet.
    #[default]
    None,
}

/// Auxiliary state for one participant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerState {
    hand: Vec<Card>,
    has_bet: bool,
    has_been_dealt: bool,
    has_busted: bool,
    previous_bet: usize,
    previous_points: usize,
    result_summary: ResultSummary,
}

impl PlayerState {
    pub(crate) fn new(previous_points: usize) -> Self {
        Self {
            previous_points,
            ..Self::default()
        }
    }

    /// Cards dealt in the participant's current hand.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Whether a bet is placed for the current round.
    #[must_use]
    pub const fn has_bet(&self) -> bool {
        self.has_bet
    }

    /// Whether the participant has been dealt this round.
    #[must_use]
    pub const fn has_been_dealt(&self) -> bool {
        self.has_been_dealt
    }

    /// Whether the last dealt card busted.
    #[must_use]
    pub const fn has_busted(&self) -> bool {
        self.has_busted
    }

    /// Bet held when the participant was last dealt.
    #[must_use]
    pub const fn previous_bet(&self) -> usize {
        self.previous_bet
    }

    /// Points at the end of the previous round.
    #[must_use]
    pub const fn previous_points(&self) -> usize {
        self.previous_points
    }

    /// Summary of the last finished round.
    #[must_use]
    pub const fn result_summary(&self) -> ResultSummary {
        self.result_summary
    }

    pub(crate) fn start_hand(&mut self) {
        self.hand.clear();
        self.has_been_dealt = true;
        self.has_busted = false;
    }

    pub(crate) fn card_dealt(&mut self, card: Card, busted: bool) {
        self.hand.push(card);
        self.has_busted = busted;
    }

    pub(crate) const fn set_has_bet(&mut self, has_bet: bool) {
        self.has_bet = has_bet;
    }

    pub(crate) const fn set_previous_bet(&mut self, bet: usize) {
        self.previous_bet = bet;
    }

    /// Closes the round against the player's settled points.
    pub(crate) const fn finish_round(&mut self, points: usize) {
        self.result_summary = if points > self.previous_points {
            ResultSummary::Won
        } else if points < self.previous_points {
            ResultSummary::Lost
        } else {
            ResultSummary::Drew
        };
        self.has_bet = false;
        self.has_been_dealt = false;
        self.previous_points = points;
    }
}
