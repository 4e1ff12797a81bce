//! Round result types for settlement.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Result of settling one player against the house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player scored higher than the house and won the bet.
    Won,
    /// Player scored lower than the house and lost the bet.
    Lost,
    /// Scores tied; points unchanged.
    Drew,
}

/// Result for a single player after the house has been dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player ID.
    pub player_id: String,
    /// The player's score from their last deal.
    pub score: u8,
    /// The bet that was settled.
    pub bet: usize,
    /// The outcome of the settlement.
    pub outcome: Outcome,
    /// Points after settlement.
    pub points: usize,
}

/// Result of the entire round once the house has been dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The house's final (pre-bust) score.
    pub house_score: u8,
    /// Whether the house's last card busted.
    pub house_busted: bool,
    /// Results for each registered player, ascending by id.
    pub players: Vec<PlayerResult>,
}
