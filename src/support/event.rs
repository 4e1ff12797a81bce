use crate::player::Player;

use super::EngineSupport;

/// A notification from [`EngineSupport`], fired after the engine operation
/// it describes has completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupportEvent {
    /// A player was registered (or replaced).
    PlayerAdded(Player),
    /// A player was removed, explicitly or for running out of points.
    PlayerRemoved(Player),
    /// A bet was accepted.
    BetPlaced {
        /// The player after the bet was placed.
        player: Player,
        /// The accepted amount.
        bet: usize,
    },
    /// A player's bet was cleared.
    BetReset(Player),
    /// The house has been dealt and every player settled.
    RoundEnded,
    /// Every player was removed and all state cleared.
    GameReset,
}

/// Callback signature for view-model notifications.
pub type SupportCallback = dyn Fn(&EngineSupport, &SupportEvent) + Send + Sync;
