//! Notification sinks that write the game's progress through the [`log`] facade.
//!
//! Intermediate cards go out at `debug`, busts and results at `info`, so a
//! console client can pick its verbosity with the logger's level filter.
//!
//! ```
//! use bust42::{GameEngine, GameOptions, console};
//!
//! let engine = GameEngine::new(GameOptions::default(), 9);
//! engine.add_callback(console::log_events);
//! ```

use alloc::string::String;

use crate::event::{EngineEvent, Participant};
use crate::game::GameEngine;
use crate::support::{EngineSupport, SupportEvent};

fn display_name(engine: &GameEngine, participant: &Participant) -> String {
    match participant {
        Participant::Player(id) => engine
            .get_player(id)
            .map_or_else(|| id.clone(), |player| player.name().into()),
        Participant::House => "House".into(),
    }
}

/// Logs an engine notification.
pub fn log_events(engine: &GameEngine, event: &EngineEvent) {
    match event {
        EngineEvent::NextCard {
            participant,
            card,
            score,
        } => {
            let name = display_name(engine, participant);
            log::debug!("card dealt to {name} .. {card}, running score {score}");
        }
        EngineEvent::BustCard { participant, card } => {
            let name = display_name(engine, participant);
            log::info!("card dealt to {name} .. {card} ... BUSTED!");
        }
        EngineEvent::Result { player_id, score } => {
            let name = display_name(engine, &Participant::Player(player_id.clone()));
            log::info!("{name}, final result={score}");
        }
        EngineEvent::HouseResult { score } => {
            log::info!("House, final result={score}");
            for player in engine.get_all_players() {
                log::info!("  {player}");
            }
        }
    }
}

/// Logs a view-model notification.
pub fn log_support_events(_support: &EngineSupport, event: &SupportEvent) {
    match event {
        SupportEvent::PlayerAdded(player) => log::info!("player joined: {player}"),
        SupportEvent::PlayerRemoved(player) => log::info!("player left: {player}"),
        SupportEvent::BetPlaced { player, bet } => {
            log::info!("{} bet {bet}", player.name());
        }
        SupportEvent::BetReset(player) => log::info!("{} withdrew their bet", player.name()),
        SupportEvent::RoundEnded => log::info!("round ended"),
        SupportEvent::GameReset => log::info!("new game"),
    }
}
