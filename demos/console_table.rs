//! Console table example.
//!
//! Seats two players, takes a bet for each from stdin, deals everybody and
//! the house, and logs the round through the `console` sinks. Set
//! `RUST_LOG=debug` to see every card.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bust42::{EngineSupport, GameEngine, GameOptions, Player, SupportOptions, console};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let support = EngineSupport::new(
        GameEngine::new(GameOptions::default(), seed),
        SupportOptions::default(),
    );
    support.add_callback(console::log_events);
    support.add_support_callback(console::log_support_events);

    for card in support.get_shuffled_half_deck().cards() {
        log::debug!("{card}");
    }

    for player in [
        Player::new("2", "The Shark", 1000),
        Player::new("1", "The Loser", 500),
    ] {
        if let Err(err) = support.add_player(player) {
            println!("Could not seat player: {err}");
        }
    }

    loop {
        let players = support.get_all_players();
        if players.is_empty() {
            println!("Everybody is out of points. Game over.");
            break;
        }

        for player in &players {
            let Some(bet) = prompt_usize(&format!(
                "{} bets (1-{}, 0 to sit out): ",
                player.name(),
                player.points()
            )) else {
                return;
            };

            if bet == 0 {
                continue;
            }
            match support.place_bet(player.id(), bet) {
                Ok(true) => {}
                Ok(false) => println!("Bet rejected."),
                Err(err) => println!("Bet error: {err}"),
            }
        }

        for player in &players {
            if let Err(err) = support.deal_player(player.id(), support.delay()) {
                println!("Deal error: {err}");
            }
        }

        let round = support.deal_house(support.delay());
        for result in &round.players {
            println!(
                "{}: scored {} vs house {}, {:?}, now {} points",
                result.player_id, result.score, round.house_score, result.outcome, result.points
            );
        }

        if !matches!(prompt_line("Play again? (y/n): ").as_str(), "y" | "yes") {
            println!("Goodbye.");
            break;
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => "q".into(),
        Ok(_) => input.trim().to_lowercase(),
    }
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let line = prompt_line(prompt);
        if line == "q" {
            return None;
        }
        match line.parse() {
            Ok(value) => return Some(value),
            Err(_) => println!("Enter a number, or q to quit."),
        }
    }
}
