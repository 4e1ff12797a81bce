use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::event::{EngineEvent, Participant};
use crate::hand::{Hand, HandStatus};
use crate::result::{PlayerResult, RoundResult};

use super::GameEngine;

impl GameEngine {
    /// Draws a card, replacing the deck with a fresh half-deck when it runs out.
    fn draw(&self) -> Card {
        let mut deck = self.deck.lock();
        loop {
            if let Ok(card) = deck.draw() {
                return card;
            }
            log::debug!("deck exhausted, shuffling a new half-deck");
            *deck = Deck::build_shuffled(&mut *self.rng.lock());
        }
    }

    #[cfg(feature = "std")]
    fn pause(&self, delay: u32) {
        if self.options.pacing && delay > 0 {
            std::thread::sleep(core::time::Duration::from_millis(u64::from(delay)));
        }
    }

    #[cfg(not(feature = "std"))]
    fn pause(&self, _delay: u32) {}

    /// Runs the deal loop for one participant until it busts or hits 42.
    fn deal_hand(&self, participant: &Participant, delay: u32) -> Hand {
        let mut hand = Hand::new();

        loop {
            let card = self.draw();
            match hand.add_card(card) {
                HandStatus::Busted => {
                    self.notify(&EngineEvent::BustCard {
                        participant: participant.clone(),
                        card,
                    });
                    break;
                }
                HandStatus::Settled => {
                    self.notify(&EngineEvent::NextCard {
                        participant: participant.clone(),
                        card,
                        score: hand.score(),
                    });
                    break;
                }
                HandStatus::Dealing => {
                    self.notify(&EngineEvent::NextCard {
                        participant: participant.clone(),
                        card,
                        score: hand.score(),
                    });
                    self.pause(delay);
                }
            }
        }

        hand
    }

    /// Deals cards to a player until they bust or reach 42.
    ///
    /// Emits [`EngineEvent::NextCard`] for every counted card,
    /// [`EngineEvent::BustCard`] for a busting card and finally
    /// [`EngineEvent::Result`] with the pre-bust score, which is then recorded
    /// as the player's last result. Returns `Ok(None)` without dealing if the
    /// player is not registered.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InvalidDelay`] if `delay` exceeds
    /// [`GameOptions::max_player_delay`](crate::GameOptions::max_player_delay).
    pub fn deal_player(&self, player_id: &str, delay: u32) -> Result<Option<Hand>, DealError> {
        let max = self.options.max_player_delay;
        if delay > max {
            return Err(DealError::InvalidDelay { delay, max });
        }

        if !self.contains_player(player_id) {
            return Ok(None);
        }

        let hand = self.deal_hand(&Participant::Player(player_id.into()), delay);
        let score = hand.score();

        self.notify(&EngineEvent::Result {
            player_id: player_id.into(),
            score,
        });

        if let Some(player) = self.players.lock().get_mut(player_id) {
            player.set_result(score);
        }

        Ok(Some(hand))
    }

    /// Deals the house, then settles and resets every player's bet.
    ///
    /// Settlement of every registered player completes before
    /// [`EngineEvent::HouseResult`] fires; bets are reset once the
    /// notification has been delivered, so sinks still see each player's
    /// settled bet.
    pub fn deal_house(&self, delay: u32) -> RoundResult {
        let hand = self.deal_hand(&Participant::House, delay);
        let house_score = hand.score();

        let players: Vec<PlayerResult> = self
            .players
            .lock()
            .values_mut()
            .map(|player| {
                let bet = player.bet();
                let outcome = player.apply_win_loss(house_score);
                PlayerResult {
                    player_id: player.id().into(),
                    score: player.last_result(),
                    bet,
                    outcome,
                    points: player.points(),
                }
            })
            .collect();

        log::info!(
            "house settled {} player(s) against {house_score}",
            players.len()
        );

        self.notify(&EngineEvent::HouseResult { score: house_score });

        for player in self.players.lock().values_mut() {
            player.reset_bet();
        }

        RoundResult {
            house_score,
            house_busted: hand.status() == HandStatus::Busted,
            players,
        }
    }
}
