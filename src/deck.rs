//! The 28-card half-deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, HALF_DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered pile of unique half-deck cards.
///
/// The top of the deck is the end of the internal vector, so drawing is a
/// `pop`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds a full 28-card half-deck in random order.
    ///
    /// # Example
    ///
    /// ```
    /// use bust42::{Deck, HALF_DECK_SIZE};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let deck = Deck::build_shuffled(&mut rng);
    /// assert_eq!(deck.len(), HALF_DECK_SIZE);
    /// ```
    pub fn build_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(HALF_DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a stacked deck that yields `draws` in the given order.
    ///
    /// The cards need not cover the whole half-deck, but each may appear
    /// only once.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if a card appears twice.
    pub fn from_draws(draws: &[Card]) -> Result<Self, DeckError> {
        for (index, card) in draws.iter().enumerate() {
            if draws[..index].contains(card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }

        let mut cards = draws.to_vec();
        cards.reverse();
        Ok(Self { cards })
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] when no cards are left.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the remaining cards in the order they will be drawn.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().rev()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
