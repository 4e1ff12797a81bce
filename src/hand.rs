//! The cards dealt in one deal and the bust rule applied to them.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Score above which a hand busts.
pub const BUST_LEVEL: u8 = 42;

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Cards are still being drawn.
    Dealing,
    /// The last card pushed the score above [`BUST_LEVEL`].
    Busted,
    /// The score hit [`BUST_LEVEL`] exactly.
    Settled,
}

/// A hand built up by a single deal.
///
/// The score never includes a busting card, so it always reports the
/// pre-bust total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, including a busting card if there was one.
    cards: Vec<Card>,
    /// Running score without the busting card.
    score: u8,
    /// Current status of the hand.
    status: HandStatus,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            score: 0,
            status: HandStatus::Dealing,
        }
    }

    /// Adds a card to the hand and returns the resulting status.
    ///
    /// Once the hand has busted or settled, further cards are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use bust42::{Card, Hand, HandStatus, Rank, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.add_card(Card::new(Suit::Hearts, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Spades, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Clubs, Rank::King));
    /// let status = hand.add_card(Card::new(Suit::Clubs, Rank::Queen));
    /// assert_eq!(status, HandStatus::Settled);
    /// assert_eq!(hand.score(), 42);
    /// ```
    pub fn add_card(&mut self, card: Card) -> HandStatus {
        if self.status != HandStatus::Dealing {
            return self.status;
        }

        self.cards.push(card);
        let next = self.score.saturating_add(card.score());

        if next > BUST_LEVEL {
            self.status = HandStatus::Busted;
        } else {
            self.score = next;
            if next == BUST_LEVEL {
                self.status = HandStatus::Settled;
            }
        }

        self.status
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the score, excluding any busting card.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Returns the card that busted the hand, if it busted.
    #[must_use]
    pub fn bust_card(&self) -> Option<Card> {
        match self.status {
            HandStatus::Busted => self.cards.last().copied(),
            HandStatus::Dealing | HandStatus::Settled => None,
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
