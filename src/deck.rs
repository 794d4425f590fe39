//! Deck building, shuffling and dealing.

use alloc::collections::VecDeque;
use alloc::string::ToString;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ConfigError;

/// An ordered deck, dealt from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a fresh, unshuffled 52-card deck.
    ///
    /// Cards are ordered by suit (clubs, diamonds, hearts, spades), then by
    /// rank from two to ace.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cards: Self::standard_cards().into(),
        }
    }

    /// Creates a fresh 52-card deck in uniformly random order.
    ///
    /// The shuffle is Fisher–Yates: from the last index down to 1, each card
    /// is swapped with a uniformly chosen index at or below it.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Self::standard_cards();
        cards.shuffle(rng);
        Self {
            cards: cards.into(),
        }
    }

    /// Creates a deck that deals `cards` in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if a card appears twice or there are more cards than
    /// a standard deck holds.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, ConfigError> {
        let cards: VecDeque<Card> = cards.into_iter().collect();
        if cards.len() > DECK_SIZE {
            return Err(ConfigError::OversizedDeck(cards.len()));
        }

        for (index, card) in cards.iter().enumerate() {
            if cards.iter().skip(index + 1).any(|other| other == card) {
                return Err(ConfigError::DuplicateCard(card.to_string()));
            }
        }

        Ok(Self { cards })
    }

    fn standard_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }

    /// Removes and returns the front card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the front card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns the remaining cards in dealing order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns whether `card` is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards remaining.
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

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
