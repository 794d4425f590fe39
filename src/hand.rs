//! Blackjack hand representation and evaluation.

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

/// Evaluates a set of cards, returning the total and whether an ace is
/// still counted as 11.
///
/// Every ace starts at 11. While the total is over 21 and a soft ace
/// remains, one ace drops to 1. The result is the best total not over 21, or
/// the smallest possible total when the hand is bust.
#[must_use]
pub fn evaluate(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut soft_aces: u8 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            soft_aces += 1;
        }
        value = value.saturating_add(card.rank.points());
    }

    while value > BLACKJACK && soft_aces > 0 {
        value -= 10;
        soft_aces -= 1;
    }

    (value, soft_aces > 0)
}

/// A player's or dealer's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt to this hand.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate(&self.cards).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is a two-card 21.
    ///
    /// Informational only; settlement compares totals.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
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

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
