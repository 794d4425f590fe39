//! Blackjack session and round flow.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;
use crate::options::BlackjackOptions;
use crate::result::Outcome;
use crate::schedule::RoundClock;

mod actions;
mod dealer;
pub mod state;
mod wager;

pub use dealer::DealerDraw;
pub use state::Phase;

/// A single-player blackjack table.
///
/// The session owns the deck, both hands, the round phase and the player's
/// chips. All mutation goes through the command methods
/// ([`bet`](Self::bet), [`deal`](Self::deal), [`hit`](Self::hit),
/// [`stand`](Self::stand), [`dealer_step`](Self::dealer_step),
/// [`reset_game`](Self::reset_game)).
///
/// Wagering is optional: a round dealt without a bet settles the same way
/// and moves no chips.
#[derive(Debug, Clone)]
pub struct Blackjack {
    options: BlackjackOptions,
    deck: Deck,
    player: Hand,
    dealer: Hand,
    phase: Phase,
    outcome: Option<Outcome>,
    balance: u64,
    /// Chips bet for the next round.
    pending_bet: u64,
    /// Chips riding on the current round.
    stake: u64,
    payout: Option<u64>,
    clock: RoundClock,
    rng: ChaCha8Rng,
}

impl Blackjack {
    /// Creates a new table with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use casinors::{Blackjack, BlackjackOptions, Phase};
    ///
    /// let table = Blackjack::new(BlackjackOptions::default(), 42);
    /// assert_eq!(table.phase(), Phase::Idle);
    /// assert_eq!(table.remaining_deck_size(), 52);
    /// ```
    #[must_use]
    pub fn new(options: BlackjackOptions, seed: u64) -> Self {
        Self {
            options,
            deck: Deck::standard(),
            player: Hand::new(),
            dealer: Hand::new(),
            phase: Phase::Idle,
            outcome: None,
            balance: options.starting_balance,
            pending_bet: 0,
            stake: 0,
            payout: None,
            clock: RoundClock::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &BlackjackOptions {
        &self.options
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the player's current total.
    #[must_use]
    pub fn player_total(&self) -> u8 {
        self.player.value()
    }

    /// Returns the dealer's current total.
    #[must_use]
    pub fn dealer_total(&self) -> u8 {
        self.dealer.value()
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn remaining_deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Returns the undealt cards in dealing order.
    pub fn remaining_cards(&self) -> impl Iterator<Item = &Card> {
        self.deck.cards()
    }

    /// Returns the round outcome, or `None` until the round is settled.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the identifier of the current round.
    ///
    /// Changes every time a round is dealt or the table is reset.
    #[must_use]
    pub const fn round_id(&self) -> u64 {
        self.clock.round()
    }

    /// Returns whether a dealer continuation is outstanding.
    #[must_use]
    pub const fn has_pending_step(&self) -> bool {
        self.clock.is_pending()
    }

    /// Discards all round state and returns to [`Phase::Idle`].
    ///
    /// The deck is replaced with a fresh, unshuffled one and every
    /// outstanding continuation is invalidated. A stake on an unsettled round
    /// and any bet for the next round go back to the balance.
    pub fn reset_game(&mut self) {
        self.refund_unsettled();
        let refunded = core::mem::take(&mut self.pending_bet);
        self.balance = self.balance.saturating_add(refunded);
        self.stake = 0;
        self.payout = None;

        let round = self.clock.next_round();
        self.deck = Deck::standard();
        self.player.clear();
        self.dealer.clear();
        self.outcome = None;
        self.phase = Phase::Idle;
        tracing::debug!(round, balance = self.balance, "blackjack table reset");
    }

    fn draw(&mut self) -> Option<Card> {
        self.deck.draw()
    }
}
