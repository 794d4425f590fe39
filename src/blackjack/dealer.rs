use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{ActionError, StepError};
use crate::hand::Hand;
use crate::options::BlackjackOptions;
use crate::result::Outcome;
use crate::schedule::Continuation;

use super::{Blackjack, Phase};

/// One automatic dealer draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerDraw {
    /// The card the dealer drew.
    pub card: Card,
    /// Continuation for the next draw, or `None` once the round is settled.
    pub next: Option<Continuation>,
}

impl BlackjackOptions {
    /// Returns whether the dealer must hit `hand`.
    ///
    /// The dealer hits below the stand threshold and stands at or above it,
    /// soft or hard.
    #[must_use]
    pub fn dealer_must_hit(&self, hand: &Hand) -> bool {
        hand.value() < self.dealer_stands_on
    }
}

impl Blackjack {
    fn dealer_wants_card(&self) -> bool {
        !self.deck.is_empty() && self.options.dealer_must_hit(&self.dealer)
    }

    /// Issues the next dealer continuation, or settles if the dealer is done.
    pub(super) fn schedule_dealer(&mut self) -> Option<Continuation> {
        if !self.dealer.is_bust() && self.dealer_wants_card() {
            Some(self.clock.schedule(self.options.dealer_step_delay))
        } else {
            self.settle();
            None
        }
    }

    /// Performs one scheduled dealer draw.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Stale`] if `continuation` was issued for an
    /// earlier round, was already used, or was superseded. Nothing changes in
    /// that case.
    pub fn dealer_step(&mut self, continuation: &Continuation) -> Result<DealerDraw, StepError> {
        if self.phase != Phase::DealerTurn {
            return Err(StepError::Stale);
        }
        self.clock.redeem(continuation)?;

        // Only dealer draws touch the deck during the dealer turn, so a live
        // continuation always has a card behind it.
        let Some(card) = self.draw() else {
            self.settle();
            return Err(StepError::Stale);
        };

        self.dealer.add_card(card);
        tracing::debug!(
            round = self.clock.round(),
            %card,
            dealer_total = self.dealer.value(),
            "dealer draws"
        );

        let next = self.schedule_dealer();
        Ok(DealerDraw { card, next })
    }

    /// Plays the dealer's hand to completion without pacing.
    ///
    /// Returns the cards drawn. Any outstanding continuation becomes stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer is not on turn.
    pub fn play_dealer(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.phase != Phase::DealerTurn {
            return Err(ActionError::InvalidState);
        }
        self.clock.cancel();

        let mut drawn = Vec::new();
        while self.dealer_wants_card() {
            let Some(card) = self.draw() else {
                break;
            };
            self.dealer.add_card(card);
            drawn.push(card);
        }

        self.settle();
        Ok(drawn)
    }

    /// Settles the round.
    pub(super) fn settle(&mut self) {
        self.clock.cancel();
        let outcome = Outcome::from_totals(self.player.value(), self.dealer.value());
        let payout = self.pay_out(outcome);
        self.outcome = Some(outcome);
        self.phase = Phase::Settled;
        tracing::info!(
            round = self.clock.round(),
            player_total = self.player.value(),
            dealer_total = self.dealer.value(),
            ?outcome,
            stake = self.stake,
            payout,
            balance = self.balance,
            "blackjack round settled"
        );
    }
}
