use crate::error::BetError;
use crate::result::Outcome;

use super::{Blackjack, Phase};

impl Blackjack {
    /// Returns the player's chips not currently at risk.
    #[must_use]
    pub const fn balance(&self) -> u64 {
        self.balance
    }

    /// Returns the chips bet on the next round.
    #[must_use]
    pub const fn pending_bet(&self) -> u64 {
        self.pending_bet
    }

    /// Returns the chips riding on the current (or last settled) round.
    #[must_use]
    pub const fn stake(&self) -> u64 {
        self.stake
    }

    /// Returns what settlement paid back, or `None` until the round settles.
    ///
    /// A win pays twice the stake, a push returns it and a loss pays nothing.
    #[must_use]
    pub const fn payout(&self) -> Option<u64> {
        self.payout
    }

    /// Bets `amount` on the next round, taking it from the balance.
    ///
    /// Repeated bets before the deal add up.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero, exceeds the balance, or a
    /// round is still being played. The balance is unchanged on error.
    pub fn bet(&mut self, amount: u64) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if matches!(self.phase, Phase::PlayerTurn | Phase::DealerTurn) {
            return Err(BetError::RoundInProgress);
        }
        if amount > self.balance {
            tracing::debug!(amount, balance = self.balance, "blackjack bet rejected");
            return Err(BetError::InsufficientFunds);
        }

        self.balance -= amount;
        self.pending_bet = self.pending_bet.saturating_add(amount);
        tracing::debug!(amount, balance = self.balance, "blackjack bet placed");

        Ok(())
    }

    /// Returns the bet for the next round to the balance.
    ///
    /// Returns the amount refunded.
    pub fn clear_bet(&mut self) -> u64 {
        let refunded = core::mem::take(&mut self.pending_bet);
        self.balance = self.balance.saturating_add(refunded);
        refunded
    }

    /// Bets `amount` and deals a new round from a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns the [`bet`](Self::bet) error; no cards are dealt in that case.
    pub fn deal_with_bet(&mut self, amount: u64) -> Result<(), BetError> {
        self.bet(amount)?;
        self.deal();
        Ok(())
    }

    /// Credits the balance for a settled round and records the payout.
    pub(super) fn pay_out(&mut self, outcome: Outcome) -> u64 {
        let payout = match outcome {
            Outcome::PlayerWin => self.stake.saturating_mul(2),
            Outcome::Push => self.stake,
            Outcome::DealerWin => 0,
        };
        self.balance = self.balance.saturating_add(payout);
        self.payout = Some(payout);
        payout
    }

    /// Returns the stake of an abandoned round to the balance.
    pub(super) fn refund_unsettled(&mut self) {
        if matches!(self.phase, Phase::PlayerTurn | Phase::DealerTurn) && self.stake > 0 {
            tracing::debug!(
                round = self.clock.round(),
                refunded = self.stake,
                "unsettled blackjack stake refunded"
            );
            self.balance = self.balance.saturating_add(self.stake);
            self.stake = 0;
        }
    }
}
