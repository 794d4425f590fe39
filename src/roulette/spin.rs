use rand::Rng;

use crate::error::{SpinError, StepError};
use crate::result::SpinOutcome;
use crate::schedule::Continuation;

use super::{Pocket, Roulette};

impl Roulette {
    /// Spins the wheel and settles the ledger immediately.
    ///
    /// The result is drawn uniformly from the pockets in wheel order.
    ///
    /// # Errors
    ///
    /// Returns an error if no bets are placed or a spin is already in
    /// progress.
    pub fn spin(&mut self) -> Result<SpinOutcome, SpinError> {
        self.ensure_can_spin()?;
        let result = self.draw_pocket();
        Ok(self.settle(result))
    }

    /// Starts a spin whose result is drawn when the returned continuation is
    /// presented to [`complete_spin`](Self::complete_spin).
    ///
    /// The ledger is frozen until then.
    ///
    /// # Errors
    ///
    /// Returns an error if no bets are placed or a spin is already in
    /// progress.
    pub fn start_spin(&mut self) -> Result<Continuation, SpinError> {
        self.ensure_can_spin()?;
        let continuation = self.clock.schedule(self.options.spin_delay);
        tracing::debug!(
            round = self.clock.round(),
            staked = self.ledger.total(),
            "spin started"
        );
        Ok(continuation)
    }

    /// Resolves a spin started with [`start_spin`](Self::start_spin).
    ///
    /// # Errors
    ///
    /// Returns [`StepError::Stale`] if the continuation was cancelled,
    /// already used, or belongs to another spin.
    pub fn complete_spin(&mut self, continuation: &Continuation) -> Result<SpinOutcome, StepError> {
        self.clock.redeem(continuation)?;
        let result = self.draw_pocket();
        Ok(self.settle(result))
    }

    /// Abandons a pending spin, unfreezing the ledger.
    ///
    /// Returns whether a spin was pending.
    pub fn cancel_spin(&mut self) -> bool {
        let pending = self.is_spinning();
        self.clock.next_round();
        if pending {
            tracing::debug!(round = self.clock.round(), "spin cancelled");
        }
        pending
    }

    /// Settles the ledger against an externally chosen result.
    ///
    /// # Errors
    ///
    /// Returns an error if no bets are placed, a spin is in progress, or the
    /// pocket is not on this wheel.
    pub fn apply_result(&mut self, result: Pocket) -> Result<SpinOutcome, SpinError> {
        self.ensure_can_spin()?;
        if !self.options.variant.has_pocket(result) {
            return Err(SpinError::NotOnWheel);
        }
        Ok(self.settle(result))
    }

    fn ensure_can_spin(&self) -> Result<(), SpinError> {
        if self.is_spinning() {
            return Err(SpinError::SpinPending);
        }
        if self.ledger.is_empty() {
            return Err(SpinError::NoBets);
        }
        Ok(())
    }

    fn draw_pocket(&mut self) -> Pocket {
        let wheel = self.options.variant.wheel();
        wheel[self.rng.random_range(0..wheel.len())]
    }

    fn settle(&mut self, result: Pocket) -> SpinOutcome {
        self.clock.next_round();

        self.last_result = Some(result);
        self.history.insert(0, result);
        self.history.truncate(self.options.history_len);

        let resolution = self.ledger.resolve(result);
        let staked = self.ledger.clear();
        self.balance = self.balance.saturating_add(resolution.winnings);

        tracing::info!(
            %result,
            color = ?result.color(),
            staked,
            winnings = resolution.winnings,
            balance = self.balance,
            "roulette spin resolved"
        );

        SpinOutcome {
            result,
            staked,
            winnings: resolution.winnings,
            winning_bets: resolution.winners,
        }
    }
}
