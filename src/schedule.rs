//! Cancelable continuations for timer-driven steps.
//!
//! Dealer auto-play and the roulette spin delay are deferred by the host
//! (a browser timer, a sleeping thread). A session hands out a
//! [`Continuation`] describing how long to wait; the host presents it back
//! when the timer fires. Only the most recently issued continuation of the
//! current round is accepted, so a timer that outlives a reset or a new round
//! cannot mutate the superseded round.

use core::time::Duration;

use crate::error::StepError;

/// A ticket for one deferred step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Continuation {
    round: u64,
    step: u64,
    delay: Duration,
}

impl Continuation {
    /// How long the host should wait before presenting this continuation.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// The round this continuation belongs to.
    #[must_use]
    pub const fn round(&self) -> u64 {
        self.round
    }
}

/// Issues and validates continuations for one session.
#[derive(Debug, Clone, Default)]
pub(crate) struct RoundClock {
    round: u64,
    step: u64,
    /// Step number of the live continuation, if any.
    live: Option<u64>,
}

impl RoundClock {
    /// Starts a new round, invalidating every outstanding continuation.
    pub(crate) const fn next_round(&mut self) -> u64 {
        self.round = self.round.wrapping_add(1);
        self.live = None;
        self.round
    }

    /// Invalidates the live continuation without starting a new round.
    pub(crate) const fn cancel(&mut self) {
        self.live = None;
    }

    /// Issues a continuation, superseding the previous one.
    pub(crate) const fn schedule(&mut self, delay: Duration) -> Continuation {
        self.step = self.step.wrapping_add(1);
        self.live = Some(self.step);
        Continuation {
            round: self.round,
            step: self.step,
            delay,
        }
    }

    /// Consumes `continuation` if it is the live one.
    pub(crate) fn redeem(&mut self, continuation: &Continuation) -> Result<(), StepError> {
        if continuation.round != self.round || self.live != Some(continuation.step) {
            return Err(StepError::Stale);
        }
        self.live = None;
        Ok(())
    }

    pub(crate) const fn round(&self) -> u64 {
        self.round
    }

    pub(crate) const fn is_pending(&self) -> bool {
        self.live.is_some()
    }
}
