//! Roulette session, bet catalog and payouts.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{BetError, ConfigError};
use crate::options::RouletteOptions;
use crate::schedule::RoundClock;

pub mod ledger;
pub mod pocket;
pub mod registry;
mod spin;
pub mod zone;

pub use ledger::{Bet, BetLedger, Resolution};
pub use pocket::{Color, Pocket, Variant};
pub use registry::{TableLayout, ZoneRegistry};
pub use zone::{BetKind, BetZone, ZoneKey, payout_multiplier};

/// A single-player roulette table.
///
/// The session owns the balance, the bet ledger and the result history.
/// Chips move only through [`place_bet`](Self::place_bet),
/// [`clear_bets`](Self::clear_bets) and spin resolution, so
/// `balance + total_staked` only changes when a spin pays out.
#[derive(Debug, Clone)]
pub struct Roulette {
    options: RouletteOptions,
    registry: ZoneRegistry,
    balance: u64,
    ledger: BetLedger,
    last_result: Option<Pocket>,
    history: Vec<Pocket>,
    clock: RoundClock,
    rng: ChaCha8Rng,
}

impl Roulette {
    /// Creates a new table with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet catalog for the variant cannot be built.
    ///
    /// # Example
    ///
    /// ```
    /// use casinors::{Roulette, RouletteOptions};
    ///
    /// let table = Roulette::new(RouletteOptions::default(), 7).unwrap();
    /// assert_eq!(table.balance(), 1000);
    /// ```
    pub fn new(options: RouletteOptions, seed: u64) -> Result<Self, ConfigError> {
        let registry = ZoneRegistry::new(options.variant)?;
        Ok(Self {
            options,
            registry,
            balance: options.starting_balance,
            ledger: BetLedger::new(),
            last_result: None,
            history: Vec::with_capacity(options.history_len),
            clock: RoundClock::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &RouletteOptions {
        &self.options
    }

    /// Returns the bet catalog.
    #[must_use]
    pub const fn registry(&self) -> &ZoneRegistry {
        &self.registry
    }

    /// Returns the chips not currently staked.
    #[must_use]
    pub const fn balance(&self) -> u64 {
        self.balance
    }

    /// Returns the bets for the next spin.
    #[must_use]
    pub const fn ledger(&self) -> &BetLedger {
        &self.ledger
    }

    /// Returns the total staked on the next spin.
    #[must_use]
    pub fn total_staked(&self) -> u64 {
        self.ledger.total()
    }

    /// Returns the most recent result.
    #[must_use]
    pub const fn last_result(&self) -> Option<Pocket> {
        self.last_result
    }

    /// Returns recent results, newest first.
    #[must_use]
    pub fn history(&self) -> &[Pocket] {
        &self.history
    }

    /// Returns whether a spin has started and not yet resolved.
    #[must_use]
    pub const fn is_spinning(&self) -> bool {
        self.clock.is_pending()
    }

    /// Stakes `amount` on the zone identified by `key`.
    ///
    /// Repeated bets on the same zone accumulate into one ledger entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero, the zone is not in the
    /// catalog, the balance is too small, or a spin is in progress. The
    /// balance and ledger are unchanged on error.
    pub fn place_bet(&mut self, key: &ZoneKey, amount: u64) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if self.is_spinning() {
            return Err(BetError::SpinPending);
        }

        let zone = self.registry.get(key).ok_or(BetError::UnknownZone)?;
        if amount > self.balance {
            tracing::debug!(%key, amount, balance = self.balance, "bet rejected");
            return Err(BetError::InsufficientFunds);
        }

        self.ledger.add(zone, amount);
        self.balance -= amount;
        tracing::debug!(%key, amount, balance = self.balance, "bet placed");

        Ok(())
    }

    /// Returns every stake to the balance and empties the ledger.
    ///
    /// Returns the amount refunded.
    ///
    /// # Errors
    ///
    /// Returns an error if a spin is in progress.
    pub fn clear_bets(&mut self) -> Result<u64, BetError> {
        if self.is_spinning() {
            return Err(BetError::SpinPending);
        }

        let refunded = self.ledger.clear();
        self.balance = self.balance.saturating_add(refunded);
        tracing::debug!(refunded, balance = self.balance, "bets cleared");

        Ok(refunded)
    }
}
