//! Bet ledger and payout resolution.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::result::BetResult;

use super::pocket::Pocket;
use super::zone::{BetZone, ZoneKey};

/// Chips staked on one zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bet {
    key: ZoneKey,
    amount: u64,
    multiplier: u32,
}

impl Bet {
    /// Returns the zone key.
    #[must_use]
    pub const fn key(&self) -> &ZoneKey {
        &self.key
    }

    /// Returns the amount staked.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.amount
    }

    /// Returns the net payout multiplier of the zone.
    #[must_use]
    pub const fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// Returns the covered pockets.
    #[must_use]
    pub fn pockets(&self) -> &[Pocket] {
        self.key.pockets()
    }

    /// Stake plus net winnings if `result` comes up, otherwise zero.
    #[must_use]
    pub fn payout(&self, result: Pocket) -> u64 {
        if self.key.covers(result) {
            self.amount
                .saturating_mul(u64::from(self.multiplier))
                .saturating_add(self.amount)
        } else {
            0
        }
    }
}

/// Bets for the current spin, at most one entry per zone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BetLedger {
    bets: BTreeMap<ZoneKey, Bet>,
}

/// The winnings a ledger pays for one result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Total stake plus net winnings of the covering bets.
    pub winnings: u64,
    /// The covering bets.
    pub winners: Vec<BetResult>,
}

impl BetLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bets: BTreeMap::new(),
        }
    }

    /// Adds `amount` to the bet on `zone`, creating it if needed.
    pub fn add(&mut self, zone: &BetZone, amount: u64) {
        self.bets
            .entry(zone.key().clone())
            .and_modify(|bet| bet.amount = bet.amount.saturating_add(amount))
            .or_insert_with(|| Bet {
                key: zone.key().clone(),
                amount,
                multiplier: zone.multiplier(),
            });
    }

    /// Returns the bet on `key`, if any.
    #[must_use]
    pub fn get(&self, key: &ZoneKey) -> Option<&Bet> {
        self.bets.get(key)
    }

    /// Returns the bets ordered by zone key.
    pub fn iter(&self) -> impl Iterator<Item = &Bet> {
        self.bets.values()
    }

    /// Returns the total amount staked.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.bets
            .values()
            .fold(0u64, |total, bet| total.saturating_add(bet.amount))
    }

    /// Returns the number of zones bet on.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bets.len()
    }

    /// Returns whether no bets are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }

    /// Empties the ledger, returning the total that was staked.
    pub fn clear(&mut self) -> u64 {
        let total = self.total();
        self.bets.clear();
        total
    }

    /// Computes what the ledger pays if `result` comes up.
    ///
    /// Losing bets contribute nothing; their stakes were taken when placed.
    #[must_use]
    pub fn resolve(&self, result: Pocket) -> Resolution {
        let winners: Vec<BetResult> = self
            .bets
            .values()
            .filter(|bet| bet.key.covers(result))
            .map(|bet| BetResult {
                key: bet.key.clone(),
                amount: bet.amount,
                payout: bet.payout(result),
            })
            .collect();
        let winnings = winners
            .iter()
            .fold(0u64, |total, winner| total.saturating_add(winner.payout));

        Resolution { winnings, winners }
    }
}

impl<'a> IntoIterator for &'a BetLedger {
    type Item = &'a Bet;
    type IntoIter = alloc::collections::btree_map::Values<'a, ZoneKey, Bet>;

    fn into_iter(self) -> Self::IntoIter {
        self.bets.values()
    }
}
