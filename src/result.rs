//! Round result types.

use alloc::vec::Vec;

use crate::roulette::{Pocket, ZoneKey};

/// Result of a settled blackjack round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher total).
    PlayerWin,
    /// Dealer wins (player busts or dealer has the higher total).
    DealerWin,
    /// Equal totals.
    Push,
}

impl Outcome {
    /// Compares two final totals.
    ///
    /// A player bust loses even when the dealer also busts. Card counts are
    /// never considered.
    #[must_use]
    pub const fn from_totals(player: u8, dealer: u8) -> Self {
        if player > crate::hand::BLACKJACK {
            Self::DealerWin
        } else if dealer > crate::hand::BLACKJACK || player > dealer {
            Self::PlayerWin
        } else if dealer > player {
            Self::DealerWin
        } else {
            Self::Push
        }
    }
}

/// A winning roulette bet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BetResult {
    /// The zone that won.
    pub key: ZoneKey,
    /// The amount staked on the zone.
    pub amount: u64,
    /// Stake plus net winnings.
    pub payout: u64,
}

/// Result of a resolved spin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinOutcome {
    /// The winning pocket.
    pub result: Pocket,
    /// Total staked on the spin.
    pub staked: u64,
    /// Total credited back to the balance.
    pub winnings: u64,
    /// Bets that covered the winning pocket.
    pub winning_bets: Vec<BetResult>,
}

impl SpinOutcome {
    /// Returns whether any bet covered the result.
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.winning_bets.is_empty()
    }

    /// Net result (positive = profit, negative = loss), clamped to `i64`.
    #[must_use]
    pub fn net(&self) -> i64 {
        let winnings = i64::try_from(self.winnings).unwrap_or(i64::MAX);
        let staked = i64::try_from(self.staked).unwrap_or(i64::MAX);
        winnings.saturating_sub(staked)
    }
}
