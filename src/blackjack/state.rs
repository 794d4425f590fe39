//! Round phase types.

/// Blackjack round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// No round in progress.
    #[default]
    Idle,
    /// Cards are dealt and the player may hit or stand.
    PlayerTurn,
    /// The dealer plays out their hand.
    DealerTurn,
    /// Round has ended; see [`Blackjack::outcome`](super::Blackjack::outcome).
    Settled,
}

impl Phase {
    /// Alias for [`Phase::PlayerTurn`], the phase right after dealing.
    pub const DEALT: Self = Self::PlayerTurn;

    /// Returns whether the round has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Settled)
    }
}
