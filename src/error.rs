//! Error types for game operations.

use alloc::string::String;

use thiserror::Error;

use crate::roulette::BetKind;

/// Invalid construction input. These are never recoverable at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Unknown card rank.
    #[error("invalid card rank `{0}` (expected 2-10, jack, queen, king or ace)")]
    InvalidRank(String),
    /// Unknown card suit.
    #[error("invalid card suit `{0}` (expected clubs, diamonds, hearts or spades)")]
    InvalidSuit(String),
    /// The same card appears twice in a deck.
    #[error("duplicate card `{0}` in deck")]
    DuplicateCard(String),
    /// A deck larger than a single standard deck.
    #[error("deck holds {0} cards, more than a standard deck")]
    OversizedDeck(usize),
    /// Pocket is not a roulette number.
    #[error("invalid pocket `{0}` (expected 0, 00 or 1-36)")]
    InvalidPocket(String),
    /// Table grid is empty or has more numbers than the wheel.
    #[error("invalid table layout of {streets} streets by {columns} columns")]
    InvalidLayout {
        /// Streets requested.
        streets: u8,
        /// Columns requested.
        columns: u8,
    },
    /// Zone key text could not be parsed.
    #[error("invalid zone key `{0}`")]
    InvalidZoneKey(String),
    /// No payout is defined for a zone covering this many pockets.
    #[error("unsupported zone covering {0} pockets")]
    UnsupportedCoverage(usize),
    /// The zone family does not match the number of pockets covered.
    #[error("{kind} zone must cover {expected} pockets, got {actual}")]
    CoverageMismatch {
        /// The zone family.
        kind: BetKind,
        /// Pockets the family covers.
        expected: usize,
        /// Pockets supplied.
        actual: usize,
    },
}

/// Errors that can occur when dealing a blackjack round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards to deal two to each side.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during blackjack player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round phase for this action.
    #[error("invalid game state for this action")]
    InvalidState,
}

/// Errors returned when a scheduled continuation is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// The continuation belongs to a superseded round or was already used.
    #[error("continuation is stale")]
    Stale,
}

/// Errors that can occur when placing or clearing bets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// The zone key is not in the table's catalog.
    #[error("unknown bet zone")]
    UnknownZone,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The ledger is frozen while a spin is pending.
    #[error("a spin is in progress")]
    SpinPending,
    /// Blackjack wagers are only taken between rounds.
    #[error("a round is in progress")]
    RoundInProgress,
}

/// Errors that can occur when spinning the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpinError {
    /// No bets have been placed.
    #[error("place at least one bet before spinning")]
    NoBets,
    /// A spin is already in progress.
    #[error("a spin is in progress")]
    SpinPending,
    /// The pocket does not exist on this wheel.
    #[error("pocket is not on this wheel")]
    NotOnWheel,
}
