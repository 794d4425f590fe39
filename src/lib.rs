//! Blackjack and roulette game-logic engines with optional `no_std` support.
//!
//! The crate holds the rules of a casino front end and nothing else: a
//! [`Blackjack`] table that deals, evaluates hands, plays the dealer and
//! settles the round, and a [`Roulette`] table that catalogs every bet zone,
//! keeps the bet ledger and pays out spins. A presentation layer sends
//! commands and reads the session state back.
//!
//! Timed steps (the dealer drawing one card per second, the wheel spinning
//! for a few seconds) are handed to the host as [`Continuation`]s. A
//! continuation outlived by its round is rejected, so stale timers never
//! touch a newer round.
//!
//! # Example
//!
//! ```
//! use casinors::{Blackjack, BlackjackOptions, Phase};
//!
//! let mut table = Blackjack::new(BlackjackOptions::default(), 42);
//! table.deal();
//! assert_eq!(table.player_hand().len(), 2);
//!
//! if table.stand().unwrap().is_some() {
//!     table.play_dealer().unwrap();
//! }
//! assert_eq!(table.phase(), Phase::Settled);
//! assert!(table.outcome().is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod blackjack;
pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod roulette;
pub mod schedule;

// Re-export main types
pub use blackjack::{Blackjack, DealerDraw, Phase};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, BetError, ConfigError, DealError, SpinError, StepError};
pub use hand::{BLACKJACK, Hand};
pub use options::{BlackjackOptions, RouletteOptions};
pub use result::{BetResult, Outcome, SpinOutcome};
pub use roulette::{
    Bet, BetKind, BetLedger, BetZone, Color, Pocket, Roulette, TableLayout, Variant, ZoneKey,
    ZoneRegistry,
};
pub use schedule::Continuation;
