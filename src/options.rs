//! Table configuration options.

use core::time::Duration;

use crate::roulette::Variant;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use casinors::BlackjackOptions;
///
/// let options = BlackjackOptions::default()
///     .with_dealer_stands_on(17)
///     .with_dealer_step_delay(Duration::from_millis(500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlackjackOptions {
    /// Total at or above which the dealer stands.
    pub dealer_stands_on: u8,
    /// Pause between automatic dealer draws.
    pub dealer_step_delay: Duration,
    /// Chips the player starts with.
    pub starting_balance: u64,
}

impl Default for BlackjackOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: 17,
            dealer_step_delay: Duration::from_secs(1),
            starting_balance: 1000,
        }
    }
}

impl BlackjackOptions {
    /// Sets the dealer stand threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use casinors::BlackjackOptions;
    ///
    /// let options = BlackjackOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the pause between automatic dealer draws.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use casinors::BlackjackOptions;
    ///
    /// let options = BlackjackOptions::default().with_dealer_step_delay(Duration::ZERO);
    /// assert_eq!(options.dealer_step_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_dealer_step_delay(mut self, delay: Duration) -> Self {
        self.dealer_step_delay = delay;
        self
    }

    /// Sets the player's starting chips.
    ///
    /// # Example
    ///
    /// ```
    /// use casinors::BlackjackOptions;
    ///
    /// let options = BlackjackOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: u64) -> Self {
        self.starting_balance = balance;
        self
    }
}

/// Configuration options for a roulette table.
///
/// ```
/// use casinors::{RouletteOptions, Variant};
///
/// let options = RouletteOptions::default()
///     .with_variant(Variant::American)
///     .with_starting_balance(500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouletteOptions {
    /// Wheel variant.
    pub variant: Variant,
    /// Balance the player starts with.
    pub starting_balance: u64,
    /// Number of recent results kept, newest first.
    pub history_len: usize,
    /// Pause between starting a spin and resolving it.
    pub spin_delay: Duration,
}

impl Default for RouletteOptions {
    fn default() -> Self {
        Self {
            variant: Variant::European,
            starting_balance: 1000,
            history_len: 10,
            spin_delay: Duration::from_secs(3),
        }
    }
}

impl RouletteOptions {
    /// Sets the wheel variant.
    ///
    /// # Example
    ///
    /// ```
    /// use casinors::{RouletteOptions, Variant};
    ///
    /// let options = RouletteOptions::default().with_variant(Variant::American);
    /// assert_eq!(options.variant, Variant::American);
    /// ```
    #[must_use]
    pub const fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use casinors::RouletteOptions;
    ///
    /// let options = RouletteOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: u64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets how many recent results are kept.
    ///
    /// # Example
    ///
    /// ```
    /// use casinors::RouletteOptions;
    ///
    /// let options = RouletteOptions::default().with_history_len(20);
    /// assert_eq!(options.history_len, 20);
    /// ```
    #[must_use]
    pub const fn with_history_len(mut self, len: usize) -> Self {
        self.history_len = len;
        self
    }

    /// Sets the pause between starting and resolving a spin.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use casinors::RouletteOptions;
    ///
    /// let options = RouletteOptions::default().with_spin_delay(Duration::from_secs(5));
    /// assert_eq!(options.spin_delay, Duration::from_secs(5));
    /// ```
    #[must_use]
    pub const fn with_spin_delay(mut self, delay: Duration) -> Self {
        self.spin_delay = delay;
        self
    }
}
