//! Wheel pockets, colours and variants.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::error::ConfigError;

/// Red numbers on a roulette wheel.
pub const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Highest numbered pocket.
pub const MAX_NUMBER: u8 = 36;

/// A single pocket on the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pocket {
    /// Single zero.
    Zero,
    /// Double zero (American wheel only).
    DoubleZero,
    /// A numbered pocket, `1..=36`.
    Number(u8),
}

/// Pocket colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Zero pockets.
    Green,
    /// Red numbers.
    Red,
    /// Black numbers.
    Black,
}

impl Pocket {
    /// Creates a pocket from a number, where `0` is the single zero.
    ///
    /// # Errors
    ///
    /// Returns an error if `number` is above 36.
    pub fn new(number: u8) -> Result<Self, ConfigError> {
        match number {
            0 => Ok(Self::Zero),
            1..=MAX_NUMBER => Ok(Self::Number(number)),
            _ => Err(ConfigError::InvalidPocket(number.to_string())),
        }
    }

    /// Returns the pocket number, or `None` for the zeros.
    #[must_use]
    pub const fn number(self) -> Option<u8> {
        match self {
            Self::Number(n) => Some(n),
            Self::Zero | Self::DoubleZero => None,
        }
    }

    /// Returns whether this is `0` or `00`.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Zero | Self::DoubleZero)
    }

    /// Returns the pocket colour.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Zero | Self::DoubleZero => Color::Green,
            Self::Number(n) if RED_NUMBERS.contains(&n) => Color::Red,
            Self::Number(_) => Color::Black,
        }
    }
}

impl fmt::Display for Pocket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => f.write_str("0"),
            Self::DoubleZero => f.write_str("00"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for Pocket {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "00" {
            return Ok(Self::DoubleZero);
        }
        s.parse::<u8>()
            .map_err(|_| ConfigError::InvalidPocket(s.to_string()))
            .and_then(Self::new)
    }
}

const fn n(number: u8) -> Pocket {
    Pocket::Number(number)
}

/// European wheel, clockwise from zero.
#[rustfmt::skip]
pub const EUROPEAN_WHEEL: [Pocket; 37] = [
    Pocket::Zero,
    n(32), n(15), n(19), n(4), n(21), n(2), n(25), n(17), n(34), n(6), n(27), n(13), n(36),
    n(11), n(30), n(8), n(23), n(10), n(5), n(24), n(16), n(33), n(1), n(20), n(14), n(31),
    n(9), n(22), n(18), n(29), n(7), n(28), n(12), n(35), n(3), n(26),
];

/// American wheel, clockwise from zero.
#[rustfmt::skip]
pub const AMERICAN_WHEEL: [Pocket; 38] = [
    Pocket::Zero,
    n(28), n(9), n(26), n(30), n(11), n(7), n(20), n(32), n(17), n(5), n(22), n(34), n(15),
    n(3), n(24), n(36), n(13), n(1),
    Pocket::DoubleZero,
    n(27), n(10), n(25), n(29), n(12), n(8), n(19), n(31), n(18), n(6), n(21), n(33), n(16),
    n(4), n(23), n(35), n(14), n(2),
];

/// Roulette wheel variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Single zero, 37 pockets.
    #[default]
    European,
    /// Zero and double zero, 38 pockets.
    American,
}

impl Variant {
    /// Pockets in physical wheel order.
    #[must_use]
    pub const fn wheel(self) -> &'static [Pocket] {
        match self {
            Self::European => &EUROPEAN_WHEEL,
            Self::American => &AMERICAN_WHEEL,
        }
    }

    /// The zero pockets of this wheel.
    #[must_use]
    pub const fn zeros(self) -> &'static [Pocket] {
        match self {
            Self::European => &[Pocket::Zero],
            Self::American => &[Pocket::Zero, Pocket::DoubleZero],
        }
    }

    /// Returns whether `pocket` exists on this wheel.
    #[must_use]
    pub fn has_pocket(self, pocket: Pocket) -> bool {
        match pocket {
            Pocket::Zero => true,
            Pocket::DoubleZero => self == Self::American,
            Pocket::Number(n) => (1..=MAX_NUMBER).contains(&n),
        }
    }
}
