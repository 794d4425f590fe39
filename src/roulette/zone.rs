//! Bet zones and their identifiers.

use core::fmt;
use core::str::FromStr;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::ConfigError;

use super::pocket::{MAX_NUMBER, Pocket, RED_NUMBERS};

/// Bet family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BetKind {
    /// A single pocket.
    Straight,
    /// Two adjacent pockets.
    Split,
    /// Three pockets across one street (or a zero trio).
    Street,
    /// Four pockets meeting at a corner (or the first four).
    Corner,
    /// Two adjacent streets.
    Line,
    /// 1-12, 13-24 or 25-36.
    Dozen,
    /// One of the three table columns.
    Column,
    /// Red numbers.
    Red,
    /// Black numbers.
    Black,
    /// Odd numbers.
    Odd,
    /// Even numbers.
    Even,
    /// 1-18.
    Low,
    /// 19-36.
    High,
}

impl BetKind {
    /// All bet families.
    pub const ALL: [Self; 13] = [
        Self::Straight,
        Self::Split,
        Self::Street,
        Self::Corner,
        Self::Line,
        Self::Dozen,
        Self::Column,
        Self::Red,
        Self::Black,
        Self::Odd,
        Self::Even,
        Self::Low,
        Self::High,
    ];

    /// Number of pockets a zone of this family covers.
    #[must_use]
    pub const fn coverage(self) -> usize {
        match self {
            Self::Straight => 1,
            Self::Split => 2,
            Self::Street => 3,
            Self::Corner => 4,
            Self::Line => 6,
            Self::Dozen | Self::Column => 12,
            Self::Red | Self::Black | Self::Odd | Self::Even | Self::Low | Self::High => 18,
        }
    }

    /// Returns whether this is one of the 1:1 outside bets.
    #[must_use]
    pub const fn is_even_money(self) -> bool {
        self.coverage() == 18
    }

    /// Lowercase name of the family.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Straight => "straight",
            Self::Split => "split",
            Self::Street => "street",
            Self::Corner => "corner",
            Self::Line => "line",
            Self::Dozen => "dozen",
            Self::Column => "column",
            Self::Red => "red",
            Self::Black => "black",
            Self::Odd => "odd",
            Self::Even => "even",
            Self::Low => "low",
            Self::High => "high",
        }
    }

    /// The numbers an even-money family covers.
    ///
    /// Returns `None` for families whose pockets depend on position.
    #[must_use]
    pub fn even_money_numbers(self) -> Option<Vec<Pocket>> {
        let numbers = (1..=MAX_NUMBER).filter(move |&n| match self {
            Self::Red => RED_NUMBERS.contains(&n),
            Self::Black => !RED_NUMBERS.contains(&n),
            Self::Odd => n % 2 == 1,
            Self::Even => n % 2 == 0,
            Self::Low => n <= MAX_NUMBER / 2,
            Self::High => n > MAX_NUMBER / 2,
            _ => false,
        });
        self.is_even_money()
            .then(|| numbers.map(Pocket::Number).collect())
    }
}

impl fmt::Display for BetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BetKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::InvalidZoneKey(s.to_string()))
    }
}

/// Returns the net payout multiplier for a zone covering `count` pockets.
///
/// # Errors
///
/// Returns an error for counts no bet family covers.
pub fn payout_multiplier(count: usize) -> Result<u32, ConfigError> {
    match count {
        1 => Ok(35),
        2 => Ok(17),
        3 => Ok(11),
        4 => Ok(8),
        6 => Ok(5),
        12 => Ok(2),
        18 => Ok(1),
        _ => Err(ConfigError::UnsupportedCoverage(count)),
    }
}

/// Identifies a bet zone by family and covered pockets.
///
/// Pockets are kept sorted and de-duplicated, so two keys built from the same
/// pockets in any order are equal.
///
/// The text form is `family:p1-p2-...` (`corner:1-2-4-5`, `straight:00`).
/// Even-money zones print and parse as the bare family name (`red`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZoneKey {
    kind: BetKind,
    pockets: Vec<Pocket>,
}

impl ZoneKey {
    /// Creates a key from a family and the pockets it covers.
    pub fn new(kind: BetKind, pockets: impl IntoIterator<Item = Pocket>) -> Self {
        let mut pockets: Vec<Pocket> = pockets.into_iter().collect();
        pockets.sort_unstable();
        pockets.dedup();
        Self { kind, pockets }
    }

    /// Key for a straight bet on `pocket`.
    #[must_use]
    pub fn straight(pocket: Pocket) -> Self {
        Self::new(BetKind::Straight, [pocket])
    }

    /// Key for an even-money bet (red, black, odd, even, low, high).
    ///
    /// Returns `None` for other families.
    #[must_use]
    pub fn even_money(kind: BetKind) -> Option<Self> {
        kind.even_money_numbers()
            .map(|numbers| Self::new(kind, numbers))
    }

    /// Returns the bet family.
    #[must_use]
    pub const fn kind(&self) -> BetKind {
        self.kind
    }

    /// Returns the covered pockets, sorted.
    #[must_use]
    pub fn pockets(&self) -> &[Pocket] {
        &self.pockets
    }

    /// Returns whether the zone covers `pocket`.
    #[must_use]
    pub fn covers(&self, pocket: Pocket) -> bool {
        self.pockets.binary_search(&pocket).is_ok()
    }

    /// Returns the number of covered pockets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pockets.len()
    }

    /// Returns whether the key covers no pockets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pockets.is_empty()
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_even_money() {
            return f.write_str(self.kind.name());
        }

        write!(f, "{}:", self.kind)?;
        for (index, pocket) in self.pockets.iter().enumerate() {
            if index > 0 {
                f.write_str("-")?;
            }
            write!(f, "{pocket}")?;
        }
        Ok(())
    }
}

impl FromStr for ZoneKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidZoneKey(s.to_string());

        let Some((kind, pockets)) = s.split_once(':') else {
            let kind: BetKind = s.parse().map_err(|_| invalid())?;
            return Self::even_money(kind).ok_or_else(invalid);
        };

        let kind: BetKind = kind.parse().map_err(|_| invalid())?;
        let pockets = pockets
            .split('-')
            .map(|pocket| pocket.trim().parse::<Pocket>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(kind, pockets))
    }
}

/// An entry in a table's bet catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BetZone {
    key: ZoneKey,
    multiplier: u32,
    label: String,
}

impl BetZone {
    /// Creates a zone, deriving its payout from the number of pockets.
    ///
    /// # Errors
    ///
    /// Returns an error if no payout exists for the pocket count, or the
    /// family covers a different number of pockets.
    pub fn new(key: ZoneKey, label: impl Into<String>) -> Result<Self, ConfigError> {
        let multiplier = payout_multiplier(key.len())?;
        let expected = key.kind().coverage();
        if expected != key.len() {
            return Err(ConfigError::CoverageMismatch {
                kind: key.kind(),
                expected,
                actual: key.len(),
            });
        }

        Ok(Self {
            key,
            multiplier,
            label: label.into(),
        })
    }

    /// Returns the zone key.
    #[must_use]
    pub const fn key(&self) -> &ZoneKey {
        &self.key
    }

    /// Returns the net payout multiplier (35 for a straight, 1 for red).
    #[must_use]
    pub const fn multiplier(&self) -> u32 {
        self.multiplier
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the covered pockets.
    #[must_use]
    pub fn pockets(&self) -> &[Pocket] {
        self.key.pockets()
    }

    /// Returns whether the zone covers `pocket`.
    #[must_use]
    pub fn covers(&self, pocket: Pocket) -> bool {
        self.key.covers(pocket)
    }
}
