//! Catalog of every bet a table accepts.
//!
//! Inside bets are generated from the position of each number on the table
//! grid rather than from a fixed adjacency list. A number sits at
//! `(street, column)`; two numbers form a split when they share a street and
//! sit in neighbouring columns, or share a column in neighbouring streets.
//! Corners and lines extend the same idea to 2x2 blocks and street pairs.
//! The zeros sit outside the grid and get their own explicit zones.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::ConfigError;

use super::pocket::{MAX_NUMBER, Pocket, RED_NUMBERS, Variant};
use super::zone::{BetKind, BetZone, ZoneKey};

/// Shape of the numbered part of the table.
///
/// Numbers run across each street, so the number at `(street, column)` is
/// `street * columns + column + 1`.
///
/// Every bet family has a fixed pocket count (a street covers 3, a column
/// 12, red 18), so only the standard 12x3 grid yields a complete catalog.
/// Other grids are accepted here and rejected by
/// [`ZoneRegistry::with_layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableLayout {
    streets: u8,
    columns: u8,
}

impl TableLayout {
    /// The standard table: 12 streets of 3 numbers.
    pub const STANDARD: Self = Self {
        streets: 12,
        columns: 3,
    };

    /// Creates a layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is empty or holds more than 36 numbers.
    pub fn new(streets: u8, columns: u8) -> Result<Self, ConfigError> {
        let size = u16::from(streets) * u16::from(columns);
        if size == 0 || size > u16::from(MAX_NUMBER) {
            return Err(ConfigError::InvalidLayout { streets, columns });
        }
        Ok(Self { streets, columns })
    }

    /// Number of streets.
    #[must_use]
    pub const fn streets(&self) -> u8 {
        self.streets
    }

    /// Numbers per street.
    #[must_use]
    pub const fn columns(&self) -> u8 {
        self.columns
    }

    /// Highest number on the grid.
    #[must_use]
    pub const fn max_number(&self) -> u8 {
        self.streets * self.columns
    }

    /// The pocket at a grid position.
    #[must_use]
    pub const fn pocket(&self, street: u8, column: u8) -> Pocket {
        Pocket::Number(street * self.columns + column + 1)
    }

    fn numbers(&self) -> impl Iterator<Item = Pocket> {
        (1..=self.max_number()).map(Pocket::Number)
    }
}

impl Default for TableLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// The closed set of bet zones for one wheel variant and layout.
#[derive(Debug, Clone)]
pub struct ZoneRegistry {
    variant: Variant,
    layout: TableLayout,
    zones: Vec<BetZone>,
    index: HashMap<ZoneKey, usize>,
}

impl ZoneRegistry {
    /// Builds the catalog for a variant on the standard layout.
    ///
    /// # Errors
    ///
    /// Returns an error if a generated zone has an unsupported pocket count.
    pub fn new(variant: Variant) -> Result<Self, ConfigError> {
        Self::with_layout(variant, TableLayout::STANDARD)
    }

    /// Builds the catalog for a variant on a given layout.
    ///
    /// The payout table fixes the pocket count of every family, so
    /// [`TableLayout::STANDARD`] is the only layout that builds; any other
    /// grid produces a zone whose family and count disagree.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CoverageMismatch`] or
    /// [`ConfigError::UnsupportedCoverage`] for non-standard layouts.
    pub fn with_layout(variant: Variant, layout: TableLayout) -> Result<Self, ConfigError> {
        let mut registry = Self {
            variant,
            layout,
            zones: Vec::new(),
            index: HashMap::new(),
        };

        registry.add_straights()?;
        registry.add_splits()?;
        registry.add_streets()?;
        registry.add_corners()?;
        registry.add_lines()?;
        if layout == TableLayout::STANDARD {
            registry.add_zero_zones()?;
        }
        registry.add_dozens()?;
        registry.add_columns()?;
        registry.add_even_money()?;

        tracing::debug!(?variant, zones = registry.zones.len(), "bet zone catalog built");
        Ok(registry)
    }

    fn add(
        &mut self,
        kind: BetKind,
        pockets: impl IntoIterator<Item = Pocket>,
        label: &str,
    ) -> Result<(), ConfigError> {
        let zone = BetZone::new(ZoneKey::new(kind, pockets), label)?;
        if !self.index.contains_key(zone.key()) {
            self.index.insert(zone.key().clone(), self.zones.len());
            self.zones.push(zone);
        }
        Ok(())
    }

    fn add_straights(&mut self) -> Result<(), ConfigError> {
        let pockets: Vec<Pocket> = self
            .variant
            .zeros()
            .iter()
            .copied()
            .chain(self.layout.numbers())
            .collect();
        for pocket in pockets {
            self.add(BetKind::Straight, [pocket], &format!("{pocket}"))?;
        }
        Ok(())
    }

    fn add_splits(&mut self) -> Result<(), ConfigError> {
        let layout = self.layout;
        for street in 0..layout.streets() {
            for column in 0..layout.columns() {
                let here = layout.pocket(street, column);
                if column + 1 < layout.columns() {
                    let right = layout.pocket(street, column + 1);
                    self.add(BetKind::Split, [here, right], &format!("{here}/{right}"))?;
                }
                if street + 1 < layout.streets() {
                    let next = layout.pocket(street + 1, column);
                    self.add(BetKind::Split, [here, next], &format!("{here}/{next}"))?;
                }
            }
        }
        Ok(())
    }

    fn add_streets(&mut self) -> Result<(), ConfigError> {
        let layout = self.layout;
        for street in 0..layout.streets() {
            let pockets: Vec<Pocket> = (0..layout.columns())
                .map(|column| layout.pocket(street, column))
                .collect();
            let label = span_label(&pockets, "Street");
            self.add(BetKind::Street, pockets, &label)?;
        }
        Ok(())
    }

    fn add_corners(&mut self) -> Result<(), ConfigError> {
        let layout = self.layout;
        for street in 0..layout.streets().saturating_sub(1) {
            for column in 0..layout.columns().saturating_sub(1) {
                let pockets = [
                    layout.pocket(street, column),
                    layout.pocket(street, column + 1),
                    layout.pocket(street + 1, column),
                    layout.pocket(street + 1, column + 1),
                ];
                let label = joined_label(&pockets, "Corner");
                self.add(BetKind::Corner, pockets, &label)?;
            }
        }
        Ok(())
    }

    fn add_lines(&mut self) -> Result<(), ConfigError> {
        let layout = self.layout;
        for street in 0..layout.streets().saturating_sub(1) {
            let pockets: Vec<Pocket> = (street..=street + 1)
                .flat_map(|s| (0..layout.columns()).map(move |column| layout.pocket(s, column)))
                .collect();
            let label = span_label(&pockets, "Line");
            self.add(BetKind::Line, pockets, &label)?;
        }
        Ok(())
    }

    fn add_zero_zones(&mut self) -> Result<(), ConfigError> {
        use Pocket::{DoubleZero, Number, Zero};

        let (splits, trios, corners): (&[[Pocket; 2]], &[[Pocket; 3]], &[[Pocket; 4]]) =
            match self.variant {
                Variant::European => (
                    &[[Zero, Number(1)], [Zero, Number(2)], [Zero, Number(3)]],
                    &[[Zero, Number(1), Number(2)], [Zero, Number(2), Number(3)]],
                    &[[Zero, Number(1), Number(2), Number(3)]],
                ),
                Variant::American => (
                    &[
                        [Zero, DoubleZero],
                        [Zero, Number(1)],
                        [Zero, Number(2)],
                        [DoubleZero, Number(2)],
                        [DoubleZero, Number(3)],
                    ],
                    &[
                        [Zero, Number(1), Number(2)],
                        [Zero, DoubleZero, Number(2)],
                        [DoubleZero, Number(2), Number(3)],
                    ],
                    &[],
                ),
            };

        for pockets in splits {
            self.add(BetKind::Split, *pockets, &format!("{}/{}", pockets[0], pockets[1]))?;
        }
        for pockets in trios {
            self.add(BetKind::Street, *pockets, &joined_label(pockets, "Street"))?;
        }
        for pockets in corners {
            self.add(BetKind::Corner, *pockets, &joined_label(pockets, "Corner"))?;
        }
        Ok(())
    }

    fn add_dozens(&mut self) -> Result<(), ConfigError> {
        let numbers: Vec<Pocket> = self.layout.numbers().collect();
        for (index, dozen) in numbers.chunks(BetKind::Dozen.coverage()).enumerate() {
            let label = match index {
                0 => "1st 12",
                1 => "2nd 12",
                2 => "3rd 12",
                _ => "12",
            };
            self.add(BetKind::Dozen, dozen.iter().copied(), label)?;
        }
        Ok(())
    }

    fn add_columns(&mut self) -> Result<(), ConfigError> {
        let layout = self.layout;
        for column in 0..layout.columns() {
            let pockets: Vec<Pocket> = (0..layout.streets())
                .map(|street| layout.pocket(street, column))
                .collect();
            self.add(BetKind::Column, pockets, &format!("Column {}", column + 1))?;
        }
        Ok(())
    }

    fn add_even_money(&mut self) -> Result<(), ConfigError> {
        let max = self.layout.max_number();
        let half = max / 2;
        let families: [(BetKind, &str, fn(u8, u8) -> bool); 6] = [
            (BetKind::Low, "1-18", |n, half| n <= half),
            (BetKind::Even, "Even", |n, _| n % 2 == 0),
            (BetKind::Red, "Red", |n, _| RED_NUMBERS.contains(&n)),
            (BetKind::Black, "Black", |n, _| !RED_NUMBERS.contains(&n)),
            (BetKind::Odd, "Odd", |n, _| n % 2 == 1),
            (BetKind::High, "19-36", |n, half| n > half),
        ];

        for (kind, label, covers) in families {
            let pockets = (1..=max)
                .filter(|&n| covers(n, half))
                .map(Pocket::Number);
            self.add(kind, pockets, label)?;
        }
        Ok(())
    }

    /// Returns the wheel variant.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the table layout.
    #[must_use]
    pub const fn layout(&self) -> TableLayout {
        self.layout
    }

    /// Looks up a zone by key.
    #[must_use]
    pub fn get(&self, key: &ZoneKey) -> Option<&BetZone> {
        self.index.get(key).map(|&index| &self.zones[index])
    }

    /// Returns whether the catalog contains `key`.
    #[must_use]
    pub fn contains(&self, key: &ZoneKey) -> bool {
        self.index.contains_key(key)
    }

    /// Returns every zone in generation order.
    #[must_use]
    pub fn zones(&self) -> &[BetZone] {
        &self.zones
    }

    /// Returns the zones of one family.
    pub fn zones_of(&self, kind: BetKind) -> impl Iterator<Item = &BetZone> {
        self.zones.iter().filter(move |zone| zone.key().kind() == kind)
    }

    /// Returns the zones that win when `pocket` comes up.
    pub fn zones_covering(&self, pocket: Pocket) -> impl Iterator<Item = &BetZone> {
        self.zones.iter().filter(move |zone| zone.covers(pocket))
    }

    /// Returns the number of zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

fn span_label(pockets: &[Pocket], family: &str) -> String {
    match (pockets.first(), pockets.last()) {
        (Some(first), Some(last)) => format!("{first}-{last} {family}"),
        _ => family.to_string(),
    }
}

fn joined_label(pockets: &[Pocket], family: &str) -> String {
    let joined = pockets
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/");
    format!("{joined} {family}")
}
