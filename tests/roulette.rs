//! Roulette integration tests.

use casinors::{
    BetError, BetKind, BetZone, Color, ConfigError, Pocket, Roulette, RouletteOptions, SpinError,
    StepError, TableLayout, Variant, ZoneKey, ZoneRegistry, roulette::payout_multiplier,
};

fn table() -> Roulette {
    Roulette::new(RouletteOptions::default(), 7).unwrap()
}

fn american() -> Roulette {
    Roulette::new(RouletteOptions::default().with_variant(Variant::American), 7).unwrap()
}

fn key(text: &str) -> ZoneKey {
    text.parse().unwrap()
}

fn straight(number: u8) -> ZoneKey {
    ZoneKey::straight(Pocket::Number(number))
}

fn red() -> ZoneKey {
    ZoneKey::even_money(BetKind::Red).unwrap()
}

#[test]
fn wheels_hold_every_pocket_once() {
    for (variant, len) in [(Variant::European, 37), (Variant::American, 38)] {
        let mut pockets = variant.wheel().to_vec();
        assert_eq!(pockets.len(), len);
        pockets.sort();
        pockets.dedup();
        assert_eq!(pockets.len(), len);
        assert!(pockets.iter().all(|&pocket| variant.has_pocket(pocket)));
    }

    assert!(Variant::American.wheel().contains(&Pocket::DoubleZero));
    assert!(!Variant::European.wheel().contains(&Pocket::DoubleZero));
}

#[test]
fn pocket_colors_and_parsing() {
    assert_eq!(Pocket::Zero.color(), Color::Green);
    assert_eq!(Pocket::DoubleZero.color(), Color::Green);
    assert_eq!(Pocket::Number(1).color(), Color::Red);
    assert_eq!(Pocket::Number(2).color(), Color::Black);
    assert_eq!(Pocket::Number(36).color(), Color::Red);

    assert_eq!("00".parse::<Pocket>().unwrap(), Pocket::DoubleZero);
    assert_eq!("0".parse::<Pocket>().unwrap(), Pocket::Zero);
    assert_eq!("17".parse::<Pocket>().unwrap(), Pocket::Number(17));
    assert_eq!(
        "37".parse::<Pocket>().unwrap_err(),
        ConfigError::InvalidPocket("37".to_string())
    );
    assert_eq!(Pocket::DoubleZero.to_string(), "00");
}

#[test]
fn european_catalog_counts() {
    let registry = ZoneRegistry::new(Variant::European).unwrap();
    let count = |kind| registry.zones_of(kind).count();

    assert_eq!(count(BetKind::Straight), 37);
    assert_eq!(count(BetKind::Split), 60);
    assert_eq!(count(BetKind::Street), 14);
    assert_eq!(count(BetKind::Corner), 23);
    assert_eq!(count(BetKind::Line), 11);
    assert_eq!(count(BetKind::Dozen), 3);
    assert_eq!(count(BetKind::Column), 3);
    for kind in [
        BetKind::Red,
        BetKind::Black,
        BetKind::Odd,
        BetKind::Even,
        BetKind::Low,
        BetKind::High,
    ] {
        assert_eq!(count(kind), 1);
    }
    assert_eq!(registry.len(), 157);
}

#[test]
fn american_catalog_counts() {
    let registry = ZoneRegistry::new(Variant::American).unwrap();
    let count = |kind| registry.zones_of(kind).count();

    assert_eq!(count(BetKind::Straight), 38);
    assert_eq!(count(BetKind::Split), 62);
    assert_eq!(count(BetKind::Street), 15);
    assert_eq!(count(BetKind::Corner), 22);
    assert_eq!(registry.len(), 160);

    assert!(registry.contains(&key("split:0-00")));
    assert!(registry.contains(&key("street:00-2-3")));
    // The five-number top line is not offered.
    assert!(!registry.contains(&ZoneKey::new(
        BetKind::Line,
        [
            Pocket::Zero,
            Pocket::DoubleZero,
            Pocket::Number(1),
            Pocket::Number(2),
            Pocket::Number(3),
        ]
    )));
}

#[test]
fn every_zone_pays_by_coverage() {
    for variant in [Variant::European, Variant::American] {
        let registry = ZoneRegistry::new(variant).unwrap();
        for zone in registry.zones() {
            assert_eq!(zone.pockets().len(), zone.key().kind().coverage());
            assert_eq!(
                zone.multiplier(),
                payout_multiplier(zone.pockets().len()).unwrap()
            );
            assert!(zone.pockets().iter().all(|&p| variant.has_pocket(p)));
        }
    }

    let registry = ZoneRegistry::new(Variant::European).unwrap();
    assert_eq!(registry.get(&straight(17)).unwrap().multiplier(), 35);
    assert_eq!(registry.get(&key("split:1-2")).unwrap().multiplier(), 17);
    assert_eq!(registry.get(&key("street:1-2-3")).unwrap().multiplier(), 11);
    assert_eq!(registry.get(&key("corner:1-2-4-5")).unwrap().multiplier(), 8);
    assert_eq!(registry.get(&key("line:1-2-3-4-5-6")).unwrap().multiplier(), 5);
    assert_eq!(registry.get(&red()).unwrap().multiplier(), 1);
}

#[test]
fn catalog_follows_table_geometry() {
    let registry = ZoneRegistry::new(Variant::European).unwrap();

    assert!(registry.contains(&key("split:1-2")));
    assert!(registry.contains(&key("split:1-4")));
    assert!(registry.contains(&key("split:33-36")));
    assert!(!registry.contains(&key("split:3-4")));
    assert!(!registry.contains(&key("split:1-5")));

    assert!(registry.contains(&key("corner:2-3-5-6")));
    assert!(!registry.contains(&key("corner:3-4-6-7")));
    assert!(registry.contains(&key("corner:0-1-2-3")));

    let zero_zones: Vec<_> = registry.zones_covering(Pocket::Zero).collect();
    // straight, three splits, two trios, first four
    assert_eq!(zero_zones.len(), 7);

    let dozen = registry.zones_of(BetKind::Dozen).nth(1).unwrap();
    assert_eq!(dozen.label(), "2nd 12");
    assert!(dozen.covers(Pocket::Number(13)));
    assert!(dozen.covers(Pocket::Number(24)));

    let column = registry.zones_of(BetKind::Column).next().unwrap();
    assert!(column.covers(Pocket::Number(34)));
    assert!(!column.covers(Pocket::Number(35)));
}

#[test]
fn zone_keys_ignore_pocket_order() {
    let ordered = ZoneKey::new(BetKind::Corner, [1, 2, 4, 5].map(Pocket::Number));
    let shuffled = ZoneKey::new(BetKind::Corner, [5, 1, 4, 2].map(Pocket::Number));
    assert_eq!(ordered, shuffled);
    assert_eq!(key("corner:5-4-2-1"), ordered);
    assert_eq!(ordered.to_string(), "corner:1-2-4-5");

    assert_eq!(key("red"), red());
    assert_eq!(red().to_string(), "red");
    assert_eq!(key("straight:00"), ZoneKey::straight(Pocket::DoubleZero));

    assert!("corner".parse::<ZoneKey>().is_err());
    assert!("spread:1-2".parse::<ZoneKey>().is_err());
    assert!("split:1-x".parse::<ZoneKey>().is_err());
}

#[test]
fn zone_construction_checks_coverage() {
    assert_eq!(payout_multiplier(5), Err(ConfigError::UnsupportedCoverage(5)));

    let four = ZoneKey::new(BetKind::Street, [1, 2, 3, 4].map(Pocket::Number));
    assert_eq!(
        BetZone::new(four, "bad").unwrap_err(),
        ConfigError::CoverageMismatch {
            kind: BetKind::Street,
            expected: 3,
            actual: 4,
        }
    );

    let five = ZoneKey::new(BetKind::Line, [1, 2, 3, 4, 5].map(Pocket::Number));
    assert_eq!(
        BetZone::new(five, "bad").unwrap_err(),
        ConfigError::UnsupportedCoverage(5)
    );
}

#[test]
fn custom_layouts() {
    assert_eq!(
        TableLayout::new(0, 3).unwrap_err(),
        ConfigError::InvalidLayout {
            streets: 0,
            columns: 3
        }
    );
    assert!(TableLayout::new(13, 3).is_err());

    let small = TableLayout::new(4, 3).unwrap();
    assert_eq!(
        ZoneRegistry::with_layout(Variant::European, small).unwrap_err(),
        ConfigError::CoverageMismatch {
            kind: BetKind::Column,
            expected: 12,
            actual: 4,
        }
    );
}

#[test]
fn only_the_standard_layout_builds() {
    for streets in 1..=36 {
        for columns in 1..=36 {
            let Ok(layout) = TableLayout::new(streets, columns) else {
                continue;
            };
            let built = ZoneRegistry::with_layout(Variant::European, layout);
            assert_eq!(
                built.is_ok(),
                layout == TableLayout::STANDARD,
                "{streets}x{columns}"
            );
        }
    }
}

#[test]
fn straight_win_pays_thirty_five_to_one() {
    let mut table = table();
    table.place_bet(&straight(17), 10).unwrap();
    assert_eq!(table.balance(), 990);

    let outcome = table.apply_result(Pocket::Number(17)).unwrap();
    assert_eq!(outcome.winnings, 360);
    assert_eq!(outcome.staked, 10);
    assert_eq!(outcome.net(), 350);
    assert!(outcome.is_win());
    assert_eq!(outcome.winning_bets.len(), 1);
    assert_eq!(table.balance(), 1350);
    assert!(table.ledger().is_empty());
}

#[test]
fn red_win_pays_even_money() {
    let mut table = table();
    table.place_bet(&red(), 10).unwrap();

    let outcome = table.apply_result(Pocket::Number(1)).unwrap();
    assert_eq!(outcome.winnings, 20);
    assert_eq!(table.balance(), 1010);
}

#[test]
fn losing_bets_pay_nothing() {
    let mut table = table();
    table.place_bet(&straight(17), 10).unwrap();
    table.place_bet(&red(), 10).unwrap();

    let outcome = table.apply_result(Pocket::Zero).unwrap();
    assert_eq!(outcome.winnings, 0);
    assert_eq!(outcome.net(), -20);
    assert!(!outcome.is_win());
    assert_eq!(table.balance(), 980);
    assert_eq!(table.last_result(), Some(Pocket::Zero));
}

#[test]
fn mixed_bets_pay_only_covering_zones() {
    let mut table = table();
    table.place_bet(&straight(17), 10).unwrap();
    table.place_bet(&key("split:17-20"), 5).unwrap();
    table.place_bet(&red(), 10).unwrap();

    // 17 is black.
    let outcome = table.apply_result(Pocket::Number(17)).unwrap();
    assert_eq!(outcome.winnings, 360 + 90);
    assert_eq!(outcome.winning_bets.len(), 2);
    assert_eq!(table.balance(), 1000 - 25 + 450);
}

#[test]
fn repeated_bets_accumulate() {
    let mut table = table();
    table.place_bet(&straight(17), 5).unwrap();
    table.place_bet(&straight(17), 5).unwrap();

    assert_eq!(table.ledger().len(), 1);
    assert_eq!(table.ledger().get(&straight(17)).unwrap().amount(), 10);
    assert_eq!(table.total_staked(), 10);
    assert_eq!(table.balance(), 990);
}

#[test]
fn bet_validation() {
    let mut table = table();

    assert_eq!(table.place_bet(&straight(17), 0), Err(BetError::ZeroBet));
    assert_eq!(
        table.place_bet(&key("split:3-4"), 10),
        Err(BetError::UnknownZone)
    );
    assert_eq!(
        table.place_bet(&ZoneKey::straight(Pocket::DoubleZero), 10),
        Err(BetError::UnknownZone)
    );
    assert_eq!(
        table.place_bet(&straight(17), 1001),
        Err(BetError::InsufficientFunds)
    );
    assert_eq!(table.balance(), 1000);
    assert!(table.ledger().is_empty());

    table.place_bet(&straight(17), 1000).unwrap();
    assert_eq!(table.balance(), 0);
    assert_eq!(table.place_bet(&red(), 1), Err(BetError::InsufficientFunds));
}

#[test]
fn clearing_bets_refunds_stakes() {
    let mut table = table();
    table.place_bet(&straight(17), 10).unwrap();
    table.place_bet(&red(), 25).unwrap();

    assert_eq!(table.clear_bets(), Ok(35));
    assert_eq!(table.balance(), 1000);
    assert!(table.ledger().is_empty());
    assert_eq!(table.clear_bets(), Ok(0));
}

#[test]
fn spin_requires_bets() {
    let mut table = table();
    assert_eq!(table.spin().unwrap_err(), SpinError::NoBets);
    assert_eq!(table.start_spin().unwrap_err(), SpinError::NoBets);
    assert_eq!(
        table.apply_result(Pocket::Number(3)).unwrap_err(),
        SpinError::NoBets
    );
    assert!(table.history().is_empty());
}

#[test]
fn european_table_rejects_double_zero() {
    let mut table = table();
    table.place_bet(&red(), 10).unwrap();
    assert_eq!(
        table.apply_result(Pocket::DoubleZero).unwrap_err(),
        SpinError::NotOnWheel
    );
    assert_eq!(table.total_staked(), 10);

    let mut table = american();
    table.place_bet(&ZoneKey::straight(Pocket::DoubleZero), 10).unwrap();
    let outcome = table.apply_result(Pocket::DoubleZero).unwrap();
    assert_eq!(outcome.winnings, 360);
}

#[test]
fn history_keeps_ten_newest_results() {
    let mut table = table();
    let mut results = Vec::new();

    for _ in 0..11 {
        table.place_bet(&red(), 1).unwrap();
        let outcome = table.spin().unwrap();
        assert!(Variant::European.has_pocket(outcome.result));
        results.push(outcome.result);
    }

    let expected: Vec<Pocket> = results.iter().rev().take(10).copied().collect();
    assert_eq!(table.history(), expected.as_slice());
    assert_eq!(table.last_result(), results.last().copied());
}

#[test]
fn same_seed_spins_same_results() {
    let mut first = table();
    let mut second = table();
    for _ in 0..5 {
        first.place_bet(&red(), 1).unwrap();
        second.place_bet(&red(), 1).unwrap();
        assert_eq!(first.spin().unwrap().result, second.spin().unwrap().result);
    }
}

#[test]
fn pending_spin_freezes_ledger() {
    let mut table = table();
    table.place_bet(&red(), 10).unwrap();

    let ticket = table.start_spin().unwrap();
    assert_eq!(ticket.delay(), RouletteOptions::default().spin_delay);
    assert!(table.is_spinning());

    assert_eq!(table.place_bet(&red(), 10), Err(BetError::SpinPending));
    assert_eq!(table.clear_bets(), Err(BetError::SpinPending));
    assert_eq!(table.spin().unwrap_err(), SpinError::SpinPending);
    assert_eq!(table.start_spin().unwrap_err(), SpinError::SpinPending);

    let outcome = table.complete_spin(&ticket).unwrap();
    assert_eq!(outcome.staked, 10);
    assert!(!table.is_spinning());
    assert_eq!(table.history().len(), 1);

    assert_eq!(table.complete_spin(&ticket).unwrap_err(), StepError::Stale);
    assert_eq!(table.history().len(), 1);
}

#[test]
fn cancelled_spin_cannot_complete() {
    let mut table = table();
    table.place_bet(&red(), 10).unwrap();

    let ticket = table.start_spin().unwrap();
    assert!(table.cancel_spin());
    assert!(!table.cancel_spin());

    assert_eq!(table.complete_spin(&ticket).unwrap_err(), StepError::Stale);
    assert_eq!(table.total_staked(), 10);
    assert_eq!(table.balance(), 990);
    assert_eq!(table.last_result(), None);

    table.place_bet(&red(), 10).unwrap();
    let fresh = table.start_spin().unwrap();
    assert_eq!(table.complete_spin(&ticket).unwrap_err(), StepError::Stale);
    assert_eq!(table.complete_spin(&fresh).unwrap().staked, 20);
}

#[test]
fn chips_are_conserved_between_spins() {
    let mut table = table();
    let total = |table: &Roulette| table.balance() + table.total_staked();

    table.place_bet(&straight(5), 40).unwrap();
    assert_eq!(total(&table), 1000);
    table.place_bet(&key("line:1-2-3-4-5-6"), 60).unwrap();
    assert_eq!(total(&table), 1000);
    let _ = table.place_bet(&red(), 5000);
    assert_eq!(total(&table), 1000);
    table.clear_bets().unwrap();
    assert_eq!(total(&table), 1000);
}

#[test]
fn options_builder_configures_table() {
    let options = RouletteOptions::default()
        .with_variant(Variant::American)
        .with_starting_balance(50)
        .with_history_len(3);
    let mut table = Roulette::new(options, 1).unwrap();

    assert_eq!(table.balance(), 50);
    assert_eq!(table.registry().variant(), Variant::American);

    for _ in 0..5 {
        table.place_bet(&red(), 1).unwrap();
        table.spin().unwrap();
    }
    assert_eq!(table.history().len(), 3);
}

#[test]
fn huge_stakes_saturate_instead_of_overflowing() {
    let options = RouletteOptions::default().with_starting_balance(u64::MAX);
    let mut table = Roulette::new(options, 7).unwrap();
    table.place_bet(&straight(17), u64::MAX / 2).unwrap();
    table.place_bet(&key("split:17-20"), u64::MAX / 2).unwrap();
    assert_eq!(table.total_staked(), u64::MAX - 1);

    let outcome = table.apply_result(Pocket::Number(17)).unwrap();
    assert_eq!(outcome.winning_bets.len(), 2);
    assert_eq!(outcome.winnings, u64::MAX);
    assert_eq!(outcome.staked, u64::MAX - 1);
    assert_eq!(outcome.net(), 0);
    assert_eq!(table.balance(), u64::MAX);
}
