//! CLI casino example: blackjack and roulette on one terminal.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use casinors::{
    Blackjack, BlackjackOptions, Card, Color, Hand, Outcome, Phase, Pocket, Roulette,
    RouletteOptions, SpinOutcome, Suit, Variant, ZoneKey,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    println!("Casino CLI example (type 'q' to quit)");
    loop {
        match prompt_line("Game? [b]lackjack [r]oulette [a]merican roulette: ").as_str() {
            "b" | "blackjack" => play_blackjack(seed),
            "r" | "roulette" => play_roulette(seed, Variant::European),
            "a" | "american" => play_roulette(seed, Variant::American),
            "q" | "quit" => {
                println!("Goodbye.");
                return;
            }
            _ => println!("Unknown game."),
        }
    }
}

fn play_blackjack(seed: u64) {
    let mut table = Blackjack::new(BlackjackOptions::default(), seed);

    loop {
        let balance = table.balance();
        if balance == 0 {
            println!("You are out of chips. Game over.");
            return;
        }

        let Some(bet) = prompt_u64(&format!("Bet amount (1-{balance}, 0 to quit): ")) else {
            return;
        };
        if bet == 0 {
            table.reset_game();
            return;
        }
        if let Err(err) = table.deal_with_bet(bet) {
            println!("Bet error: {err}");
            continue;
        }

        while table.phase() == Phase::PlayerTurn {
            print_blackjack(&table);
            let result = match prompt_line("Action: [h]it [s]tand: ").as_str() {
                "h" | "hit" => table.hit().map(|card| {
                    if card.is_none() {
                        println!("No card drawn.");
                    }
                }),
                "s" | "stand" => table.stand().map(|pending| {
                    let mut next = pending;
                    while let Some(step) = next {
                        thread::sleep(step.delay());
                        next = match table.dealer_step(&step) {
                            Ok(draw) => {
                                println!("Dealer draws {}.", format_card(&draw.card));
                                draw.next
                            }
                            Err(err) => {
                                println!("Dealer error: {err}");
                                None
                            }
                        };
                    }
                }),
                "q" | "quit" => {
                    table.reset_game();
                    return;
                }
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        print_blackjack(&table);
        match table.outcome() {
            Some(Outcome::PlayerWin) => println!("You win!"),
            Some(Outcome::DealerWin) => println!("Dealer wins."),
            Some(Outcome::Push) => println!("Push."),
            None => {}
        }
        if let Some(payout) = table.payout() {
            println!("Payout {payout} | balance {}", table.balance());
        }
    }
}

fn play_roulette(seed: u64, variant: Variant) {
    let options = RouletteOptions::default().with_variant(variant);
    let mut table = match Roulette::new(options, seed) {
        Ok(table) => table,
        Err(err) => {
            println!("Table error: {err}");
            return;
        }
    };

    println!("Bets look like 'straight:17 10', 'corner:1-2-4-5 5' or 'red 20'.");
    println!("Commands: [s]pin, [c]lear, [z]ones, [q]uit");

    loop {
        println!(
            "\nBalance {} | staked {} | history {}",
            table.balance(),
            table.total_staked(),
            format_history(table.history())
        );
        if table.balance() == 0 && table.ledger().is_empty() {
            println!("You are out of chips. Game over.");
            return;
        }

        let input = prompt_line("> ");
        match input.as_str() {
            "s" | "spin" => match table.start_spin() {
                Ok(ticket) => {
                    println!("No more bets...");
                    thread::sleep(ticket.delay());
                    match table.complete_spin(&ticket) {
                        Ok(outcome) => print_spin(&outcome),
                        Err(err) => println!("Spin error: {err}"),
                    }
                }
                Err(err) => println!("Spin error: {err}"),
            },
            "c" | "clear" => match table.clear_bets() {
                Ok(refunded) => println!("Refunded {refunded}."),
                Err(err) => println!("Bet error: {err}"),
            },
            "z" | "zones" => {
                for zone in table.registry().zones() {
                    println!("{:<22} {:<18} pays {}:1", zone.key(), zone.label(), zone.multiplier());
                }
            }
            "q" | "quit" => {
                let _ = table.cancel_spin();
                return;
            }
            _ => place_bet(&mut table, &input),
        }
    }
}

fn place_bet(table: &mut Roulette, input: &str) {
    let Some((zone, amount)) = input.split_once(' ') else {
        println!("Unknown command.");
        return;
    };
    let key = match zone.parse::<ZoneKey>() {
        Ok(key) => key,
        Err(err) => {
            println!("{err}");
            return;
        }
    };
    let Ok(amount) = amount.trim().parse::<u64>() else {
        println!("Please enter a number.");
        return;
    };

    match table.place_bet(&key, amount) {
        Ok(()) => println!("Bet {amount} on {key}."),
        Err(err) => println!("Bet error: {err}"),
    }
}

fn print_spin(outcome: &SpinOutcome) {
    println!("Result: {}", format_pocket(outcome.result));
    for bet in &outcome.winning_bets {
        println!("  {} pays {}", bet.key, bet.payout);
    }
    println!("Winnings {} (net {})", outcome.winnings, outcome.net());
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn prompt_u64(prompt: &str) -> Option<u64> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_blackjack(table: &Blackjack) {
    println!(
        "\nDeck: {} cards remaining | stake {}",
        table.remaining_deck_size(),
        table.stake()
    );

    let dealer = table.dealer_hand();
    println!("Dealer: {} (value {})", format_hand(dealer), dealer.value());

    let player = table.player_hand();
    println!("You:    {} (value {})\n", format_hand(player), player.value());
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };
    colorize(&format!("{}{suit}", card.rank.short_name()), color_code)
}

fn format_pocket(pocket: Pocket) -> String {
    let code = match pocket.color() {
        Color::Green => "32",
        Color::Red => "31",
        Color::Black => "90",
    };
    colorize(&pocket.to_string(), code)
}

fn format_history(history: &[Pocket]) -> String {
    if history.is_empty() {
        return "-".to_string();
    }
    history
        .iter()
        .map(|&pocket| format_pocket(pocket))
        .collect::<Vec<_>>()
        .join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
