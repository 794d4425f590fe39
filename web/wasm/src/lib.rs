use casinors::{
    Blackjack, BlackjackOptions, Card, Continuation, Hand, Outcome, Phase, Pocket, Roulette,
    RouletteOptions, SpinOutcome, Variant, ZoneKey,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// A pending timed step. The host waits `delay_ms` and hands it back.
#[wasm_bindgen]
pub struct JsContinuation(Continuation);

#[wasm_bindgen]
impl JsContinuation {
    pub fn delay_ms(&self) -> u32 {
        u32::try_from(self.0.delay().as_millis()).unwrap_or(u32::MAX)
    }
}

#[wasm_bindgen]
pub struct WasmBlackjack {
    table: Blackjack,
}

#[wasm_bindgen]
impl WasmBlackjack {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            table: Blackjack::new(BlackjackOptions::default(), u64::from(seed)),
        }
    }

    pub fn deal(&mut self) {
        self.table.deal();
    }

    pub fn bet(&mut self, amount: u32) -> Result<(), JsValue> {
        self.table.bet(u64::from(amount)).map_err(js_err)
    }

    pub fn clear_bet(&mut self) -> u32 {
        chips(self.table.clear_bet())
    }

    pub fn deal_with_bet(&mut self, amount: u32) -> Result<(), JsValue> {
        self.table.deal_with_bet(u64::from(amount)).map_err(js_err)
    }

    pub fn hit(&mut self) -> Result<(), JsValue> {
        self.table.hit().map(|_| ()).map_err(js_err)
    }

    pub fn stand(&mut self) -> Result<Option<JsContinuation>, JsValue> {
        self.table
            .stand()
            .map(|next| next.map(JsContinuation))
            .map_err(js_err)
    }

    /// Draws one dealer card. Stale continuations are ignored and yield
    /// `undefined`.
    pub fn dealer_step(&mut self, continuation: &JsContinuation) -> Option<JsContinuation> {
        self.table
            .dealer_step(&continuation.0)
            .ok()
            .and_then(|draw| draw.next)
            .map(JsContinuation)
    }

    pub fn play_dealer(&mut self) -> Result<(), JsValue> {
        self.table.play_dealer().map(|_| ()).map_err(js_err)
    }

    pub fn reset_game(&mut self) {
        self.table.reset_game();
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = BlackjackSnapshot {
            phase: phase_to_str(self.table.phase()),
            player: JsHand::from(self.table.player_hand()),
            dealer: JsHand::from(self.table.dealer_hand()),
            outcome: self.table.outcome().map(outcome_to_str),
            balance: chips(self.table.balance()),
            pending_bet: chips(self.table.pending_bet()),
            stake: chips(self.table.stake()),
            payout: self.table.payout().map(chips),
            cards_remaining: u32::try_from(self.table.remaining_deck_size()).unwrap_or(u32::MAX),
        };

        to_js_value(&snapshot)
    }
}

#[wasm_bindgen]
pub struct WasmRoulette {
    table: Roulette,
}

#[wasm_bindgen]
impl WasmRoulette {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, american: bool) -> Result<WasmRoulette, JsValue> {
        let variant = if american {
            Variant::American
        } else {
            Variant::European
        };
        let options = RouletteOptions::default().with_variant(variant);
        Roulette::new(options, u64::from(seed))
            .map(|table| Self { table })
            .map_err(js_err)
    }

    /// Places a bet on a zone key such as `"corner:1-2-4-5"` or `"red"`.
    pub fn place_bet(&mut self, zone: &str, amount: u32) -> Result<(), JsValue> {
        let key: ZoneKey = zone.parse().map_err(js_err)?;
        self.table
            .place_bet(&key, u64::from(amount))
            .map_err(js_err)
    }

    pub fn clear_bets(&mut self) -> Result<u32, JsValue> {
        self.table
            .clear_bets()
            .map(chips)
            .map_err(js_err)
    }

    pub fn start_spin(&mut self) -> Result<JsContinuation, JsValue> {
        self.table
            .start_spin()
            .map(JsContinuation)
            .map_err(js_err)
    }

    pub fn complete_spin(&mut self, continuation: &JsContinuation) -> Result<JsValue, JsValue> {
        let outcome = self.table.complete_spin(&continuation.0).map_err(js_err)?;
        to_js_value(&JsSpinOutcome::from(&outcome))
    }

    pub fn cancel_spin(&mut self) -> bool {
        self.table.cancel_spin()
    }

    pub fn zones(&self) -> Result<JsValue, JsValue> {
        let zones: Vec<JsZone> = self
            .table
            .registry()
            .zones()
            .iter()
            .map(|zone| JsZone {
                key: zone.key().to_string(),
                label: zone.label().to_string(),
                pockets: zone.pockets().iter().map(ToString::to_string).collect(),
                multiplier: zone.multiplier(),
            })
            .collect();
        to_js_value(&zones)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = RouletteSnapshot {
            balance: chips(self.table.balance()),
            staked: chips(self.table.total_staked()),
            bets: self
                .table
                .ledger()
                .iter()
                .map(|bet| JsBet {
                    key: bet.key().to_string(),
                    amount: chips(bet.amount()),
                })
                .collect(),
            last_result: self.table.last_result().map(pocket_to_js),
            history: self.table.history().iter().copied().map(pocket_to_js).collect(),
            spinning: self.table.is_spinning(),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct BlackjackSnapshot {
    phase: &'static str,
    player: JsHand,
    dealer: JsHand,
    outcome: Option<&'static str>,
    balance: u32,
    pending_bet: u32,
    stake: u32,
    payout: Option<u32>,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    image: String,
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<JsCard>,
    value: u8,
    is_soft: bool,
    is_bust: bool,
}

impl From<&Hand> for JsHand {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().iter().copied().map(card_to_js).collect(),
            value: hand.value(),
            is_soft: hand.is_soft(),
            is_bust: hand.is_bust(),
        }
    }
}

#[derive(Serialize)]
struct RouletteSnapshot {
    balance: u32,
    staked: u32,
    bets: Vec<JsBet>,
    last_result: Option<JsPocket>,
    history: Vec<JsPocket>,
    spinning: bool,
}

#[derive(Serialize)]
struct JsBet {
    key: String,
    amount: u32,
}

#[derive(Serialize)]
struct JsZone {
    key: String,
    label: String,
    pockets: Vec<String>,
    multiplier: u32,
}

#[derive(Serialize)]
struct JsPocket {
    label: String,
    color: &'static str,
}

#[derive(Serialize)]
struct JsSpinOutcome {
    result: JsPocket,
    staked: u32,
    winnings: u32,
    net: i32,
    winning_bets: Vec<JsPayout>,
}

#[derive(Serialize)]
struct JsPayout {
    key: String,
    amount: u32,
    payout: u32,
}

impl From<&SpinOutcome> for JsSpinOutcome {
    fn from(outcome: &SpinOutcome) -> Self {
        Self {
            result: pocket_to_js(outcome.result),
            staked: chips(outcome.staked),
            winnings: chips(outcome.winnings),
            net: i32::try_from(outcome.net())
                .unwrap_or(if outcome.net() < 0 { i32::MIN } else { i32::MAX }),
            winning_bets: outcome
                .winning_bets
                .iter()
                .map(|bet| JsPayout {
                    key: bet.key.to_string(),
                    amount: chips(bet.amount),
                    payout: chips(bet.payout),
                })
                .collect(),
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: card.suit.name(),
        rank: card.rank.name(),
        image: format!("{card}.png"),
    }
}

fn pocket_to_js(pocket: Pocket) -> JsPocket {
    JsPocket {
        label: pocket.to_string(),
        color: match pocket.color() {
            casinors::Color::Green => "green",
            casinors::Color::Red => "red",
            casinors::Color::Black => "black",
        },
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "Idle",
        Phase::PlayerTurn => "PlayerTurn",
        Phase::DealerTurn => "DealerTurn",
        Phase::Settled => "Settled",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerWin => "PlayerWin",
        Outcome::DealerWin => "DealerWin",
        Outcome::Push => "Push",
    }
}

/// Chip amounts are clamped to what a JavaScript `u32` can hold.
fn chips(amount: u64) -> u32 {
    u32::try_from(amount).unwrap_or(u32::MAX)
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use casinors::{Deck, Rank, Suit};

    #[test]
    fn dealer_hand_is_shown_in_full_mid_round() {
        let mut table = Blackjack::new(BlackjackOptions::default(), 1);
        let deck = Deck::from_cards([
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Clubs),
            Card::new(Rank::Nine, Suit::Spades),
            Card::new(Rank::Ace, Suit::Diamonds),
        ])
        .unwrap();
        table.deal_from(deck).unwrap();
        assert_eq!(table.phase(), Phase::PlayerTurn);

        let dealer = JsHand::from(table.dealer_hand());
        assert_eq!(dealer.cards.len(), 2);
        assert_eq!(dealer.cards[1].image, "ace_of_diamonds.png");
        assert_eq!(dealer.value, 20);
    }

    #[test]
    fn chip_amounts_clamp_at_u32_max() {
        assert_eq!(chips(1000), 1000);
        assert_eq!(chips(u64::from(u32::MAX)), u32::MAX);
        assert_eq!(chips(u64::from(u32::MAX) + 1), u32::MAX);
        assert_eq!(chips(u64::MAX), u32::MAX);
    }
}
