use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, DealError};
use crate::schedule::Continuation;

use super::{Blackjack, Phase};

impl Blackjack {
    /// Starts a new round with a freshly shuffled 52-card deck.
    ///
    /// The player receives the first two cards and the dealer the next two.
    /// Any round in progress is abandoned, its stake refunded and its
    /// continuations made stale. A bet placed with [`bet`](Self::bet) rides on
    /// the new round.
    pub fn deal(&mut self) {
        let deck = Deck::shuffled(&mut self.rng);
        self.start_round(deck);
    }

    /// Starts a new round dealing from `deck` without shuffling it.
    ///
    /// Useful for replays and tests that need a known card order.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck holds fewer than four cards.
    pub fn deal_from(&mut self, deck: Deck) -> Result<(), DealError> {
        if deck.len() < 4 {
            return Err(DealError::NotEnoughCards);
        }
        self.start_round(deck);
        Ok(())
    }

    fn start_round(&mut self, deck: Deck) {
        self.refund_unsettled();
        self.stake = core::mem::take(&mut self.pending_bet);
        self.payout = None;

        let round = self.clock.next_round();
        self.deck = deck;
        self.player.clear();
        self.dealer.clear();
        self.outcome = None;

        for _ in 0..2 {
            if let Some(card) = self.draw() {
                self.player.add_card(card);
            }
        }
        for _ in 0..2 {
            if let Some(card) = self.draw() {
                self.dealer.add_card(card);
            }
        }

        self.phase = Phase::DEALT;
        tracing::info!(
            round,
            stake = self.stake,
            player_total = self.player.value(),
            dealer_up = ?self.dealer.up_card(),
            remaining = self.deck.len(),
            "blackjack round dealt"
        );
    }

    /// Player action: Hit (draw a card).
    ///
    /// Returns the drawn card. A bust settles the round immediately with no
    /// dealer turn. Once the round is settled, or when the deck is empty,
    /// hitting does nothing and returns `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if no round has been dealt or the dealer is playing.
    pub fn hit(&mut self) -> Result<Option<Card>, ActionError> {
        match self.phase {
            Phase::Idle | Phase::DealerTurn => return Err(ActionError::InvalidState),
            Phase::Settled => {
                tracing::debug!(round = self.clock.round(), "hit ignored after settlement");
                return Ok(None);
            }
            Phase::PlayerTurn => {}
        }

        let Some(card) = self.draw() else {
            tracing::debug!(round = self.clock.round(), "hit ignored on empty deck");
            return Ok(None);
        };

        self.player.add_card(card);
        tracing::debug!(
            round = self.clock.round(),
            %card,
            player_total = self.player.value(),
            "player hit"
        );

        if self.player.is_bust() {
            self.settle();
        }

        Ok(Some(card))
    }

    /// Player action: Stand.
    ///
    /// Hands the turn to the dealer. When the dealer has to draw, returns a
    /// continuation to present to [`dealer_step`](Self::dealer_step) after
    /// its delay; otherwise the round settles and `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<Option<Continuation>, ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        self.phase = Phase::DealerTurn;
        tracing::debug!(
            round = self.clock.round(),
            player_total = self.player.value(),
            "player stands"
        );

        Ok(self.schedule_dealer())
    }
}
