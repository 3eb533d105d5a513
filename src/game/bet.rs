use crate::card::Card;
use crate::deck::Shoe;
use crate::result::Outcome;
use crate::scores::ScoreBook;

use super::{Game, Phase, clamp_bet};

/// Cards in the initial deal: two each, alternating player and dealer.
const INITIAL_CARDS: u8 = 4;

impl<S: Shoe, B: ScoreBook> Game<S, B> {
    /// Changes the bet by `delta`, keeping it within `[MIN_BET, bankroll]`.
    ///
    /// Returns `false` and leaves the bet unchanged outside [`Phase::Betting`].
    ///
    /// [`MIN_BET`]: crate::options::MIN_BET
    pub fn adjust_bet(&mut self, delta: i64) -> bool {
        if self.phase != Phase::Betting {
            return false;
        }

        self.bet = clamp_bet(self.bet.saturating_add(delta), self.bankroll);
        tracing::debug!(bet = self.bet, "bet changed");
        true
    }

    /// Starts a round and deals all four initial cards at once.
    ///
    /// Equivalent to [`begin_round`](Self::begin_round) followed by
    /// [`deal_next`](Self::deal_next) until dealing completes. Returns `false`
    /// outside [`Phase::Betting`].
    pub fn new_round(&mut self) -> bool {
        if !self.begin_round() {
            return false;
        }
        while self.deal_next().is_some() {}
        true
    }

    /// Prepares a round and enters [`Phase::Dealing`].
    ///
    /// With an empty bankroll the round ends immediately with
    /// [`Outcome::BankrollEmpty`] and no cards are dealt. Otherwise the bet is
    /// capped at the bankroll, both hands and the last outcome are cleared and
    /// the deck is reshuffled. Returns `false` outside [`Phase::Betting`].
    pub fn begin_round(&mut self) -> bool {
        if self.phase != Phase::Betting {
            return false;
        }

        if self.bankroll <= 0 {
            self.set_phase(Phase::RoundOver);
            self.last_outcome = Some(Outcome::BankrollEmpty);
            self.last_payout = 0;
            self.last_result = None;
            tracing::info!("bankroll empty, no round dealt");
            return true;
        }

        if self.bet > self.bankroll {
            self.bet = self.bankroll;
        }

        self.player.clear();
        self.dealer.clear();
        self.clear_outcome();
        self.doubled = false;
        self.dealt = 0;

        // One fresh deck per round
        self.shoe.shuffle();

        self.set_phase(Phase::Dealing);
        true
    }

    /// Deals the next initial card (player, dealer, player, dealer).
    ///
    /// After the fourth card the round moves to [`Phase::PlayerTurn`], or
    /// straight to [`Phase::RoundOver`] with settlement if either hand is a
    /// natural. Returns `None` outside [`Phase::Dealing`].
    pub fn deal_next(&mut self) -> Option<Card> {
        if self.phase != Phase::Dealing {
            return None;
        }

        let card = self.draw();
        if self.dealt % 2 == 0 {
            self.player.add_card(card);
        } else {
            self.dealer.add_card(card);
        }
        self.dealt += 1;

        if self.dealt >= INITIAL_CARDS {
            self.finish_deal();
        }

        Some(card)
    }

    fn finish_deal(&mut self) {
        tracing::debug!(
            player = self.player.value(),
            up_card = ?self.dealer.up_card(),
            "initial deal complete"
        );

        if self.player.is_blackjack() || self.dealer.is_blackjack() {
            self.set_phase(Phase::RoundOver);
            self.settle();
        } else {
            self.set_phase(Phase::PlayerTurn);
        }
    }
}
