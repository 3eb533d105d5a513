extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Shoe;
use crate::hand::{BLACKJACK, Hand};
use crate::options::DEALER_STANDS_ON;
use crate::result::{Outcome, RoundResult};
use crate::scores::ScoreBook;

use super::{Game, Phase, clamp_bet};

/// Compares the final hands. The first matching rule wins.
fn decide(player: &Hand, dealer: &Hand) -> Outcome {
    let player_value = player.value();
    let dealer_value = dealer.value();

    if player.is_blackjack() && !dealer.is_blackjack() {
        Outcome::Blackjack
    } else if dealer.is_blackjack() && !player.is_blackjack() {
        Outcome::DealerBlackjack
    } else if player_value > BLACKJACK {
        Outcome::Bust
    } else if dealer_value > BLACKJACK {
        Outcome::DealerBust
    } else if player_value > dealer_value {
        Outcome::Win
    } else if player_value < dealer_value {
        Outcome::Lose
    } else {
        Outcome::Push
    }
}

/// 3:2 on `bet`, rounding a half chip to the even neighbour.
const fn blackjack_winnings(bet: i64) -> i64 {
    let whole = bet * 3 / 2;
    if bet % 2 != 0 && whole % 2 != 0 {
        whole + 1
    } else {
        whole
    }
}

/// Net bankroll change for `outcome` at the given stake.
const fn payout(outcome: Outcome, bet: i64) -> i64 {
    match outcome {
        Outcome::Blackjack => blackjack_winnings(bet),
        Outcome::DealerBust | Outcome::Win => bet,
        Outcome::DealerBlackjack | Outcome::Bust | Outcome::Lose => -bet,
        Outcome::Push | Outcome::BankrollEmpty => 0,
    }
}

impl<S: Shoe, B: ScoreBook> Game<S, B> {
    /// Returns whether the dealer must draw another card.
    ///
    /// True only in [`Phase::DealerTurn`] while the dealer total is below 17.
    /// The dealer stands on every 17, soft or hard.
    ///
    /// Unlike a bare `dealer().value() < 17`, this is `false` in every other
    /// phase, including an empty dealer hand during [`Phase::Betting`], so a
    /// `while game.dealer_should_hit()` loop always terminates. Use
    /// [`dealer`](Self::dealer) for the raw total.
    #[must_use]
    pub fn dealer_should_hit(&self) -> bool {
        self.phase == Phase::DealerTurn && self.dealer.value() < DEALER_STANDS_ON
    }

    /// Draws one dealer card.
    ///
    /// A dealer bust ends and settles the round at once. Returns `None` unless
    /// [`dealer_should_hit`](Self::dealer_should_hit) holds.
    pub fn dealer_hit_one(&mut self) -> Option<Card> {
        if !self.dealer_should_hit() {
            return None;
        }

        let card = self.draw();
        self.dealer.add_card(card);

        if self.dealer.is_bust() {
            self.set_phase(Phase::RoundOver);
            self.settle();
        }

        Some(card)
    }

    /// Ends the dealer's turn and settles the round.
    ///
    /// Returns `false` outside [`Phase::DealerTurn`] or while the dealer still
    /// has to draw.
    pub fn finish_dealer(&mut self) -> bool {
        if self.phase != Phase::DealerTurn || self.dealer_should_hit() {
            return false;
        }

        self.set_phase(Phase::RoundOver);
        self.settle();
        true
    }

    /// Dealer plays their hand to completion and the round is settled.
    ///
    /// Returns the cards drawn by the dealer, or `None` outside
    /// [`Phase::DealerTurn`].
    pub fn play_dealer(&mut self) -> Option<Vec<Card>> {
        if self.phase != Phase::DealerTurn {
            return None;
        }

        let mut drawn = Vec::new();
        while let Some(card) = self.dealer_hit_one() {
            drawn.push(card);
        }
        self.finish_dealer();

        Some(drawn)
    }

    /// Settles the round: pays out, records the result and reports the new
    /// bankroll to the score book.
    pub(super) fn settle(&mut self) {
        let outcome = decide(&self.player, &self.dealer);
        let amount = payout(outcome, self.bet);

        self.bankroll += amount;
        self.last_outcome = Some(outcome);
        self.last_payout = amount;
        self.last_result = Some(RoundResult {
            outcome,
            payout: amount,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
            bankroll: self.bankroll,
        });

        tracing::info!(
            %outcome,
            payout = amount,
            bankroll = self.bankroll,
            player = self.player.value(),
            dealer = self.dealer.value(),
            "round settled"
        );

        // A doubled wager only lasts one round
        if self.doubled {
            self.bet /= 2;
            self.doubled = false;
        }
        self.bet = clamp_bet(self.bet, self.bankroll);

        if let Err(err) = self.scores.record(self.bankroll) {
            tracing::warn!(%err, bankroll = self.bankroll, "failed to record score");
        }
        self.refresh_high_score();
    }
}
