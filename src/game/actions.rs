use crate::card::Card;
use crate::deck::Shoe;
use crate::scores::ScoreBook;

use super::{Game, Phase};

impl<S: Shoe, B: ScoreBook> Game<S, B> {
    /// Player action: Hit (draw a card).
    ///
    /// A bust ends and settles the round. Returns the drawn card, or `None`
    /// outside [`Phase::PlayerTurn`].
    pub fn hit(&mut self) -> Option<Card> {
        if self.phase != Phase::PlayerTurn {
            return None;
        }

        let card = self.draw();
        self.player.add_card(card);

        if self.player.is_bust() {
            self.set_phase(Phase::RoundOver);
            self.settle();
        }

        Some(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Hands the round to the dealer without drawing any dealer cards; see
    /// [`play_dealer`](Self::play_dealer) and
    /// [`dealer_hit_one`](Self::dealer_hit_one). Returns `false` outside
    /// [`Phase::PlayerTurn`].
    pub fn stand(&mut self) -> bool {
        if self.phase != Phase::PlayerTurn {
            return false;
        }

        self.set_phase(Phase::DealerTurn);
        true
    }

    /// Returns whether the player may double down right now.
    ///
    /// Requires [`Phase::PlayerTurn`], exactly two cards, and a bankroll that
    /// covers a second bet of the same size.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.phase == Phase::PlayerTurn
            && self.player.len() == 2
            && self.bankroll - self.bet >= self.bet
    }

    /// Player action: Double down (receive exactly one card, then stand).
    ///
    /// A bust on the doubling card settles at the original bet. Otherwise the
    /// bet doubles and the round moves to [`Phase::DealerTurn`]. The doubled
    /// stake lasts for this round only: after settlement [`bet`](Self::bet)
    /// returns to the pre-double wager. Returns the drawn card, or `None` when
    /// doubling is not allowed.
    pub fn double(&mut self) -> Option<Card> {
        if !self.can_double() {
            return None;
        }

        let card = self.draw();
        self.player.add_card(card);

        if self.player.is_bust() {
            self.set_phase(Phase::RoundOver);
            self.settle();
        } else {
            self.bet *= 2;
            self.doubled = true;
            tracing::debug!(bet = self.bet, "bet doubled");
            self.set_phase(Phase::DealerTurn);
        }

        Some(card)
    }

    /// Returns to [`Phase::Betting`] after a settled round.
    ///
    /// This is the only way out of [`Phase::RoundOver`]. Returns `false` in
    /// any other phase.
    pub fn next_hand(&mut self) -> bool {
        if self.phase != Phase::RoundOver {
            return false;
        }

        self.set_phase(Phase::Betting);
        true
    }
}
