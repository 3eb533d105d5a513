//! Round engine and state management.

use crate::card::Card;
use crate::deck::{Deck, Shoe};
use crate::hand::Hand;
use crate::options::{MIN_BET, TableOptions};
use crate::result::{Outcome, RoundResult};
use crate::scores::{MemoryScoreBook, ScoreBook};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::Phase;

/// Clamps a wager to `[MIN_BET, max(MIN_BET, bankroll)]`.
const fn clamp_bet(bet: i64, bankroll: i64) -> i64 {
    let upper = if bankroll > MIN_BET { bankroll } else { MIN_BET };
    if bet < MIN_BET {
        MIN_BET
    } else if bet > upper {
        upper
    } else {
        bet
    }
}

/// A single-player blackjack table.
///
/// The game owns the player and dealer hands, the shoe, the bankroll and the
/// current bet. Every command checks the [`Phase`] first and does nothing when
/// issued at the wrong time, so input can be forwarded without pre-checks.
///
/// # Example
///
/// ```
/// use blackjack_table::{Game, Phase, TableOptions};
///
/// let mut game = Game::new(TableOptions::default(), 42);
/// game.start_session();
/// game.new_round();
/// assert!(matches!(game.phase(), Phase::PlayerTurn | Phase::RoundOver));
/// ```
#[derive(Debug)]
pub struct Game<S = Deck, B = MemoryScoreBook> {
    options: TableOptions,
    phase: Phase,
    bankroll: i64,
    bet: i64,
    /// Whether the current bet was doubled this round.
    doubled: bool,
    player: Hand,
    dealer: Hand,
    /// Cards dealt so far in the initial deal.
    dealt: u8,
    last_outcome: Option<Outcome>,
    last_payout: i64,
    last_result: Option<RoundResult>,
    high_score: i64,
    shoe: S,
    scores: B,
}

impl Game {
    /// Creates a new game with a seeded deck and an in-memory score book.
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::with_parts(options, Deck::new(seed), MemoryScoreBook::new())
    }
}

impl<S: Shoe, B: ScoreBook> Game<S, B> {
    /// Creates a new game from an explicit shoe and score book.
    ///
    /// The game starts in [`Phase::Betting`] with the configured bankroll;
    /// scores are not loaded until [`start_session`](Self::start_session).
    #[must_use]
    pub fn with_parts(options: TableOptions, shoe: S, scores: B) -> Self {
        let bankroll = options.starting_bankroll;
        let bet = clamp_bet(options.starting_bet, bankroll);
        let high_score = options.default_high_score;

        Self {
            options,
            phase: Phase::Betting,
            bankroll,
            bet,
            doubled: false,
            player: Hand::new(),
            dealer: Hand::new(),
            dealt: 0,
            last_outcome: None,
            last_payout: 0,
            last_result: None,
            high_score,
            shoe,
            scores,
        }
    }

    /// Starts a fresh session.
    ///
    /// Resets the bankroll and bet, returns to [`Phase::Betting`], clears the
    /// last outcome and loads the score book. Callable at any time.
    pub fn start_session(&mut self) {
        self.bankroll = self.options.starting_bankroll;
        self.bet = clamp_bet(self.options.starting_bet, self.bankroll);
        self.doubled = false;
        self.dealt = 0;
        self.set_phase(Phase::Betting);
        self.clear_outcome();

        if let Err(err) = self.scores.load() {
            tracing::warn!(%err, "failed to load scores");
        }
        self.refresh_high_score();

        tracing::info!(
            bankroll = self.bankroll,
            bet = self.bet,
            high_score = self.high_score,
            "session started"
        );
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the chips the player owns.
    #[must_use]
    pub const fn bankroll(&self) -> i64 {
        self.bankroll
    }

    /// Returns the current wager.
    #[must_use]
    pub const fn bet(&self) -> i64 {
        self.bet
    }

    /// Returns whether the player doubled down this round.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the message for the most recent outcome, or `""` if none.
    #[must_use]
    pub const fn last_outcome(&self) -> &'static str {
        match self.last_outcome {
            Some(outcome) => outcome.message(),
            None => "",
        }
    }

    /// Returns the net bankroll change from the most recent settlement.
    #[must_use]
    pub const fn last_payout(&self) -> i64 {
        self.last_payout
    }

    /// Returns the full record of the most recent settlement.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the highest recorded bankroll, for the HUD.
    #[must_use]
    pub const fn high_score(&self) -> i64 {
        self.high_score
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the score book.
    #[must_use]
    pub const fn scores(&self) -> &B {
        &self.scores
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            tracing::debug!(from = ?self.phase, to = ?phase, "phase change");
        }
        self.phase = phase;
    }

    fn clear_outcome(&mut self) {
        self.last_outcome = None;
        self.last_payout = 0;
        self.last_result = None;
    }

    fn refresh_high_score(&mut self) {
        self.high_score = self
            .scores
            .highest()
            .unwrap_or(self.options.default_high_score);
    }

    /// Draws one card from the shoe.
    fn draw(&mut self) -> Card {
        let card = self.shoe.draw();
        tracing::trace!(%card, "card drawn");
        card
    }
}
