//! Session configuration and fixed house rules.

/// Smallest wager the table accepts.
pub const MIN_BET: i64 = 10;

/// Amount an input layer should move the bet by per key press.
pub const BET_STEP: i64 = 10;

/// The dealer draws below this total and stands on it or above, soft 17 included.
pub const DEALER_STANDS_ON: u8 = 17;

/// Configuration for a player session.
///
/// House rules are fixed; only the session's starting position is configurable.
///
/// ```
/// use blackjack_table::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_bankroll(2000)
///     .with_starting_bet(100);
/// assert_eq!(options.starting_bankroll, 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Chips the player holds when a session starts.
    pub starting_bankroll: i64,
    /// Wager in place when a session starts.
    pub starting_bet: i64,
    /// High score reported before any score has been recorded.
    pub default_high_score: i64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_bankroll: 1000,
            starting_bet: 50,
            default_high_score: 500,
        }
    }
}

impl TableOptions {
    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_bankroll(250);
    /// assert_eq!(options.starting_bankroll, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: i64) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the starting bet.
    ///
    /// The bet is clamped to `[MIN_BET, bankroll]` when the session starts.
    #[must_use]
    pub const fn with_starting_bet(mut self, bet: i64) -> Self {
        self.starting_bet = bet;
        self
    }

    /// Sets the high score shown before anything is recorded.
    #[must_use]
    pub const fn with_default_high_score(mut self, score: i64) -> Self {
        self.default_high_score = score;
        self
    }
}
