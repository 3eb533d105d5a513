//! Round result types for settlement.

use core::fmt;

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player natural against a dealer without one; pays 3:2.
    Blackjack,
    /// Dealer natural against a player without one.
    DealerBlackjack,
    /// Player busted.
    Bust,
    /// Dealer busted.
    DealerBust,
    /// Player total beats the dealer's.
    Win,
    /// Dealer total beats the player's.
    Lose,
    /// Tie; the bet is returned.
    Push,
    /// No round could be dealt because the bankroll is empty.
    BankrollEmpty,
}

impl Outcome {
    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Blackjack => "Blackjack! You win 3:2",
            Self::DealerBlackjack => "Dealer blackjack — you lose",
            Self::Bust => "Bust — you lose",
            Self::DealerBust => "Dealer bust — you win",
            Self::Win => "You win",
            Self::Lose => "You lose",
            Self::Push => "Push",
            Self::BankrollEmpty => "Bankroll empty",
        }
    }

    /// Returns whether the player came out ahead.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Blackjack | Self::DealerBust | Self::Win)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of the most recent settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// Net bankroll change (negative on a loss).
    pub payout: i64,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Bankroll after the payout was applied.
    pub bankroll: i64,
}
