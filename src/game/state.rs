//! Round phase.

/// Phase of the current round.
///
/// Rounds cycle `Betting -> Dealing -> PlayerTurn -> DealerTurn -> RoundOver`
/// and back to `Betting`. A natural on the deal or a player bust skips straight
/// to `RoundOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Accepting bet changes; a round can be started.
    #[default]
    Betting,
    /// Initial cards are being dealt.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been settled; waiting for the next hand.
    RoundOver,
}

impl Phase {
    /// Returns whether cards are on the table for a round in progress.
    #[must_use]
    pub const fn is_in_play(self) -> bool {
        matches!(self, Self::Dealing | Self::PlayerTurn | Self::DealerTurn)
    }
}
