//! Card types and deck utilities.

use core::fmt;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit's symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }
}

/// Rank of an Ace.
pub const ACE: u8 = 1;
/// Rank of a Jack.
pub const JACK: u8 = 11;
/// Rank of a Queen.
pub const QUEEN: u8 = 12;
/// Rank of a King.
pub const KING: u8 = 13;

/// A playing card.
///
/// The rank is validated on construction, so every `Card` in circulation has a
/// rank in `1..=13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `1..=13`
    /// (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_table::{Card, Suit};
    ///
    /// let king = Card::new(Suit::Hearts, 13).unwrap();
    /// assert_eq!(king.face_value(), 10);
    /// assert!(Card::new(Suit::Hearts, 14).is_err());
    /// ```
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank < ACE || rank > KING {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self { suit, rank })
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// Returns whether the card is a Jack, Queen or King.
    #[must_use]
    pub const fn is_face_card(&self) -> bool {
        self.rank >= JACK
    }

    /// Returns whether the card is a ten or a face card.
    #[must_use]
    pub const fn is_ten_like(&self) -> bool {
        self.rank >= 10
    }

    /// Rank capped at 10. An Ace counts as 1 here.
    #[must_use]
    pub const fn face_value(&self) -> u8 {
        if self.rank > 10 { 10 } else { self.rank }
    }

    /// Value used for the first pass of hand scoring: an Ace counts as 11.
    #[must_use]
    pub const fn soft_value(&self) -> u8 {
        if self.is_ace() { 11 } else { self.face_value() }
    }

    /// Returns the rank as it is printed on the card.
    #[must_use]
    pub const fn rank_symbol(&self) -> &'static str {
        match self.rank {
            ACE => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            JACK => "J",
            QUEEN => "Q",
            _ => "K",
        }
    }

    /// Returns the value hint shown next to the card, `"1/11"` for an Ace.
    #[must_use]
    pub const fn display_value(&self) -> &'static str {
        if self.is_ace() {
            "1/11"
        } else if self.is_face_card() {
            "10"
        } else {
            self.rank_symbol()
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_symbol(), self.suit.symbol())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns the 52 canonical cards, suit by suit, Ace to King.
#[must_use]
pub fn standard_cards() -> [Card; DECK_SIZE] {
    core::array::from_fn(|i| Card {
        suit: Suit::ALL[i / 13],
        rank: (i % 13) as u8 + 1,
    })
}
