//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the round lifecycle: betting,
//! the initial deal, player actions, dealer play and settlement. Rendering,
//! input, audio and score storage live outside the engine; they read its state
//! and call its commands.
//!
//! # Example
//!
//! ```
//! use blackjack_table::{Game, Phase, TableOptions};
//!
//! let mut game = Game::new(TableOptions::default(), 42);
//! game.start_session();
//! game.new_round();
//!
//! if game.phase() == Phase::PlayerTurn {
//!     game.stand();
//!     game.play_dealer();
//! }
//! assert_eq!(game.phase(), Phase::RoundOver);
//! println!("{}: {:+}", game.last_outcome(), game.last_payout());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod scores;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::{Deck, Shoe};
pub use error::{CardError, ScoreError};
pub use game::{Game, Phase};
pub use hand::Hand;
pub use options::{BET_STEP, DEALER_STANDS_ON, MIN_BET, TableOptions};
pub use result::{Outcome, RoundResult};
#[cfg(feature = "std")]
pub use scores::{FileScoreBook, ScoreEntry};
pub use scores::{MemoryScoreBook, ScoreBook};
