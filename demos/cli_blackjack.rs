//! Terminal blackjack table.
//!
//! Keys: `n` new round / next hand, `h` hit, `s` stand, `d` double,
//! `+`/`-` change the bet, `q` quit.

use core::time::Duration;
use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_table::{
    BET_STEP, Deck, FileScoreBook, Game, Hand, Phase, ScoreBook, Shoe, TableOptions,
};
use tracing_subscriber::filter::LevelFilter;

const REVEAL_PAUSE: Duration = Duration::from_millis(350);

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::WARN)
        .with_writer(io::stderr)
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let scores = FileScoreBook::new(std::env::temp_dir().join("blackjack-highscores.txt"));
    let mut game = Game::with_parts(TableOptions::default(), Deck::new(seed), scores);

    println!("Blackjack (n = deal/next, h = hit, s = stand, d = double, +/- = bet, q = quit)");
    game.start_session();
    print_hud(&game);

    loop {
        let Some(line) = prompt_line("> ") else {
            break;
        };

        match line.as_str() {
            "n" => {
                if game.phase() == Phase::RoundOver {
                    game.next_hand();
                    print_hud(&game);
                } else {
                    reveal_deal(&mut game);
                }
            }
            "h" => {
                if let Some(card) = game.hit() {
                    println!("You draw {card}.");
                }
            }
            "s" => {
                game.stand();
            }
            "d" => {
                if let Some(card) = game.double() {
                    println!("Doubled to {}. You draw {card}.", game.bet());
                } else {
                    println!("Double not available.");
                }
            }
            "+" => {
                game.adjust_bet(BET_STEP);
                println!("Bet: {}", game.bet());
            }
            "-" => {
                game.adjust_bet(-BET_STEP);
                println!("Bet: {}", game.bet());
            }
            "q" => break,
            _ => {
                println!("Unknown key.");
                continue;
            }
        }

        if game.phase() == Phase::DealerTurn {
            reveal_dealer(&mut game);
        }

        match game.phase() {
            Phase::PlayerTurn => print_table(&game, false),
            Phase::RoundOver => {
                print_table(&game, true);
                println!(
                    "{} ({:+}). Bankroll {}. Press n for the next hand.",
                    game.last_outcome(),
                    game.last_payout(),
                    game.bankroll()
                );
            }
            Phase::Betting | Phase::Dealing | Phase::DealerTurn => {}
        }
    }

    println!("Final bankroll: {}", game.bankroll());
}

/// Deals the opening cards one at a time.
fn reveal_deal<S: Shoe, B: ScoreBook>(game: &mut Game<S, B>) {
    if !game.begin_round() {
        return;
    }
    while let Some(card) = game.deal_next() {
        // The dealer's second card stays face down until the dealer plays
        if game.dealer().len() == 2 {
            println!("Dealer is dealt a hidden card.");
        } else if game.player().len() > game.dealer().len() {
            println!("You are dealt {card}.");
        } else {
            println!("Dealer shows {card}.");
        }
        thread::sleep(REVEAL_PAUSE);
    }
}

/// Draws the dealer's cards one at a time, then settles.
fn reveal_dealer<S: Shoe, B: ScoreBook>(game: &mut Game<S, B>) {
    print_table(game, true);
    while game.dealer_should_hit() {
        thread::sleep(REVEAL_PAUSE);
        if let Some(card) = game.dealer_hit_one() {
            println!("Dealer draws {card}.");
        }
    }
    game.finish_dealer();
}

fn print_hud<S: Shoe, B: ScoreBook>(game: &Game<S, B>) {
    println!(
        "Bankroll {} | Bet {} | Best {}",
        game.bankroll(),
        game.bet(),
        game.high_score()
    );
}

fn print_table<S: Shoe, B: ScoreBook>(game: &Game<S, B>, show_hole: bool) {
    if show_hole {
        println!("Dealer: {}", game.dealer());
    } else {
        println!("Dealer: {}", format_up_card(game.dealer()));
    }
    let soft = if game.player().is_soft() { " soft" } else { "" };
    println!("You:    {}{soft}", game.player());
}

fn format_up_card(hand: &Hand) -> String {
    hand.up_card()
        .map_or_else(|| "-".to_string(), |card| format!("{card}, ??"))
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}
