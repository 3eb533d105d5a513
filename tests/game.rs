//! Round engine integration tests.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use blackjack_table::{Card, Game, MemoryScoreBook, Outcome, Phase, Shoe, Suit, TableOptions};

/// A shoe that deals a scripted sequence; shuffling keeps the script in place
/// and only bumps the shared counter.
struct Stacked {
    cards: VecDeque<Card>,
    shuffles: Rc<Cell<usize>>,
}

impl Stacked {
    fn new(ranks: &[u8]) -> Self {
        let cards = ranks
            .iter()
            .enumerate()
            .map(|(i, &rank)| Card::new(Suit::ALL[i % 4], rank).unwrap())
            .collect();
        Self {
            cards,
            shuffles: Rc::new(Cell::new(0)),
        }
    }
}

impl Shoe for Stacked {
    fn shuffle(&mut self) {
        self.shuffles.set(self.shuffles.get() + 1);
    }

    fn draw(&mut self) -> Card {
        self.cards.pop_front().expect("stacked shoe ran out of cards")
    }
}

fn table_with(options: TableOptions, draws: &[u8]) -> Game<Stacked> {
    let mut game = Game::with_parts(options, Stacked::new(draws), MemoryScoreBook::new());
    game.start_session();
    game
}

/// Draw order for the initial deal is player, dealer, player, dealer.
fn table(draws: &[u8]) -> Game<Stacked> {
    table_with(TableOptions::default(), draws)
}

/// Like [`table_with`], also returning the shoe's shuffle counter.
fn counted_table(options: TableOptions, draws: &[u8]) -> (Game<Stacked>, Rc<Cell<usize>>) {
    let shoe = Stacked::new(draws);
    let shuffles = Rc::clone(&shoe.shuffles);
    let mut game = Game::with_parts(options, shoe, MemoryScoreBook::new());
    game.start_session();
    (game, shuffles)
}

fn ranks(cards: &[Card]) -> Vec<u8> {
    cards.iter().map(Card::rank).collect()
}

#[test]
fn session_starts_in_betting_with_defaults() {
    let game = table(&[]);
    assert_eq!(game.phase(), Phase::Betting);
    assert_eq!(game.bankroll(), 1000);
    assert_eq!(game.bet(), 50);
    assert_eq!(game.last_outcome(), "");
    assert_eq!(game.last_payout(), 0);
    assert_eq!(game.high_score(), 500);
}

#[test]
fn new_round_deals_alternately() {
    let mut game = table(&[10, 6, 7, 9]);
    assert!(game.new_round());

    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(ranks(game.player().cards()), [10, 7]);
    assert_eq!(ranks(game.dealer().cards()), [6, 9]);
    assert_eq!(game.dealer().up_card().map(Card::rank), Some(6));
}

#[test]
fn hit_into_bust_settles_loss() {
    let options = TableOptions::default().with_starting_bankroll(500);
    let mut game = table_with(options, &[10, 6, 7, 9, 5]);
    game.new_round();
    assert_eq!(game.player().value(), 17);
    assert_eq!(game.dealer().value(), 15);

    let card = game.hit().unwrap();
    assert_eq!(card.rank(), 5);
    assert_eq!(game.player().value(), 22);
    assert_eq!(game.phase(), Phase::RoundOver);
    assert_eq!(game.last_outcome(), "Bust — you lose");
    assert_eq!(game.bankroll(), 450);
    assert_eq!(game.last_payout(), -50);
}

#[test]
fn hit_below_21_keeps_player_turn() {
    let mut game = table(&[2, 10, 3, 8, 4]);
    game.new_round();
    game.hit().unwrap();
    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.player().value(), 9);
}

#[test]
fn player_natural_pays_three_to_two_on_the_deal() {
    let mut game = table(&[1, 9, 13, 7]);
    game.new_round();

    assert_eq!(game.phase(), Phase::RoundOver);
    assert_eq!(game.last_outcome(), "Blackjack! You win 3:2");
    assert_eq!(game.last_payout(), 75);
    assert_eq!(game.bankroll(), 1075);
    assert!(game.last_result().unwrap().outcome.is_win());
    assert!(game.hit().is_none());
}

#[test]
fn dealer_natural_settles_on_the_deal() {
    let mut game = table(&[10, 1, 9, 13]);
    game.new_round();

    assert_eq!(game.phase(), Phase::RoundOver);
    assert_eq!(game.last_outcome(), "Dealer blackjack — you lose");
    assert_eq!(game.bankroll(), 950);
}

#[test]
fn both_naturals_push() {
    let mut game = table(&[1, 1, 13, 12]);
    game.new_round();

    assert_eq!(game.phase(), Phase::RoundOver);
    assert_eq!(game.last_result().unwrap().outcome, Outcome::Push);
    assert_eq!(game.last_payout(), 0);
    assert_eq!(game.bankroll(), 1000);
}

#[test]
fn empty_bankroll_locks_the_table() {
    let options = TableOptions::default().with_starting_bankroll(0);
    let mut game = table_with(options, &[]);

    assert!(game.new_round());
    assert_eq!(game.phase(), Phase::RoundOver);
    assert_eq!(game.last_outcome(), "Bankroll empty");
    assert_eq!(game.last_payout(), 0);
    assert!(game.player().is_empty());
    assert!(game.dealer().is_empty());

    assert!(game.next_hand());
    game.new_round();
    assert_eq!(game.phase(), Phase::RoundOver);
    assert_eq!(game.last_outcome(), "Bankroll empty");
}

#[test]
fn stepwise_dealer_bust_settles_immediately() {
    let mut game = table(&[10, 6, 13, 10, 6]);
    game.new_round();
    assert_eq!(game.player().value(), 20);

    assert!(game.stand());
    assert_eq!(game.phase(), Phase::DealerTurn);
    assert_eq!(game.dealer().len(), 2);
    assert!(game.dealer_should_hit());

    game.dealer_hit_one().unwrap();
    assert_eq!(game.dealer().value(), 22);
    assert_eq!(game.phase(), Phase::RoundOver);
    assert_eq!(game.last_outcome(), "Dealer bust — you win");
    assert_eq!(game.bankroll(), 1050);
    assert!(!game.dealer_should_hit());
    assert!(!game.finish_dealer());
}

#[test]
fn stepwise_dealer_finishes_after_reaching_17() {
    let mut game = table(&[10, 10, 8, 2, 5]);
    game.new_round();
    game.stand();

    while game.dealer_should_hit() {
        game.dealer_hit_one().unwrap();
    }
    assert_eq!(game.dealer().value(), 17);
    assert_eq!(game.phase(), Phase::DealerTurn);

    assert!(game.finish_dealer());
    assert_eq!(game.phase(), Phase::RoundOver);
    assert_eq!(game.last_outcome(), "You win");
    assert_eq!(game.last_payout(), 50);
}

#[test]
fn finish_dealer_waits_while_dealer_must_draw() {
    let mut game = table(&[10, 10, 8, 2]);
    game.new_round();
    game.stand();

    assert!(game.dealer_should_hit());
    assert!(!game.finish_dealer());
    assert_eq!(game.phase(), Phase::DealerTurn);
}

#[test]
fn automatic_dealer_draws_to_17() {
    let mut game = table(&[10, 10, 9, 2, 3, 4]);
    game.new_round();
    game.stand();

    let drawn = game.play_dealer().unwrap();
    assert_eq!(ranks(&drawn), [3, 4]);
    assert_eq!(game.dealer().value(), 19);
    assert_eq!(game.phase(), Phase::RoundOver);
    assert_eq!(game.last_outcome(), "Push");
    assert_eq!(game.bankroll(), 1000);
}

#[test]
fn dealer_stands_on_soft_17() {
    let mut game = table(&[10, 1, 6, 6]);
    game.new_round();
    assert!(game.dealer().is_soft());
    assert_eq!(game.dealer().value(), 17);
    game.stand();

    assert!(!game.dealer_should_hit());
    assert!(game.play_dealer().unwrap().is_empty());
    assert_eq!(game.last_outcome(), "You lose");
    assert_eq!(game.bankroll(), 950);
}

#[test]
fn play_dealer_outside_dealer_turn_is_ignored() {
    let mut game = table(&[10, 10, 7, 8]);
    assert!(game.play_dealer().is_none());
    game.new_round();
    assert!(game.play_dealer().is_none());
    assert_eq!(game.phase(), Phase::PlayerTurn);
}

#[test]
fn double_down_draws_once_and_doubles_the_bet() {
    let mut game = table(&[5, 10, 6, 7, 10]);
    game.new_round();
    assert!(game.can_double());

    let card = game.double().unwrap();
    assert_eq!(card.rank(), 10);
    assert_eq!(game.phase(), Phase::DealerTurn);
    assert_eq!(game.bet(), 100);
    assert!(game.is_doubled());
    assert!(game.hit().is_none());

    assert!(game.finish_dealer());
    assert_eq!(game.last_outcome(), "You win");
    assert_eq!(game.last_payout(), 100);
    assert_eq!(game.bankroll(), 1100);
    // The doubled stake only applies to the round it was made in
    assert_eq!(game.bet(), 50);
}

#[test]
fn double_down_bust_loses_the_original_bet() {
    let mut game = table(&[10, 10, 6, 7, 13]);
    game.new_round();

    game.double().unwrap();
    assert_eq!(game.phase(), Phase::RoundOver);
    assert_eq!(game.last_outcome(), "Bust — you lose");
    assert_eq!(game.last_payout(), -50);
    assert_eq!(game.bankroll(), 950);
}

#[test]
fn double_rejected_with_three_cards() {
    let mut game = table(&[2, 10, 3, 7, 4]);
    game.new_round();
    game.hit().unwrap();

    assert!(!game.can_double());
    assert!(game.double().is_none());
    assert_eq!(game.player().len(), 3);
    assert_eq!(game.bet(), 50);
    assert_eq!(game.phase(), Phase::PlayerTurn);
}

#[test]
fn double_rejected_when_bankroll_cannot_cover_it() {
    let options = TableOptions::default()
        .with_starting_bankroll(100)
        .with_starting_bet(60);
    let mut game = table_with(options, &[5, 10, 6, 7]);
    game.new_round();

    assert!(game.double().is_none());
    assert_eq!(game.bet(), 60);
    assert_eq!(game.player().len(), 2);
    assert_eq!(game.phase(), Phase::PlayerTurn);
}

#[test]
fn adjust_bet_is_ignored_outside_betting() {
    let mut game = table(&[10, 6, 7, 9]);
    game.new_round();
    assert_eq!(game.phase(), Phase::PlayerTurn);

    assert!(!game.adjust_bet(10));
    assert_eq!(game.bet(), 50);
}

#[test]
fn adjust_bet_clamps_to_table_limits() {
    let mut game = table(&[]);
    assert!(game.adjust_bet(10));
    assert_eq!(game.bet(), 60);

    game.adjust_bet(-1000);
    assert_eq!(game.bet(), 10);

    game.adjust_bet(i64::MAX);
    assert_eq!(game.bet(), 1000);
}

#[test]
fn new_round_caps_bet_at_bankroll() {
    let options = TableOptions::default().with_starting_bankroll(5);
    let mut game = table_with(options, &[10, 6, 7, 9]);
    assert_eq!(game.bet(), 10);

    game.new_round();
    assert_eq!(game.bet(), 5);
}

#[test]
fn commands_in_wrong_phase_are_ignored() {
    let mut game = table(&[10, 6, 7, 9]);

    assert!(game.hit().is_none());
    assert!(!game.stand());
    assert!(game.double().is_none());
    assert!(game.dealer_hit_one().is_none());
    assert!(!game.finish_dealer());
    assert!(!game.next_hand());
    assert!(game.deal_next().is_none());
    assert!(!game.dealer_should_hit());
    assert_eq!(game.phase(), Phase::Betting);
    assert!(game.player().is_empty());

    game.new_round();
    assert!(!game.new_round());
    assert!(!game.begin_round());
    assert!(!game.next_hand());
    assert!(game.dealer_hit_one().is_none());
    assert_eq!(game.player().len(), 2);
    assert_eq!(game.phase(), Phase::PlayerTurn);
}

#[test]
fn stepwise_deal_reveals_one_card_at_a_time() {
    let mut game = table(&[10, 6, 7, 9]);
    assert!(game.begin_round());
    assert_eq!(game.phase(), Phase::Dealing);
    assert!(game.phase().is_in_play());
    assert!(game.hit().is_none());

    game.deal_next().unwrap();
    assert_eq!((game.player().len(), game.dealer().len()), (1, 0));
    game.deal_next().unwrap();
    assert_eq!((game.player().len(), game.dealer().len()), (1, 1));
    game.deal_next().unwrap();
    assert_eq!(game.phase(), Phase::Dealing);
    game.deal_next().unwrap();

    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert!(game.deal_next().is_none());
}

#[test]
fn next_hand_returns_to_betting_and_next_round_clears_table() {
    let mut game = table(&[10, 6, 7, 9, 5, 9, 2, 8, 3]);
    game.new_round();
    game.hit();
    assert_eq!(game.phase(), Phase::RoundOver);

    assert!(game.next_hand());
    assert_eq!(game.phase(), Phase::Betting);
    assert_eq!(game.last_outcome(), "Bust — you lose");

    game.new_round();
    assert_eq!(game.last_outcome(), "");
    assert_eq!(game.last_payout(), 0);
    assert_eq!(ranks(game.player().cards()), [9, 8]);
    assert_eq!(ranks(game.dealer().cards()), [2, 3]);
}

#[test]
fn settlement_reports_bankroll_to_score_book() {
    let mut game = table(&[1, 9, 13, 7]);
    assert_eq!(game.high_score(), 500);

    game.new_round();
    assert_eq!(game.scores().scores(), [1075]);
    assert_eq!(game.high_score(), 1075);

    let result = game.last_result().unwrap();
    assert_eq!(result.bankroll, 1075);
    assert_eq!(result.player_value, 21);
    assert_eq!(result.dealer_value, 16);
}

#[test]
fn start_session_resets_mid_round() {
    let mut game = table(&[10, 6, 7, 9]);
    game.adjust_bet(100);
    game.new_round();

    game.start_session();
    assert_eq!(game.phase(), Phase::Betting);
    assert_eq!(game.bankroll(), 1000);
    assert_eq!(game.bet(), 50);
    assert_eq!(game.last_outcome(), "");
}

#[test]
fn same_seed_deals_the_same_round() {
    let mut a = Game::new(TableOptions::default(), 9);
    let mut b = Game::new(TableOptions::default(), 9);
    a.start_session();
    b.start_session();
    a.new_round();
    b.new_round();

    assert_eq!(a.player(), b.player());
    assert_eq!(a.dealer(), b.dealer());
}

#[test]
fn seeded_sessions_never_break_the_bet_invariant() {
    let mut game = Game::new(TableOptions::default(), 2024);
    game.start_session();

    for _ in 0..200 {
        game.new_round();
        while game.player().value() < 15 && game.hit().is_some() {}
        if game.stand() {
            game.play_dealer();
        }
        assert_eq!(game.phase(), Phase::RoundOver);
        if game.bankroll() >= 10 {
            assert!((10..=game.bankroll()).contains(&game.bet()));
        }
        game.next_hand();
    }
}

#[test]
fn deck_is_reshuffled_once_per_round() {
    let (mut game, shuffles) =
        counted_table(TableOptions::default(), &[10, 6, 7, 9, 5, 9, 2, 8, 3]);
    assert_eq!(shuffles.get(), 0);

    assert!(game.new_round());
    assert_eq!(shuffles.get(), 1);

    // Wrong phase: no new round, no shuffle
    assert!(!game.new_round());
    assert!(!game.begin_round());
    game.hit();
    assert_eq!(game.phase(), Phase::RoundOver);
    assert_eq!(shuffles.get(), 1);

    game.next_hand();
    assert!(game.begin_round());
    assert_eq!(shuffles.get(), 2);
    while game.deal_next().is_some() {}
    assert_eq!(shuffles.get(), 2);
}

#[test]
fn empty_bankroll_does_not_shuffle() {
    let options = TableOptions::default().with_starting_bankroll(0);
    let (mut game, shuffles) = counted_table(options, &[]);

    assert!(game.new_round());
    assert_eq!(game.last_outcome(), "Bankroll empty");
    assert_eq!(shuffles.get(), 0);
}
