use war_engine::cards::{Card, Rank, Suit};
use war_engine::deck::Deck;
use war_engine::engine::Engine;
use war_engine::results::Outcome;

fn c(suit: Suit, rank: Rank) -> Card {
    Card { suit, rank }
}

fn engine_with_top_cards(cards: Vec<Card>) -> Engine {
    Engine::with_deck(Deck::stacked(cards, 0), "Alice", "Bob")
}

#[test]
fn higher_rank_takes_the_pot() {
    // Rank 10 vs rank 5 with a pot of 20
    let mut eng = engine_with_top_cards(vec![
        c(Suit::Spades, Rank::Ten),
        c(Suit::Hearts, Rank::Five),
    ]);
    eng.place_bets(10, 10).expect("valid bets");

    let r = eng.run_standoff();
    assert_eq!(r.outcome, Outcome::Player1Win);
    assert_eq!(r.pot, 20, "result reports the amount that was at stake");
    assert_eq!(r.p1_cash, 110);
    assert_eq!(r.p2_cash, 90);
    assert_eq!(r.p1_card, c(Suit::Spades, Rank::Ten));
    assert_eq!(r.p2_card, c(Suit::Hearts, Rank::Five));
    assert_eq!(eng.pot_value(), 0, "pot is cleared after the win");
}

#[test]
fn player_two_win_is_symmetric() {
    let mut eng = engine_with_top_cards(vec![
        c(Suit::Clubs, Rank::Three),
        c(Suit::Diamonds, Rank::Jack),
    ]);
    eng.place_bets(25, 25).expect("valid bets");

    let r = eng.run_standoff();
    assert_eq!(r.outcome, Outcome::Player2Win);
    assert_eq!(r.pot, 50);
    assert_eq!(r.p1_cash, 75);
    assert_eq!(r.p2_cash, 125);
    assert_eq!(eng.pot_value(), 0);
}

#[test]
fn suit_never_breaks_a_rank_tie() {
    let mut eng = engine_with_top_cards(vec![
        c(Suit::Spades, Rank::Seven),
        c(Suit::Hearts, Rank::Seven),
    ]);
    eng.place_bets(10, 10).expect("valid bets");

    let r = eng.run_standoff();
    assert_eq!(r.outcome, Outcome::Tie);
    assert_eq!(r.pot, 20, "carried pot is reported unchanged");
    assert_eq!(r.p1_cash, 90, "no cash moves on a tie");
    assert_eq!(r.p2_cash, 90);
    assert_eq!(eng.pot_value(), 20, "pot carries over to the war");
    assert!(eng.war_pending());
}

#[test]
fn standoff_deals_one_card_each() {
    let mut eng = Engine::with_players(Some(9), "Alice", "Bob");
    let before = eng.deck_remaining();
    let r = eng.run_standoff();
    assert_eq!(eng.deck_remaining(), before - 2);
    assert_eq!(eng.players()[0].card(), Some(r.p1_card));
    assert_eq!(eng.players()[1].card(), Some(r.p2_card));
}

#[test]
fn standoff_with_empty_pot_moves_no_cash() {
    let mut eng = Engine::with_players(Some(10), "Alice", "Bob");
    let r = eng.run_standoff();
    assert_eq!(r.pot, 0);
    assert_eq!(r.p1_cash, 100);
    assert_eq!(r.p2_cash, 100);
}

#[test]
fn winner_cash_rises_by_exactly_the_stake_over_many_rounds() {
    let mut eng = Engine::with_players(Some(11), "Alice", "Bob");
    for _ in 0..60 {
        let p1_bet = eng.players()[0].cash().min(1);
        let p2_bet = eng.players()[1].cash().min(1);
        let bets = eng.place_bets(p1_bet, p2_bet).expect("valid bets");
        assert_eq!(bets.outcome, Outcome::BetSuccess);

        let total_before = bets.p1_cash + bets.p2_cash + eng.pot_value();
        let stake = eng.pot_value();
        let r = eng.run_standoff();
        match r.outcome {
            Outcome::Player1Win => {
                assert_eq!(r.p1_cash, bets.p1_cash + stake);
                assert_eq!(r.p2_cash, bets.p2_cash);
                assert_eq!(eng.pot_value(), 0);
            }
            Outcome::Player2Win => {
                assert_eq!(r.p2_cash, bets.p2_cash + stake);
                assert_eq!(r.p1_cash, bets.p1_cash);
                assert_eq!(eng.pot_value(), 0);
            }
            Outcome::Tie => {
                assert_eq!(eng.pot_value(), stake);
                // settle the tie without risk so value is conserved
                let mut settled = false;
                for _ in 0..20 {
                    let w = eng.run_war(false, false).expect("tie pending");
                    if w.outcome != Outcome::Tie {
                        settled = true;
                        break;
                    }
                }
                assert!(settled, "war should resolve within 20 re-wars");
            }
            other => panic!("unexpected standoff outcome {:?}", other),
        }
        let total_after =
            eng.players()[0].cash() + eng.players()[1].cash() + eng.pot_value();
        assert_eq!(total_after, total_before, "standoff conserves total value");
    }
}
