use crate::cards::Card;
use crate::results::{Outcome, RiskOutcome};
use std::cmp::Ordering;

/// Validates both players' bets against their cash balances.
///
/// Returns `None` when both bets are affordable, otherwise the failure
/// outcome naming the offending player. Player one is checked first and a
/// failure there short-circuits: player two's bet is not examined at all,
/// so only the first failing condition is ever reported. That asymmetry is
/// the documented behavior of this phase, not an accident.
///
/// # Examples
///
/// ```
/// use war_engine::results::Outcome;
/// use war_engine::rules::validate_bets;
///
/// assert_eq!(validate_bets(10, 100, 10, 100), None);
/// assert_eq!(validate_bets(150, 100, 10, 100), Some(Outcome::Player1BetFail));
///
/// // Player one's failure masks player two's
/// assert_eq!(validate_bets(150, 100, 500, 100), Some(Outcome::Player1BetFail));
///
/// // A bet of the entire balance is allowed
/// assert_eq!(validate_bets(100, 100, 100, 100), None);
/// ```
pub fn validate_bets(p1_bet: u32, p1_cash: u32, p2_bet: u32, p2_cash: u32) -> Option<Outcome> {
    if p1_bet > p1_cash {
        Some(Outcome::Player1BetFail)
    } else if p2_bet > p2_cash {
        Some(Outcome::Player2BetFail)
    } else {
        None
    }
}

/// Resolves a winner's risk wager against the dealer's card.
///
/// Pure function of the two cards; the pot transformation it implies
/// (halve on [`RiskOutcome::Lose`], double on [`RiskOutcome::Win`]) is
/// applied by the war phase, strictly before the pot is transferred.
///
/// # Examples
///
/// ```
/// use war_engine::cards::{Card, Rank, Suit};
/// use war_engine::results::RiskOutcome;
/// use war_engine::rules::risk_outcome;
///
/// let winner = Card { suit: Suit::Spades, rank: Rank::Queen };
/// let dealer = Card { suit: Suit::Hearts, rank: Rank::Ten };
/// assert_eq!(risk_outcome(winner, dealer), RiskOutcome::Neutral);
///
/// let dealer = Card { suit: Suit::Hearts, rank: Rank::King };
/// assert_eq!(risk_outcome(winner, dealer), RiskOutcome::Lose);
///
/// // Matching the dealer's rank doubles the winnings
/// let dealer = Card { suit: Suit::Hearts, rank: Rank::Queen };
/// assert_eq!(risk_outcome(winner, dealer), RiskOutcome::Win);
/// ```
pub fn risk_outcome(winner_card: Card, dealer_card: Card) -> RiskOutcome {
    match winner_card.cmp_rank(&dealer_card) {
        Ordering::Greater => RiskOutcome::Neutral,
        Ordering::Less => RiskOutcome::Lose,
        Ordering::Equal => RiskOutcome::Win,
    }
}
