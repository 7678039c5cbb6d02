use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// How a phase resolved. Bet failures name the offending player; win/tie
/// variants are shared by the standoff and war phases.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// Both bets were valid and moved into the pot
    BetSuccess,
    /// Player one bet more cash than they hold
    Player1BetFail,
    /// Player two bet more cash than they hold
    Player2BetFail,
    /// Player one's card ranked higher
    Player1Win,
    /// Player two's card ranked higher
    Player2Win,
    /// Equal ranks; the pot carries over to a war
    Tie,
}

/// How a winner's risk wager resolved against the dealer's card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RiskOutcome {
    /// Winner's card beat the dealer's; winnings unchanged
    Neutral,
    /// Winner's card matched the dealer's; winnings doubled
    Win,
    /// Winner's card lost to the dealer's; winnings halved
    Lose,
}

/// Result of the betting phase. On failure the reported pot is zero and no
/// cash has moved; on success both balances reflect the deducted bets.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BettingResult {
    pub outcome: Outcome,
    pub pot: u32,
    pub p1_cash: u32,
    pub p2_cash: u32,
}

/// Result of the standoff phase. `pot` is the value that was at stake: on a
/// win it is the amount just transferred (the pot itself is cleared), on a
/// tie it is the carried-over value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandoffResult {
    pub outcome: Outcome,
    pub pot: u32,
    pub p1_cash: u32,
    pub p2_cash: u32,
    pub p1_card: Card,
    pub p2_card: Card,
}

/// Result of a war phase. `pot` is the value after resolution: zero on a
/// win (the winnings show up in the winner's cash), unchanged on a tie.
/// `dealer_card` is present whenever either player took a risk; `risk` only
/// when the winning player did (a tie never evaluates it).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct WarResult {
    pub outcome: Outcome,
    pub pot: u32,
    pub p1_cash: u32,
    pub p2_cash: u32,
    pub p1_card: Card,
    pub p2_card: Card,
    pub risk: Option<RiskOutcome>,
    pub dealer_card: Option<Card>,
}
