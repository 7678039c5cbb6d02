use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::cmp::Ordering;

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::player::{self, Player, STARTING_CASH};
use crate::pot::Pot;
use crate::results::{BettingResult, Outcome, RiskOutcome, StandoffResult, WarResult};
use crate::rules;

/// Core rules engine for a single game of War with betting.
///
/// Owns the deck, both players, and the pot for the lifetime of the game,
/// and is the sole mutator of cash and pot values. The presentation layer
/// collects the players' inputs, calls one phase at a time, and renders the
/// returned result:
///
/// - [`Engine::place_bets`] moves valid bets into the pot;
/// - [`Engine::run_standoff`] deals one card each and pays out the pot, or
///   ties and leaves it at stake;
/// - [`Engine::run_war`] settles a tie, and may itself tie, in which case
///   the caller simply invokes it again.
///
/// One engine drives one game. It is constructed and owned by the caller
/// and is not safe for concurrent use; run one phase to completion at a
/// time.
///
/// # Examples
///
/// ```
/// use war_engine::engine::Engine;
/// use war_engine::results::Outcome;
///
/// let mut engine = Engine::with_players(Some(42), "Alice", "Bob");
/// let bets = engine.place_bets(10, 10).expect("both players hold 100");
/// assert_eq!(bets.outcome, Outcome::BetSuccess);
/// assert_eq!(bets.pot, 20);
///
/// let standoff = engine.run_standoff();
/// match standoff.outcome {
///     Outcome::Tie => {
///         // pot carries over; settle it with a war
///         let war = engine.run_war(false, false).expect("tie is pending");
///         println!("war settled: {:?}", war.outcome);
///     }
///     other => println!("standoff settled: {:?}", other),
/// }
/// ```
#[derive(Debug)]
pub struct Engine {
    /// The card supply, replaced with a fresh shuffle whenever it runs dry
    deck: Deck,
    /// Exactly two players; index 0 is player one
    players: [Player; 2],
    /// The shared stake
    pot: Pot,
    /// Set by a tie, cleared by a win; gates the war phase
    war_pending: bool,
    /// Seed the session was created with, if any (for round records)
    seed: Option<u64>,
}

const DEFAULT_SEED: u64 = 0xDEA1_C0DE;

impl Engine {
    /// A session against a computer opponent whose name is auto-generated
    /// (deterministically, when a seed is given).
    pub fn versus_cpu(seed: Option<u64>, p1_name: &str) -> Self {
        let s = seed.unwrap_or(DEFAULT_SEED);
        let mut name_rng = ChaCha20Rng::seed_from_u64(s);
        let p2_name = player::cpu_name(&mut name_rng);
        Self::build(Deck::new_with_seed(s), seed, p1_name, &p2_name)
    }

    /// A session between two named players.
    pub fn with_players(seed: Option<u64>, p1_name: &str, p2_name: &str) -> Self {
        let s = seed.unwrap_or(DEFAULT_SEED);
        Self::build(Deck::new_with_seed(s), seed, p1_name, p2_name)
    }

    /// A session over a caller-supplied deck, typically a stacked one for
    /// reproducing exact card sequences in tests.
    pub fn with_deck(deck: Deck, p1_name: &str, p2_name: &str) -> Self {
        Self::build(deck, None, p1_name, p2_name)
    }

    fn build(deck: Deck, seed: Option<u64>, p1_name: &str, p2_name: &str) -> Self {
        Self {
            deck,
            players: [
                Player::new(p1_name, STARTING_CASH),
                Player::new(p2_name, STARTING_CASH),
            ],
            pot: Pot::new(),
            war_pending: false,
            seed,
        }
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Player two's name may be auto-generated; the UI retrieves it here.
    pub fn player_two_name(&self) -> &str {
        self.players[1].name()
    }

    pub fn pot_value(&self) -> u32 {
        self.pot.value()
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// True while an unsettled tie awaits a war phase.
    pub fn war_pending(&self) -> bool {
        self.war_pending
    }

    /// Run the betting phase. Both bets are validated against the players'
    /// balances before anything moves: an over-bet yields a failure outcome
    /// with no cash or pot changes (and a reported pot of zero), otherwise
    /// both bets are deducted and their sum lands in the pot.
    ///
    /// Validation checks player one first; a failure there short-circuits,
    /// so player two's bet goes unexamined in that case.
    pub fn place_bets(&mut self, p1_bet: u32, p2_bet: u32) -> Result<BettingResult, GameError> {
        if let Some(outcome) = rules::validate_bets(
            p1_bet,
            self.players[0].cash(),
            p2_bet,
            self.players[1].cash(),
        ) {
            return Ok(BettingResult {
                outcome,
                pot: 0,
                p1_cash: self.players[0].cash(),
                p2_cash: self.players[1].cash(),
            });
        }
        self.players[0].subtract_cash(p1_bet)?;
        self.players[1].subtract_cash(p2_bet)?;
        self.pot.add_cash(p1_bet.saturating_add(p2_bet));
        Ok(BettingResult {
            outcome: Outcome::BetSuccess,
            pot: self.pot.value(),
            p1_cash: self.players[0].cash(),
            p2_cash: self.players[1].cash(),
        })
    }

    /// Run the standoff phase: deal one card to each player and compare by
    /// rank. A strict winner takes the whole pot; equal ranks tie, leaving
    /// the pot at stake for the war phase.
    ///
    /// The result's `pot` field reports the value that was at stake, before
    /// any clearing.
    pub fn run_standoff(&mut self) -> StandoffResult {
        let p1_card = self.deck.deal();
        let p2_card = self.deck.deal();
        self.players[0].set_card(p1_card);
        self.players[1].set_card(p2_card);

        let at_stake = self.pot.value();
        let outcome = match p1_card.cmp_rank(&p2_card) {
            Ordering::Greater => {
                self.players[0].add_cash(at_stake);
                self.pot.clear();
                Outcome::Player1Win
            }
            Ordering::Less => {
                self.players[1].add_cash(at_stake);
                self.pot.clear();
                Outcome::Player2Win
            }
            Ordering::Equal => Outcome::Tie,
        };
        self.war_pending = outcome == Outcome::Tie;

        StandoffResult {
            outcome,
            pot: at_stake,
            p1_cash: self.players[0].cash(),
            p2_cash: self.players[1].cash(),
            p1_card,
            p2_card,
        }
    }

    /// Run a war phase. Requires a pending tie (from the standoff, or from
    /// a previous war that itself tied); calling it otherwise is a caller
    /// bug and returns [`GameError::NoWarPending`].
    ///
    /// Three cards are burned unconditionally. If either player opted into
    /// the risk, one shared dealer card is dealt next; then each player
    /// gets a fresh card and ranks are compared as in the standoff. Only
    /// the winner's risk flag matters: when set, the risk resolves against
    /// the dealer's card and halves or doubles the pot before the transfer.
    /// A tie leaves everything in place and keeps the war pending, so the
    /// caller can invoke this again.
    ///
    /// The result's `pot` field reports the value after resolution: zero on
    /// a win (the winnings are visible in the winner's cash), unchanged on
    /// a tie.
    pub fn run_war(&mut self, p1_risk: bool, p2_risk: bool) -> Result<WarResult, GameError> {
        if !self.war_pending {
            return Err(GameError::NoWarPending);
        }

        // Burn three cards
        self.deck.burn();
        self.deck.burn();
        self.deck.burn();

        // One shared dealer card, dealt only if a risk was taken
        let dealer_card = (p1_risk || p2_risk).then(|| self.deck.deal());

        let p1_card = self.deck.deal();
        let p2_card = self.deck.deal();
        self.players[0].set_card(p1_card);
        self.players[1].set_card(p2_card);

        let mut risk = None;
        let outcome = match p1_card.cmp_rank(&p2_card) {
            Ordering::Greater => {
                if p1_risk {
                    if let Some(d) = dealer_card {
                        risk = Some(self.apply_risk(p1_card, d));
                    }
                }
                let winnings = self.pot.value();
                self.players[0].add_cash(winnings);
                self.pot.clear();
                Outcome::Player1Win
            }
            Ordering::Less => {
                if p2_risk {
                    if let Some(d) = dealer_card {
                        risk = Some(self.apply_risk(p2_card, d));
                    }
                }
                let winnings = self.pot.value();
                self.players[1].add_cash(winnings);
                self.pot.clear();
                Outcome::Player2Win
            }
            Ordering::Equal => Outcome::Tie,
        };
        self.war_pending = outcome == Outcome::Tie;

        Ok(WarResult {
            outcome,
            pot: self.pot.value(),
            p1_cash: self.players[0].cash(),
            p2_cash: self.players[1].cash(),
            p1_card,
            p2_card,
            risk,
            dealer_card,
        })
    }

    /// Resolve the winner's risk and apply the implied pot transformation.
    /// Must run before the pot is transferred; the ordering is what makes a
    /// lost risk halve the winnings and a won risk double them.
    fn apply_risk(&mut self, winner_card: Card, dealer_card: Card) -> RiskOutcome {
        let outcome = rules::risk_outcome(winner_card, dealer_card);
        match outcome {
            RiskOutcome::Neutral => {}
            RiskOutcome::Lose => self.pot.halve(),
            RiskOutcome::Win => self.pot.double(),
        }
        outcome
    }
}
