use crate::cards::Card;
use crate::errors::GameError;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Default starting cash for each player
pub const STARTING_CASH: u32 = 100;

/// Roster of names for an auto-generated opponent.
const CPU_NAMES: [&str; 8] = [
    "General Mayhem",
    "Colonel Bluff",
    "Major Stakes",
    "Captain Gamble",
    "Sergeant Shark",
    "Commander Cool",
    "Admiral Allin",
    "Private Wager",
];

/// Pick a name for a computer-controlled opponent.
pub fn cpu_name(rng: &mut impl Rng) -> String {
    CPU_NAMES
        .choose(rng)
        .copied()
        .unwrap_or("General Mayhem")
        .to_string()
}

/// A player in the game: a name, a cash balance, and the single card
/// currently held (overwritten each phase). Cash can never go negative;
/// deductions are pre-validated by the engine.
#[derive(Debug, Clone)]
pub struct Player {
    /// Display name (given at registration, or CPU-generated)
    name: String,
    /// Current cash balance
    cash: u32,
    /// The card dealt in the most recent phase, if any
    card: Option<Card>,
}

impl Player {
    pub fn new(name: &str, cash: u32) -> Self {
        Self {
            name: name.to_string(),
            cash,
            card: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cash(&self) -> u32 {
        self.cash
    }

    pub fn card(&self) -> Option<Card> {
        self.card
    }

    pub fn set_card(&mut self, c: Card) {
        self.card = Some(c);
    }

    pub fn add_cash(&mut self, amount: u32) {
        self.cash = self.cash.saturating_add(amount);
    }

    pub fn subtract_cash(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.cash {
            return Err(GameError::InsufficientCash {
                amount,
                available: self.cash,
            });
        }
        self.cash -= amount;
        Ok(())
    }
}
