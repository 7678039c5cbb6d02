//! # war-engine: War Card Game Rules Engine
//!
//! The rules engine for a two-player game of War with betting and a
//! war/risk escalation mechanic. Tracks both players' cash and cards, the
//! shared pot, and the card supply, and exposes the phase transitions a
//! presentation layer drives after collecting player input: bet, standoff,
//! and war. Deck shuffling uses seeded RNG so whole games are reproducible.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and rank comparison
//! - [`deck`] - Self-replenishing deck with ChaCha20 RNG shuffling
//! - [`engine`] - The phase orchestrator: betting, standoff, and war
//! - [`player`] - Player identity, cash balance, and held card
//! - [`pot`] - The shared stake (add, clear, halve, double)
//! - [`results`] - Phase outcomes and immutable per-phase result records
//! - [`rules`] - Bet validation and risk resolution as pure functions
//! - [`logger`] - Round record serialization to JSONL
//! - [`errors`] - Error types for invariant violations
//!
//! ## Quick Start
//!
//! ```rust
//! use war_engine::engine::Engine;
//! use war_engine::results::Outcome;
//!
//! let mut engine = Engine::with_players(Some(7), "Alice", "Bob");
//!
//! // Betting phase: both players stake 10
//! let bets = engine.place_bets(10, 10).expect("valid bets");
//! assert_eq!(bets.pot, 20);
//!
//! // Standoff phase: one card each, higher rank takes the pot
//! let standoff = engine.run_standoff();
//! if standoff.outcome == Outcome::Tie {
//!     // A tie escalates to war; re-invoke on further ties
//!     let war = engine.run_war(false, false).expect("tie pending");
//!     println!("war outcome: {:?}", war.outcome);
//! }
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All card sequences are reproducible using seeded RNG:
//!
//! ```rust
//! use war_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let deck1 = Deck::new_with_seed(42);
//! let deck2 = Deck::new_with_seed(42);
//! // deck1 and deck2 will deal identical card sequences
//! ```
//!
//! ## The Risk Wager
//!
//! A player who wins a war after opting into the risk has their winnings
//! measured against one dealer card:
//!
//! ```rust
//! use war_engine::cards::{Card, Rank, Suit};
//! use war_engine::rules::risk_outcome;
//!
//! let winner = Card { suit: Suit::Spades, rank: Rank::Ace };
//! let dealer = Card { suit: Suit::Hearts, rank: Rank::Nine };
//!
//! // Beating the dealer keeps the winnings intact; losing halves them,
//! // matching doubles them.
//! println!("risk: {:?}", risk_outcome(winner, dealer));
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod logger;
pub mod player;
pub mod pot;
pub mod results;
pub mod rules;
