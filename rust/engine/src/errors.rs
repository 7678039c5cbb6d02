use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Insufficient cash: tried to take {amount}, only {available} available")]
    InsufficientCash { amount: u32, available: u32 },
    #[error("War phase requires a preceding tie")]
    NoWarPending,
}
