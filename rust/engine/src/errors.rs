use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Game is over. Call reset to start a new one")]
    InvalidOperation,
}
