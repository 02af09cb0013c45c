use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Unknown difficulty {0:?}, expected 1, 2, 3, beginner, intermediate or expert")]
    UnknownDifficulty(String),
}

pub type Result<T> = core::result::Result<T, GameError>;
