use thiserror::Error;

/// Reasons a turn cannot be decided at all
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecisionError {
    #[error("snake {id:?} is not on the board")]
    SnakeNotFound { id: String },
    #[error("snake {id:?} has no segments")]
    EmptySnake { id: String },
    #[error("board {width}x{height} is not playable")]
    InvalidBoard { width: i32, height: i32 },
}
