//! Error types for board and game operations

use crate::board::{Cell, MAX_SIZE, MIN_SIZE};

#[derive(Debug, thiserror::Error)]
pub enum HexError {
    #[error(
        "board size {0} is outside the supported range {min}..={max}",
        min = MIN_SIZE,
        max = MAX_SIZE
    )]
    InvalidBoardSize(usize),

    #[error("illegal move at {0}")]
    IllegalMove(Cell),

    #[error("no empty cell left on the board")]
    BoardFull,

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HexError>;
