//! Turn-taking game driver
//!
//! The driver only knows the [`MoveSelector`] capability; humans and AIs plug
//! in behind it.

use serde::{Deserialize, Serialize};

use crate::board::{Cell, HexBoard};
use crate::colored::Color;
use crate::error::{HexError, Result};

// ============================================================================
// MOVE SELECTION
// ============================================================================

/// Something that picks a cell for the player to move
pub trait MoveSelector {
    /// Short label for logs and reports
    fn name(&self) -> &str;

    /// Choose a cell for `color` on `board`
    fn select_move(&mut self, board: &HexBoard, color: Color) -> Result<Cell>;

    /// Called when the chosen cell was rejected by the board
    ///
    /// Returning `Ok` asks for another move. Automated selectors should never
    /// get here, so the default gives up.
    fn illegal_move(&mut self, cell: Cell) -> Result<()> {
        Err(HexError::IllegalMove(cell))
    }
}

// ============================================================================
// GAME STATE
// ============================================================================

/// A move that was accepted by the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    pub color: Color,
    pub cell: Cell,
}

/// Summary of a game, suitable for reports
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub size: usize,
    pub winner: Color,
    pub moves: Vec<PlayedMove>,
    pub illegal_attempts: usize,
}

/// A game in progress
#[derive(Clone, Debug)]
pub struct Game {
    board: HexBoard,
    to_move: Color,
    moves: Vec<PlayedMove>,
    illegal_attempts: usize,
}

impl Game {
    /// Start a game on `board`; Blue moves first
    pub fn new(board: HexBoard) -> Self {
        Self {
            board,
            to_move: Color::Blue,
            moves: Vec::new(),
            illegal_attempts: 0,
        }
    }

    pub fn board(&self) -> &HexBoard {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    pub fn winner(&self) -> Color {
        self.board.winner()
    }

    pub fn is_over(&self) -> bool {
        !self.winner().is_empty()
    }

    /// Ask `selector` for a move until the board accepts one
    pub fn play_turn(&mut self, selector: &mut dyn MoveSelector) -> Result<Cell> {
        let color = self.to_move;
        loop {
            if self.board.is_full() {
                return Err(HexError::BoardFull);
            }

            let cell = selector.select_move(&self.board, color)?;
            if self.board.place_cell(cell, color) {
                tracing::debug!("{} ({}) plays {}", color, selector.name(), cell);
                self.moves.push(PlayedMove { color, cell });
                self.to_move = color.opponent();
                return Ok(cell);
            }

            tracing::debug!("{} ({}) tried illegal {}", color, selector.name(), cell);
            self.illegal_attempts += 1;
            selector.illegal_move(cell)?;
        }
    }

    /// Alternate turns until someone connects their sides
    pub fn play(
        &mut self,
        blue: &mut dyn MoveSelector,
        red: &mut dyn MoveSelector,
    ) -> Result<GameRecord> {
        while !self.is_over() {
            let selector: &mut dyn MoveSelector = match self.to_move {
                Color::Red => &mut *red,
                _ => &mut *blue,
            };
            self.play_turn(selector)?;
        }

        tracing::info!("{} wins after {} moves", self.winner(), self.moves.len());
        Ok(self.record())
    }

    pub fn record(&self) -> GameRecord {
        GameRecord {
            size: self.board.size(),
            winner: self.winner(),
            moves: self.moves.clone(),
            illegal_attempts: self.illegal_attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Plays a fixed list of cells
    struct Scripted {
        cells: VecDeque<Cell>,
        retry_illegal: bool,
        rejected: Vec<Cell>,
    }

    impl Scripted {
        fn new(cells: &[(usize, usize)]) -> Self {
            Self {
                cells: cells.iter().map(|&(x, y)| Cell::new(x, y)).collect(),
                retry_illegal: false,
                rejected: Vec::new(),
            }
        }

        fn retrying(mut self) -> Self {
            self.retry_illegal = true;
            self
        }
    }

    impl MoveSelector for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        fn select_move(&mut self, _board: &HexBoard, _color: Color) -> Result<Cell> {
            self.cells.pop_front().ok_or(HexError::InputClosed)
        }

        fn illegal_move(&mut self, cell: Cell) -> Result<()> {
            self.rejected.push(cell);
            if self.retry_illegal {
                Ok(())
            } else {
                Err(HexError::IllegalMove(cell))
            }
        }
    }

    #[test]
    fn test_blue_moves_first_and_wins() {
        let mut game = Game::new(HexBoard::new(2));
        let mut blue = Scripted::new(&[(0, 0), (1, 0)]);
        let mut red = Scripted::new(&[(0, 1)]);

        let record = game.play(&mut blue, &mut red).unwrap();

        assert_eq!(record.winner, Color::Blue);
        assert_eq!(record.size, 2);
        assert_eq!(
            record.moves,
            vec![
                PlayedMove {
                    color: Color::Blue,
                    cell: Cell::new(0, 0),
                },
                PlayedMove {
                    color: Color::Red,
                    cell: Cell::new(0, 1),
                },
                PlayedMove {
                    color: Color::Blue,
                    cell: Cell::new(1, 0),
                },
            ]
        );
        assert!(game.is_over());
    }

    #[test]
    fn test_red_wins() {
        // Blue's (1,0) and (0,1) only touch at a corner; Red joins along the diagonal
        let mut game = Game::new(HexBoard::new(2));
        let mut blue = Scripted::new(&[(1, 0), (0, 1)]);
        let mut red = Scripted::new(&[(0, 0), (1, 1)]);
        let record = game.play(&mut blue, &mut red).unwrap();
        assert_eq!(record.winner, Color::Red);
        assert_eq!(record.moves.len(), 4);
    }

    #[test]
    fn test_illegal_move_rejected_by_default() {
        let mut game = Game::new(HexBoard::new(3));
        let mut blue = Scripted::new(&[(1, 1), (1, 1)]);
        let mut red = Scripted::new(&[(1, 1)]);

        game.play_turn(&mut blue).unwrap();
        let err = game.play_turn(&mut red).unwrap_err();

        assert!(matches!(err, HexError::IllegalMove(c) if c == Cell::new(1, 1)));
        assert_eq!(game.to_move(), Color::Red);
        assert_eq!(game.record().illegal_attempts, 1);
    }

    #[test]
    fn test_illegal_move_retry() {
        let mut game = Game::new(HexBoard::new(3));
        let mut blue = Scripted::new(&[(5, 5), (0, 0)]).retrying();

        let cell = game.play_turn(&mut blue).unwrap();

        assert_eq!(cell, Cell::new(0, 0));
        assert_eq!(blue.rejected, vec![Cell::new(5, 5)]);
        assert_eq!(game.to_move(), Color::Red);
    }

    #[test]
    fn test_selector_errors_propagate() {
        let mut game = Game::new(HexBoard::new(3));
        let mut blue = Scripted::new(&[]);
        assert!(matches!(
            game.play_turn(&mut blue),
            Err(HexError::InputClosed)
        ));
    }

    #[test]
    fn test_record_serializes() {
        let mut game = Game::new(HexBoard::new(1));
        let mut blue = Scripted::new(&[(0, 0)]);
        let mut red = Scripted::new(&[]);
        let record = game.play(&mut blue, &mut red).unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"winner\":\"Blue\""));
    }
}
