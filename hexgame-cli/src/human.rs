//! Human player reading moves from a text stream

use std::io::{BufRead, Write};

use hexgame_core::{Cell, Color, HexBoard, HexError, MoveSelector, Result};

/// Prompts for a row and a column on `output`, reads them from `input`
pub struct HumanPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one non-negative number, asking again on bad input
    fn read_number(&mut self, prompt: &str) -> Result<usize> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(HexError::InputClosed);
            }
            match line.trim().parse() {
                Ok(n) => return Ok(n),
                Err(_) => writeln!(self.output, "Please enter a non-negative whole number.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> MoveSelector for HumanPrompt<R, W> {
    fn name(&self) -> &str {
        "human"
    }

    fn select_move(&mut self, board: &HexBoard, color: Color) -> Result<Cell> {
        let direction = match color {
            Color::Red => "top to bottom",
            _ => "left to right",
        };
        write!(self.output, "\n{board}")?;
        writeln!(
            self.output,
            "{color} to move. Build a \"{}\" path from {direction}.",
            color.symbol()
        )?;

        let y = self.read_number("Enter the row number    : ")?;
        let x = self.read_number("Enter the column number : ")?;
        Ok(Cell::new(x, y))
    }

    fn illegal_move(&mut self, _cell: Cell) -> Result<()> {
        writeln!(self.output, "That move was illegal.")?;
        Ok(())
    }
}
