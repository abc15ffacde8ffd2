//! Hex board on top of a colored graph
//!
//! Cell `(x, y)` is node `y * size + x`; row 0 is the bottom row. Four side
//! nodes follow the grid nodes and are pre-colored with the owner of that
//! side, so a win is a single monochromatic path query between two of them:
//!
//! ```text
//!        ^ y
//!         \             node = y * size + x
//!          \      x
//!           0----->
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::colored::{Color, ColoredGraph};
use crate::error::{HexError, Result};
use crate::graph::NodeId;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Smallest supported board dimension
pub const MIN_SIZE: usize = 1;

/// Largest supported board dimension
pub const MAX_SIZE: usize = 20;

/// Number of side nodes appended after the grid
const SIDE_COUNT: usize = 4;

/// Neighbor offsets (dx, dy): right, left, top, bottom, top-right, bottom-left
const NEIGHBOR_OFFSETS: [(isize, isize); 6] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, -1),
];

// ============================================================================
// TYPES
// ============================================================================

/// A board cell: `x` is the column, `y` the row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, column {}", self.y, self.x)
    }
}

/// Board side, each owned by one player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left = 0,
    Right = 1,
    Top = 2,
    Bottom = 3,
}

impl Side {
    pub const ALL: [Side; SIDE_COUNT] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    /// Player who has to connect this side
    pub fn owner(self) -> Color {
        match self {
            Side::Left | Side::Right => Color::Blue,
            Side::Top | Side::Bottom => Color::Red,
        }
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// A `size x size` Hex board (clone to simulate)
#[derive(Clone, Debug)]
pub struct HexBoard {
    size: usize,
    empty_count: usize,
    graph: ColoredGraph,
}

impl HexBoard {
    /// Build the board graph: grid adjacency plus the four side nodes
    ///
    /// The size is not re-validated here; see [`HexBoard::validated`].
    pub fn new(size: usize) -> Self {
        debug_assert!(size >= MIN_SIZE, "board needs at least one cell");

        let cells = size * size;
        let mut board = Self {
            size,
            empty_count: cells,
            graph: ColoredGraph::new(cells + SIDE_COUNT),
        };

        for y in 0..size {
            for x in 0..size {
                let from = board.node(x, y);
                for (dx, dy) in NEIGHBOR_OFFSETS {
                    if let Some(to) = board.offset(x, y, dx, dy) {
                        board.graph.add_edge(from, to);
                    }
                }
            }
        }

        for side in Side::ALL {
            let sentinel = board.sentinel(side);
            board.graph.set_color(sentinel, side.owner());
            for i in 0..size {
                let (x, y) = match side {
                    Side::Left => (0, i),
                    Side::Right => (size - 1, i),
                    Side::Top => (i, size - 1),
                    Side::Bottom => (i, 0),
                };
                let cell = board.node(x, y);
                board.graph.add_edge(cell, sentinel);
            }
        }

        board
    }

    /// Build a board after checking the size is within `MIN_SIZE..=MAX_SIZE`
    pub fn validated(size: usize) -> Result<Self> {
        if (MIN_SIZE..=MAX_SIZE).contains(&size) {
            Ok(Self::new(size))
        } else {
            Err(HexError::InvalidBoardSize(size))
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn empty_count(&self) -> usize {
        self.empty_count
    }

    pub fn is_full(&self) -> bool {
        self.empty_count == 0
    }

    /// Underlying colored graph (grid nodes plus side nodes)
    pub fn graph(&self) -> &ColoredGraph {
        &self.graph
    }

    /// Node id of cell `(x, y)`
    pub fn node(&self, x: usize, y: usize) -> NodeId {
        y * self.size + x
    }

    /// Cell for a grid node; `None` for side nodes
    pub fn cell_of(&self, node: NodeId) -> Option<Cell> {
        (node < self.size * self.size).then(|| Cell::new(node % self.size, node / self.size))
    }

    /// Node id of a side node
    pub fn sentinel(&self, side: Side) -> NodeId {
        self.size * self.size + side as usize
    }

    pub fn color(&self, node: NodeId) -> Color {
        self.graph.color(node)
    }

    /// Color of cell `(x, y)`, `None` when off the board
    pub fn cell_color(&self, x: usize, y: usize) -> Option<Color> {
        self.in_bounds(x, y).then(|| self.graph.color(self.node(x, y)))
    }

    /// Claim an empty cell
    ///
    /// Returns false without touching the board if the cell is off the board,
    /// already taken, or `color` is `Empty`.
    pub fn place(&mut self, x: usize, y: usize, color: Color) -> bool {
        if !self.in_bounds(x, y) || color.is_empty() {
            return false;
        }
        let node = self.node(x, y);
        if !self.graph.color(node).is_empty() {
            return false;
        }

        self.graph.set_color(node, color);
        self.empty_count -= 1;
        true
    }

    pub fn place_cell(&mut self, cell: Cell, color: Color) -> bool {
        self.place(cell.x, cell.y, color)
    }

    /// The player whose sides are joined, or `Empty` if nobody has won
    pub fn winner(&self) -> Color {
        if self
            .graph
            .monochromatically_connected(self.sentinel(Side::Left), self.sentinel(Side::Right))
        {
            Color::Blue
        } else if self
            .graph
            .monochromatically_connected(self.sentinel(Side::Top), self.sentinel(Side::Bottom))
        {
            Color::Red
        } else {
            Color::Empty
        }
    }

    /// Empty cells in row-major (node id) order
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size * self.size)
            .filter(|&node| self.graph.color(node).is_empty())
            .filter_map(|node| self.cell_of(node))
    }

    fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    fn offset(&self, x: usize, y: usize, dx: isize, dy: isize) -> Option<NodeId> {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        self.in_bounds(nx, ny).then(|| self.node(nx, ny))
    }
}

/// Draws the rhombus top row first, each lower row shifted right:
///
/// ```text
/// 1  . - X
///     \ / \
///   0  O - .
///      0   1
/// ```
impl fmt::Display for HexBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size;

        for y in (0..size).rev() {
            let indent = 2 * (size - 1 - y);
            write!(f, "{:indent$}{:<3}", "", y)?;
            let row: Vec<String> = (0..size)
                .map(|x| self.graph.color(self.node(x, y)).symbol().to_string())
                .collect();
            writeln!(f, "{}", row.join(" - "))?;

            if y > 0 {
                write!(f, "{:width$}", "", width = indent + 3)?;
                writeln!(f, "{} \\", " \\ /".repeat(size - 1))?;
            }
        }

        write!(f, "{:width$}", "", width = 2 * (size - 1) + 3)?;
        for x in 0..size {
            write!(f, "{:<4}", x)?;
        }
        writeln!(f)
    }
}
