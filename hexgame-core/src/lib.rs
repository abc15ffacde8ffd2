//! Hexgame Core - Board engine for the game of Hex
//!
//! This crate provides the board logic:
//! - Weighted graph with dense adjacency storage
//! - Node coloring and monochromatic path queries
//! - Hex board with side nodes for single-query win detection
//! - Turn-taking game driver over a move selection trait

pub mod graph;
pub mod colored;
pub mod board;
pub mod game;
pub mod error;

// Re-exports for convenient access
pub use graph::{GraphError, NodeId, WeightedGraph, DEFAULT_WEIGHT, MAX_VERTICES};
pub use colored::{Color, ColoredGraph};
pub use board::{Cell, HexBoard, Side, MAX_SIZE, MIN_SIZE};
pub use game::{Game, GameRecord, MoveSelector, PlayedMove};
pub use error::{HexError, Result};
