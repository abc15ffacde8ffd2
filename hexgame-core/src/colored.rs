//! Node coloring and monochromatic path finding

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::graph::{NodeId, WeightedGraph};

/// Occupancy of a node
///
/// Blue connects left to right and moves first, Red connects top to bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[default]
    Empty,
    Blue,
    Red,
}

impl Color {
    /// The other player; `Empty` stays `Empty`
    pub fn opponent(self) -> Self {
        match self {
            Color::Blue => Color::Red,
            Color::Red => Color::Blue,
            Color::Empty => Color::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Color::Empty
    }

    /// Board glyph used by the text renderer
    pub fn symbol(self) -> char {
        match self {
            Color::Blue => 'X',
            Color::Red => 'O',
            Color::Empty => '.',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Blue => "Blue",
            Color::Red => "Red",
            Color::Empty => "Empty",
        };
        f.write_str(name)
    }
}

/// A graph whose nodes each carry a [`Color`]
///
/// The topology sits behind an `Arc` and is copied on write, so clones share
/// the adjacency matrix and only duplicate the color vector.
#[derive(Clone, Debug)]
pub struct ColoredGraph {
    graph: Arc<WeightedGraph>,
    colors: Vec<Color>,
}

impl ColoredGraph {
    /// Graph with `vertex_count` nodes, no edges, all nodes empty
    pub fn new(vertex_count: usize) -> Self {
        Self {
            graph: Arc::new(WeightedGraph::new(vertex_count)),
            colors: vec![Color::Empty; vertex_count],
        }
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    pub fn vertex_count(&self) -> usize {
        self.colors.len()
    }

    pub fn color(&self, node: NodeId) -> Color {
        self.colors[node]
    }

    pub fn set_color(&mut self, node: NodeId, color: Color) {
        self.colors[node] = color;
    }

    pub fn adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.graph.adjacent(a, b)
    }

    pub fn neighbors(&self, v: NodeId) -> Vec<NodeId> {
        self.graph.neighbors(v)
    }

    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        Arc::make_mut(&mut self.graph).add_edge(a, b);
    }

    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) {
        Arc::make_mut(&mut self.graph).remove_edge(a, b);
    }

    /// Is there a path from `start` to `end` through nodes of one color?
    ///
    /// Depth-first search with an explicit stack; the visited set lives only
    /// for the duration of the call.
    pub fn monochromatically_connected(&self, start: NodeId, end: NodeId) -> bool {
        let color = self.color(start);
        if color != self.color(end) {
            return false;
        }
        if start == end {
            return true;
        }

        let mut visited = vec![false; self.vertex_count()];
        let mut stack = vec![start];
        visited[start] = true;

        while let Some(node) = stack.pop() {
            for n in self.graph.neighbors(node) {
                if visited[n] || self.colors[n] != color {
                    continue;
                }
                if n == end {
                    return true;
                }
                visited[n] = true;
                stack.push(n);
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0 - 1 - 2 - 3 in a line, plus 0 - 4
    fn line_graph() -> ColoredGraph {
        let mut g = ColoredGraph::new(5);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        g.add_edge(0, 4);
        g
    }

    #[test]
    fn test_colors_start_empty() {
        let g = ColoredGraph::new(3);
        assert!((0..3).all(|n| g.color(n).is_empty()));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Color::Blue.opponent(), Color::Red);
        assert_eq!(Color::Red.opponent(), Color::Blue);
        assert_eq!(Color::Empty.opponent(), Color::Empty);
    }

    #[test]
    fn test_connected_through_same_color() {
        let mut g = line_graph();
        for n in 0..4 {
            g.set_color(n, Color::Red);
        }
        assert!(g.monochromatically_connected(0, 3));
        assert!(g.monochromatically_connected(3, 0));
    }

    #[test]
    fn test_broken_by_other_color() {
        let mut g = line_graph();
        g.set_color(0, Color::Red);
        g.set_color(1, Color::Red);
        g.set_color(2, Color::Blue);
        g.set_color(3, Color::Red);

        assert!(!g.monochromatically_connected(0, 3));
        assert!(g.monochromatically_connected(0, 1));
    }

    #[test]
    fn test_different_endpoint_colors() {
        let mut g = line_graph();
        g.set_color(0, Color::Blue);
        g.set_color(1, Color::Red);
        assert!(!g.monochromatically_connected(0, 1));
    }

    #[test]
    fn test_self_path() {
        let mut g = line_graph();
        g.set_color(4, Color::Blue);
        assert!(g.monochromatically_connected(4, 4));
    }

    #[test]
    fn test_cycles_terminate() {
        // Triangle 0-1-2 with an isolated node 3 of the same color
        let mut g = ColoredGraph::new(4);
        g.add_edge(0, 1);
        g.add_edge(1, 2);
        g.add_edge(2, 0);
        for n in 0..4 {
            g.set_color(n, Color::Blue);
        }
        assert!(!g.monochromatically_connected(0, 3));
    }

    #[test]
    fn test_clone_shares_topology_until_write() {
        let mut g = line_graph();
        let mut copy = g.clone();
        assert!(Arc::ptr_eq(&g.graph, &copy.graph));

        copy.set_color(0, Color::Blue);
        assert_eq!(g.color(0), Color::Empty);

        copy.remove_edge(0, 1);
        assert!(g.adjacent(0, 1));
        assert!(!copy.adjacent(0, 1));

        g.set_color(1, Color::Red);
        assert_eq!(copy.color(1), Color::Empty);
    }
}
