//! Fixed weighted graph for the shortest-path demo
//!
//! The graph is a small undirected adjacency list.  It is never mutated by
//! any operation; Dijkstra traces read it and the finalize commit is a
//! no-op.

use super::Value;

/// Weighted adjacency list, `adjacency[u] = [(v, weight), ...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<(usize, Value)>>,
}

impl Graph {
    pub fn from_adjacency(adjacency: Vec<Vec<(usize, Value)>>) -> Self {
        Graph { adjacency }
    }

    /// The 4-node demo graph used by the visualizer
    pub fn demo() -> Self {
        Graph {
            adjacency: vec![
                vec![(1, 2), (2, 4)],
                vec![(0, 2), (2, 1), (3, 7)],
                vec![(0, 4), (1, 1), (3, 3)],
                vec![(1, 7), (2, 3)],
            ],
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn neighbors(&self, node: usize) -> &[(usize, Value)] {
        &self.adjacency[node]
    }

    pub fn adjacency(&self) -> &[Vec<(usize, Value)>] {
        &self.adjacency
    }
}
