//! In-memory structure models
//!
//! This module provides the authoritative data structures the visualizer
//! operates on:
//! - [`sequence::Sequence`]: contiguous values backing arrays, stacks, queues
//! - [`chain::Chain`]: linked-list values in arena form (links are implicit)
//! - [`tree::Tree`]: owned binary tree for BST and simplified Red-Black
//! - [`tree::Heap`]: array-backed Min/Max heap viewed as an implicit tree
//! - [`graph::Graph`]: fixed weighted adjacency list for Dijkstra
//!
//! All mutation primitives are bounds-checked and fail with
//! [`errors::StructureError`]; the algorithm library assumes its inputs have
//! already passed these checks at the session boundary.

pub mod chain;
pub mod errors;
pub mod graph;
pub mod sequence;
pub mod tree;

use chain::{Chain, ChainKind};
use graph::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use sequence::Sequence;
use tree::{Heap, HeapKind, Tree, TreeKind};

/// The element type stored in every structure
pub type Value = i64;

/// Which user-facing structure a session visualizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureKind {
    Array,
    Stack,
    Queue,
    SinglyLinkedList,
    DoublyLinkedList,
    BinarySearchTree,
    RedBlackTree,
    MinHeap,
    MaxHeap,
    Graph,
}

impl StructureKind {
    /// Parse a structure kind from a command-line argument
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "array" => Some(StructureKind::Array),
            "stack" => Some(StructureKind::Stack),
            "queue" => Some(StructureKind::Queue),
            "list" => Some(StructureKind::SinglyLinkedList),
            "dlist" => Some(StructureKind::DoublyLinkedList),
            "bst" => Some(StructureKind::BinarySearchTree),
            "rbt" => Some(StructureKind::RedBlackTree),
            "minheap" => Some(StructureKind::MinHeap),
            "maxheap" => Some(StructureKind::MaxHeap),
            "graph" => Some(StructureKind::Graph),
            _ => None,
        }
    }

    /// Human-readable name for titles and messages
    pub fn label(&self) -> &'static str {
        match self {
            StructureKind::Array => "Array",
            StructureKind::Stack => "Stack",
            StructureKind::Queue => "Queue",
            StructureKind::SinglyLinkedList => "Singly Linked List",
            StructureKind::DoublyLinkedList => "Doubly Linked List",
            StructureKind::BinarySearchTree => "Binary Search Tree",
            StructureKind::RedBlackTree => "Red-Black Tree",
            StructureKind::MinHeap => "Min Heap",
            StructureKind::MaxHeap => "Max Heap",
            StructureKind::Graph => "Graph (Dijkstra)",
        }
    }
}

/// The live structure owned by a session
#[derive(Debug, Clone)]
pub enum Structure {
    Sequence(Sequence),
    Chain(Chain),
    Tree(Tree),
    Heap(Heap),
    Graph(Graph),
}

impl Structure {
    /// Generate a fresh structure of the given kind.
    ///
    /// Value ranges match the original demo: sequences get 5–10 values in
    /// `0..100`, trees get 5–9 distinct values in `1..100`.  The same seed
    /// always produces the same structure.
    pub fn random(kind: StructureKind, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        match kind {
            StructureKind::Array | StructureKind::Stack | StructureKind::Queue => {
                let len = rng.gen_range(5..=10);
                let values: Vec<Value> = (0..len).map(|_| rng.gen_range(0..100)).collect();
                Structure::Sequence(Sequence::from_values(values))
            }
            StructureKind::SinglyLinkedList => {
                let len = rng.gen_range(5..=10);
                let values: Vec<Value> = (0..len).map(|_| rng.gen_range(0..100)).collect();
                Structure::Chain(Chain::from_values(ChainKind::Singly, values))
            }
            StructureKind::DoublyLinkedList => {
                let len = rng.gen_range(5..=10);
                let values: Vec<Value> = (0..len).map(|_| rng.gen_range(0..100)).collect();
                Structure::Chain(Chain::from_values(ChainKind::Doubly, values))
            }
            StructureKind::BinarySearchTree => {
                Structure::Tree(Tree::from_values(TreeKind::Bst, &distinct_values(&mut rng)))
            }
            StructureKind::RedBlackTree => Structure::Tree(Tree::from_values(
                TreeKind::RedBlack,
                &distinct_values(&mut rng),
            )),
            StructureKind::MinHeap => {
                Structure::Heap(Heap::from_values(HeapKind::Min, &distinct_values(&mut rng)))
            }
            StructureKind::MaxHeap => {
                Structure::Heap(Heap::from_values(HeapKind::Max, &distinct_values(&mut rng)))
            }
            StructureKind::Graph => Structure::Graph(Graph::demo()),
        }
    }

    /// Build a structure of the given kind from user-supplied values.
    ///
    /// The graph kind ignores the values and always uses the fixed demo
    /// graph.
    pub fn from_values(kind: StructureKind, values: Vec<Value>) -> Self {
        match kind {
            StructureKind::Array | StructureKind::Stack | StructureKind::Queue => {
                Structure::Sequence(Sequence::from_values(values))
            }
            StructureKind::SinglyLinkedList => {
                Structure::Chain(Chain::from_values(ChainKind::Singly, values))
            }
            StructureKind::DoublyLinkedList => {
                Structure::Chain(Chain::from_values(ChainKind::Doubly, values))
            }
            StructureKind::BinarySearchTree => {
                Structure::Tree(Tree::from_values(TreeKind::Bst, &values))
            }
            StructureKind::RedBlackTree => {
                Structure::Tree(Tree::from_values(TreeKind::RedBlack, &values))
            }
            StructureKind::MinHeap => Structure::Heap(Heap::from_values(HeapKind::Min, &values)),
            StructureKind::MaxHeap => Structure::Heap(Heap::from_values(HeapKind::Max, &values)),
            StructureKind::Graph => Structure::Graph(Graph::demo()),
        }
    }

    /// Number of elements currently held
    pub fn len(&self) -> usize {
        match self {
            Structure::Sequence(s) => s.len(),
            Structure::Chain(c) => c.len(),
            Structure::Tree(t) => t.len(),
            Structure::Heap(h) => h.len(),
            Structure::Graph(g) => g.node_count(),
        }
    }

    /// Check if the structure holds no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn distinct_values(rng: &mut StdRng) -> Vec<Value> {
    let len = rng.gen_range(5..=9);
    let mut seen = FxHashSet::default();
    let mut values = Vec::with_capacity(len);
    while values.len() < len {
        let v = rng.gen_range(1..100);
        if seen.insert(v) {
            values.push(v);
        }
    }
    values
}
