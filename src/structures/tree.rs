//! Binary tree models
//!
//! This module provides the tree-shaped structures:
//! - [`Tree`]: an owned binary tree used for BSTs and the simplified
//!   Red-Black tree (node colors, no rotations)
//! - [`Heap`]: an array-backed Min/Max heap, viewed as an implicit binary
//!   tree through [`array_to_tree`] when rendered
//!
//! The non-instrumented operations here are the reference implementations:
//! the algorithm library produces traces whose final snapshot must match
//! what these methods compute directly.
//!
//! # Keys
//!
//! Keyed structures reject duplicate inserts as a no-op by policy.  BST
//! removal of a node with two children promotes the in-order successor's
//! value and removes that successor from the right subtree.

use super::Value;

/// Node color for the simplified Red-Black tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// One node of an owned binary tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub value: Value,
    pub color: Option<Color>,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn new(value: Value) -> Self {
        TreeNode {
            value,
            color: None,
            left: None,
            right: None,
        }
    }

    pub fn with_color(value: Value, color: Color) -> Self {
        TreeNode {
            value,
            color: Some(color),
            left: None,
            right: None,
        }
    }
}

/// Which insertion discipline a [`Tree`] follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeKind {
    Bst,
    RedBlack,
}

/// Owned binary search tree, optionally color-tagged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    pub kind: TreeKind,
    pub root: Option<Box<TreeNode>>,
}

impl Tree {
    pub fn new(kind: TreeKind) -> Self {
        Tree { kind, root: None }
    }

    /// Build a tree by inserting values in order; Red-Black trees get a
    /// color-normalization pass afterwards.
    pub fn from_values(kind: TreeKind, values: &[Value]) -> Self {
        let mut tree = Tree::new(kind);
        for &v in values {
            tree.insert(v);
        }
        if kind == TreeKind::RedBlack {
            tree.fix_colors();
        }
        tree
    }

    pub fn len(&self) -> usize {
        fn count(node: &Option<Box<TreeNode>>) -> usize {
            match node {
                Some(n) => 1 + count(&n.left) + count(&n.right),
                None => 0,
            }
        }
        count(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn contains(&self, value: Value) -> bool {
        let mut node = &self.root;
        while let Some(n) = node {
            if value < n.value {
                node = &n.left;
            } else if value > n.value {
                node = &n.right;
            } else {
                return true;
            }
        }
        false
    }

    /// Insert under strict order; duplicate insert is a no-op.
    /// Red-Black nodes enter red, plain BST nodes uncolored.
    pub fn insert(&mut self, value: Value) {
        let new_node = match self.kind {
            TreeKind::Bst => TreeNode::new(value),
            TreeKind::RedBlack => TreeNode::with_color(value, Color::Red),
        };
        fn insert_rec(node: &mut Option<Box<TreeNode>>, new_node: TreeNode) {
            match node {
                None => *node = Some(Box::new(new_node)),
                Some(n) => {
                    if new_node.value < n.value {
                        insert_rec(&mut n.left, new_node);
                    } else if new_node.value > n.value {
                        insert_rec(&mut n.right, new_node);
                    }
                }
            }
        }
        insert_rec(&mut self.root, new_node);
    }

    /// Remove a value; absent values are a no-op.  Two-child nodes promote
    /// the in-order successor's value and remove the successor below.
    pub fn remove(&mut self, value: Value) {
        fn remove_rec(node: &mut Option<Box<TreeNode>>, value: Value) {
            let Some(n) = node else { return };
            if value < n.value {
                remove_rec(&mut n.left, value);
            } else if value > n.value {
                remove_rec(&mut n.right, value);
            } else {
                match (n.left.take(), n.right.take()) {
                    (None, None) => *node = None,
                    (Some(left), None) => *node = Some(left),
                    (None, Some(right)) => *node = Some(right),
                    (Some(left), Some(right)) => {
                        let successor = min_value(&right);
                        n.value = successor;
                        n.left = Some(left);
                        n.right = Some(right);
                        remove_rec(&mut n.right, successor);
                    }
                }
            }
        }
        fn min_value(node: &TreeNode) -> Value {
            let mut n = node;
            while let Some(left) = &n.left {
                n = left;
            }
            n.value
        }
        remove_rec(&mut self.root, value);
    }

    /// In-order traversal of all values
    pub fn in_order(&self) -> Vec<Value> {
        fn walk(node: &Option<Box<TreeNode>>, out: &mut Vec<Value>) {
            if let Some(n) = node {
                walk(&n.left, out);
                out.push(n.value);
                walk(&n.right, out);
            }
        }
        let mut out = Vec::new();
        walk(&self.root, &mut out);
        out
    }

    /// Simplified Red-Black color normalization: force the root black,
    /// force children of red parents black, default uncolored nodes red.
    /// No rotations; black-height balance is not guaranteed.
    pub fn fix_colors(&mut self) {
        fn fix(node: &mut Option<Box<TreeNode>>, parent_color: Option<Color>, is_root: bool) {
            let Some(n) = node else { return };
            if parent_color == Some(Color::Red) {
                n.color = Some(Color::Black);
            } else if n.color.is_none() {
                n.color = Some(Color::Red);
            }
            if is_root {
                n.color = Some(Color::Black);
            }
            let my_color = n.color;
            fix(&mut n.left, my_color, false);
            fix(&mut n.right, my_color, false);
        }
        fix(&mut self.root, None, true);
    }
}

/// Which end of the order a heap keeps at its root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapKind {
    Min,
    Max,
}

impl HeapKind {
    /// True when `a` belongs closer to the root than `b`
    pub fn outranks(&self, a: Value, b: Value) -> bool {
        match self {
            HeapKind::Min => a < b,
            HeapKind::Max => a > b,
        }
    }
}

/// Array-backed binary heap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heap {
    kind: HeapKind,
    items: Vec<Value>,
}

impl Heap {
    pub fn new(kind: HeapKind) -> Self {
        Heap {
            kind,
            items: Vec::new(),
        }
    }

    /// Build a heap from arbitrary values with a bottom-up heapify pass
    pub fn from_values(kind: HeapKind, values: &[Value]) -> Self {
        let mut heap = Heap {
            kind,
            items: values.to_vec(),
        };
        heap.heapify();
        heap
    }

    pub fn from_array(kind: HeapKind, items: Vec<Value>) -> Self {
        Heap { kind, items }
    }

    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn contains(&self, value: Value) -> bool {
        self.items.contains(&value)
    }

    /// Position of the first occurrence of `value`
    pub fn position(&self, value: Value) -> Option<usize> {
        self.items.iter().position(|&v| v == value)
    }

    fn heapify(&mut self) {
        let n = self.items.len();
        if n < 2 {
            return;
        }
        for i in (0..n / 2).rev() {
            self.sift_down(i);
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.items.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut best = i;
            if left < n && self.kind.outranks(self.items[left], self.items[best]) {
                best = left;
            }
            if right < n && self.kind.outranks(self.items[right], self.items[best]) {
                best = right;
            }
            if best == i {
                break;
            }
            self.items.swap(i, best);
            i = best;
        }
    }

    /// True when every parent outranks (or equals) both children
    pub fn is_valid(&self) -> bool {
        let n = self.items.len();
        for i in 0..n {
            for child in [2 * i + 1, 2 * i + 2] {
                if child < n && self.kind.outranks(self.items[child], self.items[i]) {
                    return false;
                }
            }
        }
        true
    }

    /// View the backing array as an implicit binary tree for rendering
    pub fn to_tree(&self) -> Option<Box<TreeNode>> {
        array_to_tree(&self.items)
    }
}

/// Build the implicit-tree view of an array: index `i` parents `2i+1` and
/// `2i+2`.
pub fn array_to_tree(items: &[Value]) -> Option<Box<TreeNode>> {
    fn build(items: &[Value], i: usize) -> Option<Box<TreeNode>> {
        if i >= items.len() {
            return None;
        }
        let mut node = TreeNode::new(items[i]);
        node.left = build(items, 2 * i + 1);
        node.right = build(items, 2 * i + 2);
        Some(Box::new(node))
    }
    build(items, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bst_insert_keeps_order_and_ignores_duplicates() {
        let mut tree = Tree::new(TreeKind::Bst);
        for v in [5, 2, 8, 1, 2] {
            tree.insert(v);
        }
        assert_eq!(tree.in_order(), vec![1, 2, 5, 8]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn bst_remove_leaf_and_two_child_node() {
        let mut tree = Tree::from_values(TreeKind::Bst, &[5, 2, 8, 1]);
        tree.remove(2);
        assert_eq!(tree.in_order(), vec![1, 5, 8]);

        let mut tree = Tree::from_values(TreeKind::Bst, &[5, 2, 8, 7, 9]);
        tree.remove(8);
        assert_eq!(tree.in_order(), vec![2, 5, 7, 9]);
        // in-order successor 9 was promoted into 8's place
        let root = tree.root.as_ref().unwrap();
        assert_eq!(root.right.as_ref().unwrap().value, 9);
    }

    #[test]
    fn rbt_normalization_invariants() {
        let tree = Tree::from_values(TreeKind::RedBlack, &[50, 25, 75, 10, 30, 60, 90]);
        let root = tree.root.as_ref().unwrap();
        assert_eq!(root.color, Some(Color::Black));
        fn no_red_red(node: &Option<Box<TreeNode>>, parent_red: bool) -> bool {
            match node {
                None => true,
                Some(n) => {
                    let red = n.color == Some(Color::Red);
                    if red && parent_red {
                        return false;
                    }
                    no_red_red(&n.left, red) && no_red_red(&n.right, red)
                }
            }
        }
        assert!(no_red_red(&tree.root, false));
    }

    #[test]
    fn heapify_establishes_heap_order() {
        let heap = Heap::from_values(HeapKind::Min, &[9, 4, 7, 1, 3]);
        assert!(heap.is_valid());
        assert_eq!(heap.items()[0], 1);

        let heap = Heap::from_values(HeapKind::Max, &[9, 4, 7, 1, 3]);
        assert!(heap.is_valid());
        assert_eq!(heap.items()[0], 9);
    }

    #[test]
    fn implicit_tree_shape() {
        let tree = array_to_tree(&[1, 2, 3, 4]).unwrap();
        assert_eq!(tree.value, 1);
        assert_eq!(tree.left.as_ref().unwrap().value, 2);
        assert_eq!(tree.right.as_ref().unwrap().value, 3);
        assert_eq!(tree.left.as_ref().unwrap().left.as_ref().unwrap().value, 4);
    }
}
