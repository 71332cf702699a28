//! Traced binary search tree operations
//!
//! Descent is narrated one comparison at a time, highlighting nodes by
//! value.  Red-Black variants append a recoloring pass after each
//! mutation: the fix is first simulated on a scratch clone to collect the
//! color events, then replayed onto the working tree so every frame
//! snapshots the whole tree mid-fix.  Recoloring only, no rotations.
//!
//! Semantic non-events (inserting a value already present, removing a
//! value that is absent) return a one-frame trace whose committed tree
//! equals the input.

use crate::structures::tree::{Color, Tree, TreeKind, TreeNode};
use crate::structures::Value;
use crate::trace::{ElementId, Snapshot, Trace};

fn tree_frame(trace: &mut Trace, tree: &Tree, highlight: &[Value], explanation: String) {
    trace.frame(
        Snapshot::Tree(tree.root.clone()),
        highlight.iter().map(|&v| ElementId::Key(v)).collect(),
        explanation,
    );
}

/// Emit one frame per comparison on the way down to where `value` belongs.
/// Returns the parent the new node will hang off, or `None` for an empty
/// tree.
fn descend_to_slot(trace: &mut Trace, work: &Tree, value: Value) -> Option<Value> {
    let mut node = &work.root;
    let mut parent = None;
    while let Some(n) = node {
        parent = Some(n.value);
        if value < n.value {
            tree_frame(
                trace,
                work,
                &[n.value],
                format!("Go left from {} (since {} < {})", n.value, value, n.value),
            );
            node = &n.left;
        } else {
            tree_frame(
                trace,
                work,
                &[n.value],
                format!("Go right from {} (since {} > {})", n.value, value, n.value),
            );
            node = &n.right;
        }
    }
    parent
}

/// Emit one frame per comparison on the way down to an existing `value`
fn descend_to_value(trace: &mut Trace, work: &Tree, value: Value) {
    let mut node = &work.root;
    while let Some(n) = node {
        if value < n.value {
            tree_frame(
                trace,
                work,
                &[n.value],
                format!("Go left from {} (since {} < {})", n.value, value, n.value),
            );
            node = &n.left;
        } else if value > n.value {
            tree_frame(
                trace,
                work,
                &[n.value],
                format!("Go right from {} (since {} > {})", n.value, value, n.value),
            );
            node = &n.right;
        } else {
            break;
        }
    }
}

fn insert_frames(trace: &mut Trace, work: &mut Tree, value: Value) {
    let is_rbt = work.kind == TreeKind::RedBlack;
    if work.is_empty() {
        work.insert(value);
        let msg = if is_rbt {
            format!("Insert {} as root (red).", value)
        } else {
            format!("Insert {} as root.", value)
        };
        tree_frame(trace, work, &[value], msg);
        return;
    }
    let parent = descend_to_slot(trace, work, value);
    work.insert(value);
    if let Some(p) = parent {
        let side = if value < p { "left" } else { "right" };
        let msg = if is_rbt {
            format!("Insert {} as {} child of {} (red).", value, side, p)
        } else {
            format!("Insert {} as {} child of {}", value, side, p)
        };
        tree_frame(trace, work, &[value], msg);
    }
}

/// Why a node changed color during the fix pass
enum ColorEvent {
    /// Parent is red, node forced black
    RedParent(Value),
    /// Uncolored node defaulted to red
    Uncolored(Value),
    /// Root forced black
    Root(Value),
}

/// Run the normalization pass over a scratch clone and record which nodes
/// actually change color, in visit order.
fn collect_color_events(tree: &Tree) -> Vec<ColorEvent> {
    fn visit(
        node: &mut Option<Box<TreeNode>>,
        parent_color: Option<Color>,
        is_root: bool,
        events: &mut Vec<ColorEvent>,
    ) {
        let Some(n) = node else { return };
        if parent_color == Some(Color::Red) {
            if n.color != Some(Color::Black) {
                events.push(ColorEvent::RedParent(n.value));
            }
            n.color = Some(Color::Black);
        } else if n.color.is_none() {
            events.push(ColorEvent::Uncolored(n.value));
            n.color = Some(Color::Red);
        }
        if is_root && n.color != Some(Color::Black) {
            events.push(ColorEvent::Root(n.value));
            n.color = Some(Color::Black);
        }
        let my_color = n.color;
        visit(&mut n.left, my_color, false, events);
        visit(&mut n.right, my_color, false, events);
    }
    let mut sim = tree.clone();
    let mut events = Vec::new();
    visit(&mut sim.root, None, true, &mut events);
    events
}

fn set_color(node: &mut Option<Box<TreeNode>>, value: Value, color: Color) {
    if let Some(n) = node {
        if value < n.value {
            set_color(&mut n.left, value, color);
        } else if value > n.value {
            set_color(&mut n.right, value, color);
        } else {
            n.color = Some(color);
        }
    }
}

/// Replay the collected color events onto the working tree, one frame per
/// recoloring.
fn fix_colors_frames(trace: &mut Trace, work: &mut Tree) {
    for event in collect_color_events(work) {
        let (value, color, msg) = match event {
            ColorEvent::RedParent(v) => (
                v,
                Color::Black,
                format!("Fix: Parent is red, so {} must be black.", v),
            ),
            ColorEvent::Uncolored(v) => (
                v,
                Color::Red,
                format!("Set {} to red (default for new node).", v),
            ),
            ColorEvent::Root(v) => (v, Color::Black, format!("Root {} must be black.", v)),
        };
        set_color(&mut work.root, value, color);
        tree_frame(trace, work, &[value], msg);
    }
}

/// Insert `value`, narrating the descent; duplicates are a one-frame
/// non-event
pub fn insert(tree: &Tree, value: Value) -> (Trace, Tree) {
    if tree.contains(value) {
        let trace = Trace::single(
            Snapshot::Tree(tree.root.clone()),
            vec![ElementId::Key(value)],
            &format!("Value {} already exists in the tree.", value),
        );
        return (trace, tree.clone());
    }
    let mut trace = Trace::new();
    let mut work = tree.clone();
    let is_rbt = work.kind == TreeKind::RedBlack;
    if !is_rbt {
        tree_frame(
            &mut trace,
            &work,
            &[],
            format!("Step 1: Start at root to add {}.", value),
        );
    }
    insert_frames(&mut trace, &mut work, value);
    if is_rbt {
        fix_colors_frames(&mut trace, &mut work);
        tree_frame(
            &mut trace,
            &work,
            &[],
            format!("Done: {} added and Red-Black properties restored.", value),
        );
    } else {
        tree_frame(
            &mut trace,
            &work,
            &[],
            format!("Done. {} added to the tree.", value),
        );
    }
    (trace, work)
}

/// Remove `value`, narrating the search; absent values are a one-frame
/// non-event
pub fn remove(tree: &Tree, value: Value) -> (Trace, Tree) {
    if !tree.contains(value) {
        let trace = Trace::single(
            Snapshot::Tree(tree.root.clone()),
            vec![],
            &format!("Value {} not found in the tree.", value),
        );
        return (trace, tree.clone());
    }
    let mut trace = Trace::new();
    let mut work = tree.clone();
    descend_to_value(&mut trace, &work, value);
    tree_frame(
        &mut trace,
        &work,
        &[value],
        format!("Found {} in the tree. Removing it.", value),
    );
    work.remove(value);
    if work.kind == TreeKind::RedBlack {
        fix_colors_frames(&mut trace, &mut work);
        tree_frame(
            &mut trace,
            &work,
            &[],
            format!("Done: {} removed and Red-Black properties restored.", value),
        );
    } else {
        tree_frame(
            &mut trace,
            &work,
            &[],
            format!("Done. {} removed from the tree.", value),
        );
    }
    (trace, work)
}

/// Replace `old` with `new` as a remove followed by an insert.  Missing
/// `old` or already-present `new` are one-frame non-events.
pub fn replace(tree: &Tree, old: Value, new: Value) -> (Trace, Tree) {
    if !tree.contains(old) {
        let trace = Trace::single(
            Snapshot::Tree(tree.root.clone()),
            vec![],
            &format!("Value {} not found in the tree.", old),
        );
        return (trace, tree.clone());
    }
    if tree.contains(new) {
        let trace = Trace::single(
            Snapshot::Tree(tree.root.clone()),
            vec![ElementId::Key(new)],
            &format!("Value {} already exists in the tree.", new),
        );
        return (trace, tree.clone());
    }
    let mut trace = Trace::new();
    let mut work = tree.clone();
    let is_rbt = work.kind == TreeKind::RedBlack;
    descend_to_value(&mut trace, &work, old);
    tree_frame(
        &mut trace,
        &work,
        &[old],
        format!("Found {} in the tree. Removing it.", old),
    );
    work.remove(old);
    tree_frame(
        &mut trace,
        &work,
        &[],
        format!("Removed {}. Now add {} to the tree.", old, new),
    );
    insert_frames(&mut trace, &mut work, new);
    if is_rbt {
        fix_colors_frames(&mut trace, &mut work);
        tree_frame(
            &mut trace,
            &work,
            &[],
            format!(
                "Done: {} replaced with {} and Red-Black properties restored.",
                old, new
            ),
        );
    } else {
        tree_frame(
            &mut trace,
            &work,
            &[],
            format!("Done. {} replaced with {} in the tree.", old, new),
        );
    }
    (trace, work)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bst_insert_matches_reference() {
        let tree = Tree::from_values(TreeKind::Bst, &[50, 25, 75]);
        let (trace, result) = insert(&tree, 60);

        let mut reference = tree.clone();
        reference.insert(60);
        assert_eq!(result, reference);

        let last = trace.final_frame().unwrap();
        assert_eq!(last.snapshot, Snapshot::Tree(result.root.clone()));
        assert_eq!(last.explanation, "Done. 60 added to the tree.");
    }

    #[test]
    fn bst_descent_narration() {
        let tree = Tree::from_values(TreeKind::Bst, &[50, 25, 75]);
        let (trace, _) = insert(&tree, 60);
        let explanations: Vec<_> = trace.frames().map(|f| f.explanation.as_str()).collect();
        assert_eq!(explanations[0], "Step 1: Start at root to add 60.");
        assert_eq!(explanations[1], "Go right from 50 (since 60 > 50)");
        assert_eq!(explanations[2], "Go left from 75 (since 60 < 75)");
        assert_eq!(explanations[3], "Insert 60 as left child of 75");
    }

    #[test]
    fn duplicate_insert_is_one_frame_noop() {
        let tree = Tree::from_values(TreeKind::Bst, &[50, 25, 75]);
        let (trace, result) = insert(&tree, 25);
        assert_eq!(trace.len(), 1);
        assert_eq!(result, tree);
        assert_eq!(
            trace.final_frame().unwrap().explanation,
            "Value 25 already exists in the tree."
        );
    }

    #[test]
    fn remove_missing_is_one_frame_noop() {
        let tree = Tree::from_values(TreeKind::Bst, &[50, 25, 75]);
        let (trace, result) = remove(&tree, 99);
        assert_eq!(trace.len(), 1);
        assert_eq!(result, tree);
    }

    #[test]
    fn remove_two_child_node_promotes_successor() {
        let tree = Tree::from_values(TreeKind::Bst, &[50, 25, 75, 60, 90]);
        let (_, result) = remove(&tree, 75);
        assert_eq!(result.in_order(), vec![25, 50, 60, 90]);
        let root = result.root.as_ref().unwrap();
        assert_eq!(root.right.as_ref().unwrap().value, 90);
    }

    #[test]
    fn rbt_insert_restores_invariants() {
        let tree = Tree::from_values(TreeKind::RedBlack, &[50, 25, 75, 10, 30]);
        let (trace, result) = insert(&tree, 60);

        if let Snapshot::Tree(root) = &trace.final_frame().unwrap().snapshot {
            assert_eq!(root.as_ref().unwrap().color, Some(Color::Black));
        } else {
            panic!("expected a tree snapshot");
        }

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
        assert!(no_red_red(&result.root, false));
        assert_eq!(
            trace.final_frame().unwrap().explanation,
            "Done: 60 added and Red-Black properties restored."
        );
    }

    #[test]
    fn rbt_fix_frames_show_applied_colors_and_skip_unchanged_nodes() {
        fn color_of(node: &Option<Box<TreeNode>>, value: Value) -> Option<Color> {
            let n = node.as_ref()?;
            if value < n.value {
                color_of(&n.left, value)
            } else if value > n.value {
                color_of(&n.right, value)
            } else {
                n.color
            }
        }

        // 10 lands as a red child of red 25 and is the only recoloring
        let tree = Tree::from_values(TreeKind::RedBlack, &[50, 25, 75]);
        let (trace, _) = insert(&tree, 10);

        let fix = trace
            .frames()
            .find(|f| f.explanation == "Fix: Parent is red, so 10 must be black.")
            .expect("red-parent recoloring frame");
        let Snapshot::Tree(root) = &fix.snapshot else {
            panic!("expected a tree snapshot");
        };
        // the frame shows the color already applied
        assert_eq!(color_of(root, 10), Some(Color::Black));

        // nodes whose color does not change emit no fix frame
        assert!(!trace
            .frames()
            .any(|f| f.explanation == "Root 50 must be black."));
    }

    #[test]
    fn replace_is_remove_then_insert() {
        let tree = Tree::from_values(TreeKind::Bst, &[50, 25, 75]);
        let (trace, result) = replace(&tree, 25, 30);
        assert_eq!(result.in_order(), vec![30, 50, 75]);
        assert!(trace
            .frames()
            .any(|f| f.explanation == "Removed 25. Now add 30 to the tree."));
    }

    #[test]
    fn replace_into_existing_value_is_noop() {
        let tree = Tree::from_values(TreeKind::Bst, &[50, 25, 75]);
        let (trace, result) = replace(&tree, 25, 75);
        assert_eq!(trace.len(), 1);
        assert_eq!(result, tree);
    }
}
