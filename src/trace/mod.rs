//! Step traces recorded by instrumented algorithms
//!
//! A [`Trace`] is the finite, ordered sequence of [`Step`]s one algorithm
//! run produced.  Each frame step carries a deep snapshot of the working
//! structure taken at record time, the element ids it touched, and a
//! templated explanation with the concrete values involved.  Traces are not
//! restartable; to replay, regenerate from the source inputs.
//!
//! Highlight ids are context-scoped: sequences and chains address elements
//! by index, trees address them by value.  Value addressing is ambiguous
//! when duplicate values exist; a key then highlights every matching node.

use crate::structures::chain::ChainKind;
use crate::structures::tree::TreeNode;
use crate::structures::Value;
use std::fmt;
use std::ops::Range;

/// Which element(s) of a snapshot a step highlights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// Position in a sequence or chain
    Index(usize),
    /// Node value in a tree
    Key(Value),
}

/// Per-node view of a Dijkstra run; `None` distances render as ∞
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphView {
    pub distances: Vec<Option<Value>>,
    pub visited: Vec<bool>,
    /// Node being settled or relax-checked this step
    pub current: Option<usize>,
    /// Edge under relaxation this step
    pub edge: Option<(usize, usize)>,
}

/// Deep, frozen copy of a structure's state at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
    Sequence(Vec<Value>),
    Chain { values: Vec<Value>, kind: ChainKind },
    Tree(Option<Box<TreeNode>>),
    Graph(GraphView),
}

/// One renderable unit of a trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub snapshot: Snapshot,
    pub highlight: Vec<ElementId>,
    pub explanation: String,
}

/// A frame to render, or a one-off side effect to run
pub enum Step {
    Frame(Frame),
    Action(Box<dyn FnMut()>),
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Frame(frame) => f.debug_tuple("Frame").field(frame).finish(),
            Step::Action(_) => f.write_str("Action(..)"),
        }
    }
}

/// An auxiliary off-structure value shown during a sub-range of steps
/// (e.g. the temp register of a swap)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchSlot {
    pub value: Value,
    pub steps: Range<usize>,
}

/// The ordered steps of one algorithm run
#[derive(Debug, Default)]
pub struct Trace {
    steps: Vec<Step>,
    scratch: Option<ScratchSlot>,
}

impl Trace {
    pub fn new() -> Self {
        Trace {
            steps: Vec::new(),
            scratch: None,
        }
    }

    /// A degenerate one-frame trace (semantic non-events: duplicate insert,
    /// value not found)
    pub fn single(snapshot: Snapshot, highlight: Vec<ElementId>, explanation: &str) -> Self {
        let mut trace = Trace::new();
        trace.frame(snapshot, highlight, explanation.to_string());
        trace
    }

    /// Record a frame with a snapshot taken now
    pub fn frame(&mut self, snapshot: Snapshot, highlight: Vec<ElementId>, explanation: String) {
        self.steps.push(Step::Frame(Frame {
            snapshot,
            highlight,
            explanation,
        }));
    }

    /// Record a one-off side-effecting step
    pub fn action(&mut self, action: Box<dyn FnMut()>) {
        self.steps.push(Step::Action(action));
    }

    /// Mark the step-index range during which the scratch slot must render
    pub fn set_scratch(&mut self, value: Value, steps: Range<usize>) {
        self.scratch = Some(ScratchSlot { value, steps });
    }

    pub fn scratch(&self) -> Option<&ScratchSlot> {
        self.scratch.as_ref()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Step> {
        self.steps.get_mut(index)
    }

    /// Iterate the frame steps, skipping actions
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.steps.iter().filter_map(|step| match step {
            Step::Frame(frame) => Some(frame),
            Step::Action(_) => None,
        })
    }

    /// The last frame step, which carries the algorithm's final snapshot
    pub fn final_frame(&self) -> Option<&Frame> {
        self.steps.iter().rev().find_map(|step| match step {
            Step::Frame(frame) => Some(frame),
            Step::Action(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshots_are_frozen_at_record_time() {
        let mut working = vec![1, 2, 3];
        let mut trace = Trace::new();
        trace.frame(
            Snapshot::Sequence(working.clone()),
            vec![ElementId::Index(0)],
            "before".to_string(),
        );
        working[0] = 99;
        trace.frame(Snapshot::Sequence(working.clone()), vec![], "after".to_string());

        let frames: Vec<_> = trace.frames().collect();
        assert_eq!(frames[0].snapshot, Snapshot::Sequence(vec![1, 2, 3]));
        assert_eq!(frames[1].snapshot, Snapshot::Sequence(vec![99, 2, 3]));
    }

    #[test]
    fn final_frame_skips_actions() {
        let mut trace = Trace::new();
        trace.frame(Snapshot::Sequence(vec![1]), vec![], "only".to_string());
        trace.action(Box::new(|| {}));
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.final_frame().unwrap().explanation, "only");
    }
}
