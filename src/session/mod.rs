//! Visualizer session: the live structure and its operation boundary
//!
//! A [`Session`] owns the authoritative structure and the playback state
//! machine.  Operation requests are validated here (bounds, emptiness,
//! kind compatibility) before any trace is generated; the algorithm
//! library never re-checks them.  Valid requests produce a trace over a
//! working copy plus a finalize callback that commits the finished copy
//! into the live structure when playback completes.
//!
//! Dijkstra is read-only: its finalize is a no-op and the graph is never
//! mutated.

use crate::algorithms::{chain, graph, heap, sequence, sorts, tree};
use crate::algorithms::sorts::SortKind;
use crate::playback::{Playback, Renderer, Tick};
use crate::structures::errors::StructureError;
use crate::structures::{Structure, StructureKind, Value};
use crate::trace::{Snapshot, Trace};
use std::fmt;

/// One user-facing operation, parameters unvalidated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Append / push / enqueue / keyed insert, depending on the structure
    Add(Value),
    InsertAt { index: usize, value: Value },
    RemoveAt { index: usize },
    /// Keyed removal for trees and heaps
    Remove(Value),
    Pop,
    Dequeue,
    Swap { i: usize, j: usize },
    /// Index-addressed replacement for sequences and chains
    ReplaceAt { index: usize, value: Value },
    /// Value-addressed replacement for trees and heaps
    ReplaceValue { old: Value, new: Value },
    Sort(SortKind),
    Dijkstra { source: usize },
}

/// Why a request was rejected before producing a trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    Structure(StructureError),

    /// Operation does not apply to this structure kind
    Unsupported {
        operation: &'static str,
        structure: &'static str,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Structure(e) => write!(f, "{}", e),
            SessionError::Unsupported { operation, structure } => {
                write!(f, "{} is not supported on a {}", operation, structure)
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Structure(e) => Some(e),
            SessionError::Unsupported { .. } => None,
        }
    }
}

impl From<StructureError> for SessionError {
    fn from(e: StructureError) -> Self {
        SessionError::Structure(e)
    }
}

/// One visualizer instance: a structure kind, its live state, and at most
/// one in-flight trace
pub struct Session {
    kind: StructureKind,
    live: Structure,
    playback: Playback<Structure>,
}

impl Session {
    /// Start a session with a randomly generated structure
    pub fn new(kind: StructureKind, seed: u64) -> Self {
        Session {
            kind,
            live: Structure::random(kind, seed),
            playback: Playback::new(),
        }
    }

    /// Start a session from user-supplied values
    pub fn with_values(kind: StructureKind, values: Vec<Value>) -> Self {
        Session {
            kind,
            live: Structure::from_values(kind, values),
            playback: Playback::new(),
        }
    }

    pub fn kind(&self) -> StructureKind {
        self.kind
    }

    pub fn live(&self) -> &Structure {
        &self.live
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    /// Zero-based position of the next step, with the trace length
    pub fn progress(&self) -> Option<(usize, usize)> {
        match (self.playback.position(), self.playback.total()) {
            (Some(p), Some(t)) => Some((p, t)),
            _ => None,
        }
    }

    /// Snapshot of the live structure, for rendering while idle
    pub fn live_snapshot(&self) -> Snapshot {
        match &self.live {
            Structure::Sequence(s) => Snapshot::Sequence(s.items().to_vec()),
            Structure::Chain(c) => Snapshot::Chain {
                values: c.values().to_vec(),
                kind: c.kind(),
            },
            Structure::Tree(t) => Snapshot::Tree(t.root.clone()),
            Structure::Heap(h) => Snapshot::Tree(h.to_tree()),
            Structure::Graph(g) => {
                let n = g.node_count();
                Snapshot::Graph(crate::trace::GraphView {
                    distances: vec![None; n],
                    visited: vec![false; n],
                    current: None,
                    edge: None,
                })
            }
        }
    }

    /// Throw the live structure away and generate a fresh one; cancels any
    /// in-flight trace
    pub fn regenerate(&mut self, seed: u64, renderer: &mut dyn Renderer) {
        self.playback.cancel(renderer);
        self.live = Structure::random(self.kind, seed);
    }

    /// Replace the live structure wholesale with user-supplied values;
    /// cancels any in-flight trace
    pub fn set_values(&mut self, values: Vec<Value>, renderer: &mut dyn Renderer) {
        self.playback.cancel(renderer);
        self.live = Structure::from_values(self.kind, values);
    }

    /// Advance playback by one step
    pub fn tick(&mut self, renderer: &mut dyn Renderer) -> Tick {
        self.playback.tick(&mut self.live, renderer)
    }

    /// Abandon the in-flight trace without committing
    pub fn cancel(&mut self, renderer: &mut dyn Renderer) {
        self.playback.cancel(renderer);
    }

    /// Validate a request against the live structure and, if valid, start
    /// playing its trace.  Starting while a trace is in flight cancels the
    /// old one first.
    pub fn apply(&mut self, request: Request, renderer: &mut dyn Renderer) -> Result<(), SessionError> {
        let (trace, result) = self.build(request)?;
        match result {
            Some(result) => self.playback.start(
                trace,
                Box::new(move |live: &mut Structure| *live = result),
                renderer,
            ),
            None => self.playback.start(trace, Box::new(|_| {}), renderer),
        }
        Ok(())
    }

    /// Produce the trace and the committed result for a request.  `None`
    /// as the result means the finalize is a no-op (Dijkstra).
    fn build(&self, request: Request) -> Result<(Trace, Option<Structure>), SessionError> {
        let label = self.kind.label();
        let unsupported = |operation: &'static str| SessionError::Unsupported {
            operation,
            structure: label,
        };
        match request {
            Request::Add(value) => match (&self.live, self.kind) {
                (Structure::Sequence(s), StructureKind::Array) => {
                    let (t, r) = sequence::add(s, value);
                    Ok((t, Some(Structure::Sequence(r))))
                }
                (Structure::Sequence(s), StructureKind::Stack) => {
                    let (t, r) = sequence::push(s, value);
                    Ok((t, Some(Structure::Sequence(r))))
                }
                (Structure::Sequence(s), StructureKind::Queue) => {
                    let (t, r) = sequence::enqueue(s, value);
                    Ok((t, Some(Structure::Sequence(r))))
                }
                (Structure::Chain(c), _) => {
                    let (t, r) = chain::add(c, value);
                    Ok((t, Some(Structure::Chain(r))))
                }
                (Structure::Tree(tr), _) => {
                    let (t, r) = tree::insert(tr, value);
                    Ok((t, Some(Structure::Tree(r))))
                }
                (Structure::Heap(h), _) => {
                    let (t, r) = heap::insert(h, value);
                    Ok((t, Some(Structure::Heap(r))))
                }
                _ => Err(unsupported("add")),
            },
            Request::InsertAt { index, value } => {
                self.check_index(index, true)?;
                match &self.live {
                    Structure::Sequence(s) if self.kind == StructureKind::Array => {
                        let (t, r) = sequence::insert_at(s, index, value);
                        Ok((t, Some(Structure::Sequence(r))))
                    }
                    Structure::Chain(c) => {
                        let (t, r) = chain::insert_at(c, index, value);
                        Ok((t, Some(Structure::Chain(r))))
                    }
                    _ => Err(unsupported("insert")),
                }
            }
            Request::RemoveAt { index } => {
                self.check_not_empty()?;
                self.check_index(index, false)?;
                match &self.live {
                    Structure::Sequence(s) if self.kind == StructureKind::Array => {
                        let (t, r) = sequence::remove_at(s, index);
                        Ok((t, Some(Structure::Sequence(r))))
                    }
                    Structure::Chain(c) => {
                        let (t, r) = chain::remove_at(c, index);
                        Ok((t, Some(Structure::Chain(r))))
                    }
                    _ => Err(unsupported("remove")),
                }
            }
            Request::Remove(value) => match &self.live {
                Structure::Tree(tr) => {
                    let (t, r) = tree::remove(tr, value);
                    Ok((t, Some(Structure::Tree(r))))
                }
                Structure::Heap(h) => {
                    let (t, r) = heap::remove(h, value);
                    Ok((t, Some(Structure::Heap(r))))
                }
                _ => Err(unsupported("remove by value")),
            },
            Request::Pop => match (&self.live, self.kind) {
                (Structure::Sequence(s), StructureKind::Stack) => {
                    if s.is_empty() {
                        return Err(StructureError::EmptyStructure { structure: "Stack" }.into());
                    }
                    let (t, r) = sequence::pop(s);
                    Ok((t, Some(Structure::Sequence(r))))
                }
                _ => Err(unsupported("pop")),
            },
            Request::Dequeue => match (&self.live, self.kind) {
                (Structure::Sequence(s), StructureKind::Queue) => {
                    if s.is_empty() {
                        return Err(StructureError::EmptyStructure { structure: "Queue" }.into());
                    }
                    let (t, r) = sequence::dequeue(s);
                    Ok((t, Some(Structure::Sequence(r))))
                }
                _ => Err(unsupported("dequeue")),
            },
            Request::Swap { i, j } => {
                self.check_index(i, false)?;
                self.check_index(j, false)?;
                if i == j {
                    return Err(StructureError::IndicesEqual { index: i }.into());
                }
                match (&self.live, self.kind) {
                    (Structure::Sequence(s), StructureKind::Array) => {
                        let (t, r) = sequence::swap(s, i, j, "Array");
                        Ok((t, Some(Structure::Sequence(r))))
                    }
                    (Structure::Sequence(s), StructureKind::Queue) => {
                        let (t, r) = sequence::swap(s, i, j, "Queue");
                        Ok((t, Some(Structure::Sequence(r))))
                    }
                    (Structure::Chain(c), _) => {
                        let (t, r) = chain::swap(c, i, j);
                        Ok((t, Some(Structure::Chain(r))))
                    }
                    _ => Err(unsupported("swap")),
                }
            }
            Request::ReplaceAt { index, value } => {
                self.check_index(index, false)?;
                match (&self.live, self.kind) {
                    (Structure::Sequence(s), StructureKind::Array) => {
                        let (t, r) = sequence::replace(s, index, value, "Array");
                        Ok((t, Some(Structure::Sequence(r))))
                    }
                    (Structure::Sequence(s), StructureKind::Stack) => {
                        let (t, r) = sequence::replace(s, index, value, "Stack");
                        Ok((t, Some(Structure::Sequence(r))))
                    }
                    (Structure::Sequence(s), StructureKind::Queue) => {
                        let (t, r) = sequence::replace(s, index, value, "Queue");
                        Ok((t, Some(Structure::Sequence(r))))
                    }
                    (Structure::Chain(c), _) => {
                        let (t, r) = chain::replace(c, index, value);
                        Ok((t, Some(Structure::Chain(r))))
                    }
                    _ => Err(unsupported("replace")),
                }
            }
            Request::ReplaceValue { old, new } => {
                if old == new {
                    return Err(StructureError::ValuesEqual { value: old }.into());
                }
                match &self.live {
                    Structure::Tree(tr) => {
                        let (t, r) = tree::replace(tr, old, new);
                        Ok((t, Some(Structure::Tree(r))))
                    }
                    Structure::Heap(h) => {
                        let (t, r) = heap::replace(h, old, new);
                        Ok((t, Some(Structure::Heap(r))))
                    }
                    _ => Err(unsupported("replace by value")),
                }
            }
            Request::Sort(sort_kind) => match (&self.live, self.kind) {
                (Structure::Sequence(s), StructureKind::Array) => {
                    let (t, r) = sorts::sort(s, sort_kind);
                    Ok((t, Some(Structure::Sequence(r))))
                }
                _ => Err(unsupported("sort")),
            },
            Request::Dijkstra { source } => match &self.live {
                Structure::Graph(g) => {
                    if source >= g.node_count() {
                        return Err(StructureError::InvalidIndex {
                            index: source,
                            len: g.node_count(),
                        }
                        .into());
                    }
                    let (t, _) = graph::dijkstra(g, source);
                    Ok((t, None))
                }
                _ => Err(unsupported("dijkstra")),
            },
        }
    }

    fn check_index(&self, index: usize, inserting: bool) -> Result<(), StructureError> {
        let len = self.live.len();
        let limit = if inserting { len + 1 } else { len };
        if index >= limit {
            return Err(StructureError::InvalidIndex { index, len });
        }
        Ok(())
    }

    fn check_not_empty(&self) -> Result<(), StructureError> {
        if self.live.is_empty() {
            return Err(StructureError::EmptyStructure {
                structure: self.kind.label(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Frame;

    struct NullRenderer;

    impl Renderer for NullRenderer {
        fn render_frame(&mut self, _frame: &Frame) {}
        fn show_scratch(&mut self, _value: Value) {}
        fn hide_scratch(&mut self) {}
    }

    fn run_to_completion(session: &mut Session, renderer: &mut NullRenderer) {
        while session.tick(renderer) != Tick::Finished {}
    }

    #[test]
    fn array_insert_commits_on_finish() {
        let mut session = Session::with_values(StructureKind::Array, vec![5, 3, 8]);
        let mut renderer = NullRenderer;
        session
            .apply(Request::InsertAt { index: 1, value: 9 }, &mut renderer)
            .unwrap();
        assert!(session.is_playing());
        match session.live() {
            Structure::Sequence(s) => assert_eq!(s.items(), &[5, 3, 8]),
            _ => panic!("expected a sequence"),
        }
        run_to_completion(&mut session, &mut renderer);
        match session.live() {
            Structure::Sequence(s) => assert_eq!(s.items(), &[5, 9, 3, 8]),
            _ => panic!("expected a sequence"),
        }
    }

    #[test]
    fn pop_on_empty_stack_fails_before_any_trace() {
        let mut session = Session::with_values(StructureKind::Stack, vec![]);
        let mut renderer = NullRenderer;
        let err = session.apply(Request::Pop, &mut renderer).unwrap_err();
        assert_eq!(
            err,
            SessionError::Structure(StructureError::EmptyStructure { structure: "Stack" })
        );
        assert!(!session.is_playing());
    }

    #[test]
    fn stack_replace_commits_on_finish() {
        let mut session = Session::with_values(StructureKind::Stack, vec![4, 7]);
        let mut renderer = NullRenderer;
        session
            .apply(Request::ReplaceAt { index: 1, value: 9 }, &mut renderer)
            .unwrap();
        run_to_completion(&mut session, &mut renderer);
        match session.live() {
            Structure::Sequence(s) => assert_eq!(s.items(), &[4, 9]),
            _ => panic!("expected a sequence"),
        }
    }

    #[test]
    fn out_of_bounds_index_is_rejected() {
        let mut session = Session::with_values(StructureKind::Array, vec![1, 2, 3]);
        let mut renderer = NullRenderer;
        let err = session
            .apply(Request::RemoveAt { index: 3 }, &mut renderer)
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::Structure(StructureError::InvalidIndex { index: 3, len: 3 })
        );
        // insert may target one past the end
        assert!(session
            .apply(Request::InsertAt { index: 3, value: 4 }, &mut renderer)
            .is_ok());
    }

    #[test]
    fn swap_with_equal_indices_is_rejected() {
        let mut session = Session::with_values(StructureKind::Array, vec![1, 2, 3]);
        let mut renderer = NullRenderer;
        let err = session
            .apply(Request::Swap { i: 1, j: 1 }, &mut renderer)
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::Structure(StructureError::IndicesEqual { index: 1 })
        );
    }

    #[test]
    fn replace_with_same_value_is_rejected() {
        let mut session = Session::with_values(StructureKind::BinarySearchTree, vec![5, 2, 8]);
        let mut renderer = NullRenderer;
        let err = session
            .apply(Request::ReplaceValue { old: 2, new: 2 }, &mut renderer)
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::Structure(StructureError::ValuesEqual { value: 2 })
        );
    }

    #[test]
    fn unsupported_operation_names_the_structure() {
        let mut session = Session::with_values(StructureKind::Stack, vec![1]);
        let mut renderer = NullRenderer;
        let err = session
            .apply(Request::Sort(SortKind::Bubble), &mut renderer)
            .unwrap_err();
        assert_eq!(
            err,
            SessionError::Unsupported {
                operation: "sort",
                structure: "Stack",
            }
        );
    }

    #[test]
    fn new_request_cancels_in_flight_trace() {
        let mut session = Session::with_values(StructureKind::Array, vec![3, 1, 2]);
        let mut renderer = NullRenderer;
        session.apply(Request::Add(9), &mut renderer).unwrap();
        session.tick(&mut renderer);
        // second request abandons the first without committing it
        session
            .apply(Request::Sort(SortKind::Bubble), &mut renderer)
            .unwrap();
        run_to_completion(&mut session, &mut renderer);
        match session.live() {
            Structure::Sequence(s) => assert_eq!(s.items(), &[1, 2, 3]),
            _ => panic!("expected a sequence"),
        }
    }

    #[test]
    fn dijkstra_finalize_leaves_graph_untouched() {
        let mut session = Session::new(StructureKind::Graph, 0);
        let mut renderer = NullRenderer;
        let before = session.live().clone();
        session
            .apply(Request::Dijkstra { source: 0 }, &mut renderer)
            .unwrap();
        run_to_completion(&mut session, &mut renderer);
        match (session.live(), &before) {
            (Structure::Graph(a), Structure::Graph(b)) => assert_eq!(a, b),
            _ => panic!("expected graphs"),
        }
    }

    #[test]
    fn regenerate_replaces_structure_wholesale() {
        let mut session = Session::new(StructureKind::Array, 1);
        let mut renderer = NullRenderer;
        session.apply(Request::Add(5), &mut renderer).unwrap();
        session.regenerate(2, &mut renderer);
        assert!(!session.is_playing());
        let expected = Structure::random(StructureKind::Array, 2);
        match (session.live(), &expected) {
            (Structure::Sequence(a), Structure::Sequence(b)) => assert_eq!(a.items(), b.items()),
            _ => panic!("expected sequences"),
        }
    }
}
