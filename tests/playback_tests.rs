// Integration tests for playback control through a full session

use algotty::algorithms::sorts::SortKind;
use algotty::playback::{Renderer, Tick};
use algotty::session::{Request, Session, SessionError};
use algotty::structures::errors::StructureError;
use algotty::structures::{Structure, StructureKind, Value};
use algotty::trace::Frame;

/// Records everything dispatched to it
#[derive(Default)]
struct RecordingRenderer {
    explanations: Vec<String>,
    scratch_events: Vec<Option<Value>>,
}

impl Renderer for RecordingRenderer {
    fn render_frame(&mut self, frame: &Frame) {
        self.explanations.push(frame.explanation.clone());
    }

    fn show_scratch(&mut self, value: Value) {
        self.scratch_events.push(Some(value));
    }

    fn hide_scratch(&mut self) {
        self.scratch_events.push(None);
    }
}

fn items(session: &Session) -> Vec<Value> {
    match session.live() {
        Structure::Sequence(s) => s.items().to_vec(),
        _ => panic!("expected a sequence"),
    }
}

#[test]
fn test_manual_and_auto_ticks_share_one_contract() {
    // the session has one tick entry point; "auto" mode is just the caller
    // ticking on a timer, so two sessions ticked the same number of times
    // agree step for step
    let mut a = Session::with_values(StructureKind::Array, vec![3, 1, 2]);
    let mut b = Session::with_values(StructureKind::Array, vec![3, 1, 2]);
    let mut ra = RecordingRenderer::default();
    let mut rb = RecordingRenderer::default();
    a.apply(Request::Sort(SortKind::Bubble), &mut ra).unwrap();
    b.apply(Request::Sort(SortKind::Bubble), &mut rb).unwrap();

    while a.tick(&mut ra) != Tick::Finished {}
    while b.tick(&mut rb) != Tick::Finished {}

    assert_eq!(ra.explanations, rb.explanations);
    assert_eq!(items(&a), vec![1, 2, 3]);
    assert_eq!(items(&a), items(&b));
}

#[test]
fn test_live_structure_updates_only_at_finalize() {
    let mut session = Session::with_values(StructureKind::Array, vec![5, 3, 8]);
    let mut renderer = RecordingRenderer::default();
    session
        .apply(Request::InsertAt { index: 1, value: 9 }, &mut renderer)
        .unwrap();

    let mut ticks = 0;
    loop {
        match session.tick(&mut renderer) {
            Tick::Dispatched => {
                ticks += 1;
                assert_eq!(items(&session), vec![5, 3, 8], "mid-trace commit");
            }
            Tick::Finished => break,
            Tick::Idle => panic!("trace ended without finishing"),
        }
    }
    assert!(ticks > 0);
    assert_eq!(items(&session), vec![5, 9, 3, 8]);
}

#[test]
fn test_cancel_is_idempotent_and_skips_commit() {
    let mut session = Session::with_values(StructureKind::Array, vec![2, 1]);
    let mut renderer = RecordingRenderer::default();
    session
        .apply(Request::Sort(SortKind::Selection), &mut renderer)
        .unwrap();
    session.tick(&mut renderer);

    session.cancel(&mut renderer);
    assert!(!session.is_playing());
    session.cancel(&mut renderer);
    assert!(!session.is_playing());

    let dispatched = renderer.explanations.len();
    assert_eq!(session.tick(&mut renderer), Tick::Idle);
    assert_eq!(renderer.explanations.len(), dispatched, "step after cancel");
    assert_eq!(items(&session), vec![2, 1], "cancel must not commit");
}

#[test]
fn test_scratch_slot_spans_swap_steps_only() {
    let mut session = Session::with_values(StructureKind::Array, vec![8, 2, 5]);
    let mut renderer = RecordingRenderer::default();
    session
        .apply(Request::Swap { i: 0, j: 2 }, &mut renderer)
        .unwrap();
    while session.tick(&mut renderer) != Tick::Finished {}

    // shown entering step 1, hidden entering step 4
    assert_eq!(renderer.scratch_events, vec![Some(8), None]);
    assert_eq!(items(&session), vec![5, 2, 8]);
}

#[test]
fn test_scratch_slot_hidden_on_cancel() {
    let mut session = Session::with_values(StructureKind::Array, vec![8, 2, 5]);
    let mut renderer = RecordingRenderer::default();
    session
        .apply(Request::Swap { i: 0, j: 2 }, &mut renderer)
        .unwrap();
    session.tick(&mut renderer);
    session.tick(&mut renderer); // inside the scratch window now
    assert_eq!(renderer.scratch_events, vec![Some(8)]);
    session.cancel(&mut renderer);
    assert_eq!(renderer.scratch_events, vec![Some(8), None]);
}

#[test]
fn test_empty_stack_pop_fails_before_any_trace() {
    let mut session = Session::with_values(StructureKind::Stack, vec![]);
    let mut renderer = RecordingRenderer::default();
    let err = session.apply(Request::Pop, &mut renderer).unwrap_err();
    assert_eq!(
        err,
        SessionError::Structure(StructureError::EmptyStructure { structure: "Stack" })
    );
    assert!(renderer.explanations.is_empty());
    assert_eq!(session.tick(&mut renderer), Tick::Idle);
}

#[test]
fn test_starting_a_new_trace_cancels_the_old_one() {
    let mut session = Session::with_values(StructureKind::Array, vec![9, 1]);
    let mut renderer = RecordingRenderer::default();
    session.apply(Request::Add(7), &mut renderer).unwrap();
    session.tick(&mut renderer);

    session
        .apply(Request::Swap { i: 0, j: 1 }, &mut renderer)
        .unwrap();
    while session.tick(&mut renderer) != Tick::Finished {}

    // the add was abandoned: no 7 committed, only the swap applied
    assert_eq!(items(&session), vec![1, 9]);
}

#[test]
fn test_degenerate_trace_plays_one_step_and_commits_nothing() {
    let mut session = Session::with_values(StructureKind::BinarySearchTree, vec![5, 2, 8]);
    let mut renderer = RecordingRenderer::default();
    session.apply(Request::Add(8), &mut renderer).unwrap();

    assert_eq!(session.tick(&mut renderer), Tick::Dispatched);
    assert_eq!(session.tick(&mut renderer), Tick::Finished);
    assert_eq!(
        renderer.explanations,
        vec!["Value 8 already exists in the tree."]
    );
    match session.live() {
        Structure::Tree(t) => assert_eq!(t.in_order(), vec![2, 5, 8]),
        _ => panic!("expected a tree"),
    }
}

#[test]
fn test_dijkstra_trace_never_mutates_the_graph() {
    let mut session = Session::new(StructureKind::Graph, 7);
    let mut renderer = RecordingRenderer::default();
    let before = match session.live() {
        Structure::Graph(g) => g.clone(),
        _ => panic!("expected a graph"),
    };
    session
        .apply(Request::Dijkstra { source: 0 }, &mut renderer)
        .unwrap();
    while session.tick(&mut renderer) != Tick::Finished {}
    match session.live() {
        Structure::Graph(g) => assert_eq!(*g, before),
        _ => panic!("expected a graph"),
    }
    assert!(renderer
        .explanations
        .last()
        .unwrap()
        .starts_with("All nodes visited."));
}
