//! Caller-driven trace playback
//!
//! [`Playback`] replaces timer-chained animation callbacks with an explicit
//! state machine: callers decide when to tick, so auto-play and manual
//! stepping share one code path.  Each tick dispatches exactly one step of
//! the active trace through a [`Renderer`]; the tick after the last step
//! runs the finalize callback against the live structure and reports
//! [`Tick::Finished`].  Cancelling abandons the trace without finalizing,
//! leaving the live structure untouched.
//!
//! The scratch slot window is managed here: the renderer is told to show
//! the slot when the position enters the trace's scratch range and to hide
//! it when the position leaves, finishes, or is cancelled.

use crate::structures::Value;
use crate::trace::{Frame, Step, Trace};
use std::time::{Duration, Instant};

/// Output surface for dispatched frames and the scratch slot
pub trait Renderer {
    fn render_frame(&mut self, frame: &Frame);
    fn show_scratch(&mut self, value: Value);
    fn hide_scratch(&mut self);
}

/// What one call to [`Playback::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// One step was dispatched to the renderer
    Dispatched,
    /// The trace is exhausted; finalize ran and the playback is idle again
    Finished,
    /// No trace is active
    Idle,
}

/// Commit callback applied to the live structure exactly once, when the
/// trace finishes
pub type Finalize<S> = Box<dyn FnOnce(&mut S)>;

struct Active<S> {
    trace: Trace,
    position: usize,
    finalize: Option<Finalize<S>>,
}

/// Playback state machine over one structure type `S`
pub struct Playback<S> {
    active: Option<Active<S>>,
    scratch_shown: bool,
}

impl<S> Default for Playback<S> {
    fn default() -> Self {
        Playback::new()
    }
}

impl<S> Playback<S> {
    pub fn new() -> Self {
        Playback {
            active: None,
            scratch_shown: false,
        }
    }

    /// Begin playing a trace.  A trace already in flight is abandoned
    /// without finalizing, exactly like [`cancel`](Playback::cancel).
    pub fn start(&mut self, trace: Trace, finalize: Finalize<S>, renderer: &mut dyn Renderer) {
        if self.active.is_some() {
            self.cancel(renderer);
        }
        self.active = Some(Active {
            trace,
            position: 0,
            finalize: Some(finalize),
        });
    }

    /// Abandon the active trace without committing; a second cancel is a
    /// no-op
    pub fn cancel(&mut self, renderer: &mut dyn Renderer) {
        if self.scratch_shown {
            renderer.hide_scratch();
            self.scratch_shown = false;
        }
        self.active = None;
    }

    pub fn is_playing(&self) -> bool {
        self.active.is_some()
    }

    /// Zero-based position of the next step to dispatch
    pub fn position(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.position)
    }

    /// Total step count of the active trace
    pub fn total(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.trace.len())
    }

    /// Advance by one step.  Dispatches a frame or runs an action; when
    /// the trace is exhausted, commits via finalize and goes idle.
    pub fn tick(&mut self, live: &mut S, renderer: &mut dyn Renderer) -> Tick {
        let Some(active) = self.active.as_mut() else {
            return Tick::Idle;
        };

        if active.position >= active.trace.len() {
            if self.scratch_shown {
                renderer.hide_scratch();
                self.scratch_shown = false;
            }
            let mut done = match self.active.take() {
                Some(a) => a,
                None => return Tick::Idle,
            };
            if let Some(finalize) = done.finalize.take() {
                finalize(live);
            }
            return Tick::Finished;
        }

        let position = active.position;
        let scratch = active.trace.scratch().cloned();
        if let Some(slot) = scratch {
            let in_window = slot.steps.contains(&position);
            if in_window && !self.scratch_shown {
                renderer.show_scratch(slot.value);
                self.scratch_shown = true;
            } else if !in_window && self.scratch_shown {
                renderer.hide_scratch();
                self.scratch_shown = false;
            }
        }

        match active.trace.get_mut(position) {
            Some(Step::Frame(frame)) => renderer.render_frame(frame),
            Some(Step::Action(action)) => action(),
            None => {}
        }
        active.position += 1;
        Tick::Dispatched
    }
}

/// Wall-clock gate for auto-play: `due` reports true at most once per
/// interval
pub struct TickTimer {
    interval: Duration,
    last: Instant,
}

impl TickTimer {
    pub fn new(interval: Duration) -> Self {
        TickTimer {
            interval,
            last: Instant::now(),
        }
    }

    /// True when a full interval has elapsed since the last due tick
    pub fn due(&mut self) -> bool {
        if self.last.elapsed() >= self.interval {
            self.last = Instant::now();
            true
        } else {
            false
        }
    }

    /// Restart the interval from now
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{ElementId, Snapshot};
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, PartialEq, Eq)]
    enum Event {
        Frame(String),
        ShowScratch(Value),
        HideScratch,
    }

    #[derive(Default)]
    struct TestRenderer {
        events: Vec<Event>,
    }

    impl Renderer for TestRenderer {
        fn render_frame(&mut self, frame: &Frame) {
            self.events.push(Event::Frame(frame.explanation.clone()));
        }
        fn show_scratch(&mut self, value: Value) {
            self.events.push(Event::ShowScratch(value));
        }
        fn hide_scratch(&mut self) {
            self.events.push(Event::HideScratch);
        }
    }

    fn trace_of(explanations: &[&str]) -> Trace {
        let mut trace = Trace::new();
        for e in explanations {
            trace.frame(Snapshot::Sequence(vec![1, 2]), vec![ElementId::Index(0)], e.to_string());
        }
        trace
    }

    #[test]
    fn finalize_runs_exactly_once_after_last_step() {
        let mut playback: Playback<Vec<i64>> = Playback::new();
        let mut renderer = TestRenderer::default();
        let mut live = vec![1, 2];
        let count = Rc::new(Cell::new(0));
        let count2 = Rc::clone(&count);

        playback.start(
            trace_of(&["a", "b"]),
            Box::new(move |s: &mut Vec<i64>| {
                s.push(3);
                count2.set(count2.get() + 1);
            }),
            &mut renderer,
        );
        assert_eq!(playback.tick(&mut live, &mut renderer), Tick::Dispatched);
        assert_eq!(live, vec![1, 2], "live must not change mid-playback");
        assert_eq!(playback.tick(&mut live, &mut renderer), Tick::Dispatched);
        assert_eq!(playback.tick(&mut live, &mut renderer), Tick::Finished);
        assert_eq!(live, vec![1, 2, 3]);
        assert_eq!(count.get(), 1);
        assert_eq!(playback.tick(&mut live, &mut renderer), Tick::Idle);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn cancel_skips_finalize_and_is_idempotent() {
        let mut playback: Playback<Vec<i64>> = Playback::new();
        let mut renderer = TestRenderer::default();
        let mut live = vec![1];

        playback.start(
            trace_of(&["a", "b"]),
            Box::new(|s: &mut Vec<i64>| s.push(9)),
            &mut renderer,
        );
        playback.tick(&mut live, &mut renderer);
        playback.cancel(&mut renderer);
        playback.cancel(&mut renderer);
        assert!(!playback.is_playing());
        assert_eq!(playback.tick(&mut live, &mut renderer), Tick::Idle);
        assert_eq!(live, vec![1], "cancel must not commit");
    }

    #[test]
    fn start_while_playing_abandons_previous_finalize() {
        let mut playback: Playback<Vec<i64>> = Playback::new();
        let mut renderer = TestRenderer::default();
        let mut live = Vec::new();

        playback.start(
            trace_of(&["old"]),
            Box::new(|s: &mut Vec<i64>| s.push(1)),
            &mut renderer,
        );
        playback.start(
            trace_of(&["new"]),
            Box::new(|s: &mut Vec<i64>| s.push(2)),
            &mut renderer,
        );
        while playback.tick(&mut live, &mut renderer) != Tick::Finished {}
        assert_eq!(live, vec![2]);
    }

    #[test]
    fn scratch_window_shows_and_hides_around_its_range() {
        let mut playback: Playback<Vec<i64>> = Playback::new();
        let mut renderer = TestRenderer::default();
        let mut live = Vec::new();

        let mut trace = trace_of(&["s0", "s1", "s2", "s3", "s4"]);
        trace.set_scratch(42, 1..4);
        playback.start(trace, Box::new(|_| {}), &mut renderer);
        while playback.tick(&mut live, &mut renderer) != Tick::Finished {}

        assert_eq!(
            renderer.events,
            vec![
                Event::Frame("s0".to_string()),
                Event::ShowScratch(42),
                Event::Frame("s1".to_string()),
                Event::Frame("s2".to_string()),
                Event::Frame("s3".to_string()),
                Event::HideScratch,
                Event::Frame("s4".to_string()),
            ]
        );
    }

    #[test]
    fn scratch_hidden_when_cancelled_mid_window() {
        let mut playback: Playback<Vec<i64>> = Playback::new();
        let mut renderer = TestRenderer::default();
        let mut live = Vec::new();

        let mut trace = trace_of(&["s0", "s1", "s2", "s3", "s4"]);
        trace.set_scratch(7, 1..4);
        playback.start(trace, Box::new(|_| {}), &mut renderer);
        playback.tick(&mut live, &mut renderer);
        playback.tick(&mut live, &mut renderer);
        playback.cancel(&mut renderer);
        assert_eq!(renderer.events.last(), Some(&Event::HideScratch));
    }

    #[test]
    fn action_steps_run_once_without_rendering() {
        let mut playback: Playback<Vec<i64>> = Playback::new();
        let mut renderer = TestRenderer::default();
        let mut live = Vec::new();

        let ran = Rc::new(Cell::new(0));
        let ran2 = Rc::clone(&ran);
        let mut trace = trace_of(&["a"]);
        trace.action(Box::new(move || ran2.set(ran2.get() + 1)));
        playback.start(trace, Box::new(|_| {}), &mut renderer);
        while playback.tick(&mut live, &mut renderer) != Tick::Finished {}
        assert_eq!(ran.get(), 1);
        assert_eq!(renderer.events, vec![Event::Frame("a".to_string())]);
    }

    #[test]
    fn position_tracks_dispatch_progress() {
        let mut playback: Playback<Vec<i64>> = Playback::new();
        let mut renderer = TestRenderer::default();
        let mut live = Vec::new();

        assert_eq!(playback.position(), None);
        playback.start(trace_of(&["a", "b"]), Box::new(|_| {}), &mut renderer);
        assert_eq!(playback.position(), Some(0));
        assert_eq!(playback.total(), Some(2));
        playback.tick(&mut live, &mut renderer);
        assert_eq!(playback.position(), Some(1));
    }

    #[test]
    fn tick_timer_gates_on_interval() {
        let mut timer = TickTimer::new(Duration::from_millis(0));
        assert!(timer.due());
        timer.set_interval(Duration::from_secs(60));
        timer.reset();
        assert!(!timer.due());
    }
}
