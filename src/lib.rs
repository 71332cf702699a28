//! # Introduction
//!
//! algotty replays the inner workings of classic data structures and
//! algorithms one semantically meaningful step at a time.  Every operation
//! runs over a private working copy of a structure and records a trace of
//! intermediate snapshots with highlights and plain-language explanations.
//! The trace is then played back, on a timer or manually, in a terminal UI
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Algorithm Library → Trace → Playback Controller → Renderer
//!                                           │
//!                                           └─ finalize: commit into the
//!                                              live structure
//! ```
//!
//! 1. [`structures`] — in-memory models: arrays, stacks, queues, linked
//!    lists, binary trees (BST, simplified Red-Black, heaps) and a small
//!    weighted graph, with bounds-checked mutation primitives.
//! 2. [`algorithms`] — instrumented implementations of every user-facing
//!    operation; each one emits a [`trace::Trace`] while computing.
//! 3. [`trace`] — the ordered, immutable sequence of steps an algorithm
//!    run produced, with deep-frozen snapshots.
//! 4. [`playback`] — a small state machine that advances a trace one step
//!    per tick and performs a single commit when the trace is exhausted.
//! 5. [`session`] — the caller-owned state object tying a live structure to
//!    the controller; validates all operation parameters at the boundary.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported structures
//!
//! Array, stack, queue, singly/doubly linked list, binary search tree,
//! simplified Red-Black tree (color normalization only, no rotations),
//! Min/Max heap, and a fixed demo graph for Dijkstra's algorithm.

pub mod algorithms;
pub mod playback;
pub mod session;
pub mod structures;
pub mod trace;
pub mod ui;
