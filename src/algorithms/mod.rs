//! Instrumented algorithm library
//!
//! This module provides the core "trace while computing" logic:
//! - [`sequence`]: array/stack/queue mutation primitives
//! - [`sorts`]: the five classic sorts over an array
//! - [`chain`]: linked-list pointer operations
//! - [`tree`]: BST descent and simplified Red-Black color normalization
//! - [`heap`]: sift-up/sift-down heap repair
//! - [`graph`]: Dijkstra's shortest-path tracer
//!
//! # Execution model
//!
//! Every operation clones the structure it receives into a private working
//! copy, appends a frame at each semantically meaningful point (comparison,
//! swap, shift, pointer relink, pivot choice, edge relaxation, recoloring),
//! and returns the trace together with the finished copy.  Nothing here
//! mutates the live structure: the playback controller's finalize callback
//! is the only commit point.
//!
//! Inputs are assumed valid — index bounds and emptiness are checked at the
//! session boundary before any of these functions run.  Semantic non-events
//! (duplicate keys, missing values) come back as a one-frame trace whose
//! committed result equals the input.

pub mod chain;
pub mod graph;
pub mod heap;
pub mod sequence;
pub mod sorts;
pub mod tree;
