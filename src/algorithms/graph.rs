//! Traced Dijkstra's shortest-path algorithm
//!
//! Distances are `Option<Value>`; `None` means unreached and renders as ∞.
//! Node selection scans linearly for the unvisited node with the smallest
//! known distance, so ties go to the smallest index.  Unreachable nodes
//! are never picked and keep their ∞ distance in the final frame.

use crate::structures::graph::Graph;
use crate::structures::Value;
use crate::trace::{GraphView, Snapshot, Trace};

fn fmt_dist(dist: Option<Value>) -> String {
    match dist {
        Some(d) => d.to_string(),
        None => "∞".to_string(),
    }
}

fn graph_frame(
    trace: &mut Trace,
    distances: &[Option<Value>],
    visited: &[bool],
    current: Option<usize>,
    edge: Option<(usize, usize)>,
    explanation: String,
) {
    trace.frame(
        Snapshot::Graph(GraphView {
            distances: distances.to_vec(),
            visited: visited.to_vec(),
            current,
            edge,
        }),
        Vec::new(),
        explanation,
    );
}

/// Run Dijkstra from `source`, one frame per settled node and per relaxed
/// edge.  Returns the trace and the final distance table.
pub fn dijkstra(graph: &Graph, source: usize) -> (Trace, Vec<Option<Value>>) {
    let n = graph.node_count();
    let mut trace = Trace::new();
    let mut dist: Vec<Option<Value>> = vec![None; n];
    let mut visited = vec![false; n];
    dist[source] = Some(0);
    graph_frame(
        &mut trace,
        &dist,
        &visited,
        None,
        None,
        format!(
            "Start at node {}. Set its distance to 0. All others are ∞ (infinity).",
            source
        ),
    );
    for _ in 0..n {
        // unvisited node with the smallest known distance; ties go to the
        // smallest index, unreached nodes are never picked
        let mut u = None;
        let mut min_dist = None;
        for i in 0..n {
            if visited[i] {
                continue;
            }
            if let Some(d) = dist[i] {
                if min_dist.map_or(true, |m| d < m) {
                    min_dist = Some(d);
                    u = Some(i);
                }
            }
        }
        let (Some(u), Some(base)) = (u, min_dist) else {
            break;
        };
        visited[u] = true;
        graph_frame(
            &mut trace,
            &dist,
            &visited,
            Some(u),
            None,
            format!("Pick node {} (smallest distance not visited). Mark as visited.", u),
        );
        for &(v, w) in graph.neighbors(u) {
            if visited[v] {
                continue;
            }
            let candidate = base + w;
            if dist[v].map_or(true, |d| candidate < d) {
                let old = dist[v];
                dist[v] = Some(candidate);
                graph_frame(
                    &mut trace,
                    &dist,
                    &visited,
                    Some(v),
                    Some((u, v)),
                    format!(
                        "Check neighbor {} of node {}. Update its distance from {} to {} (via {}).",
                        v,
                        u,
                        fmt_dist(old),
                        candidate,
                        u
                    ),
                );
            } else {
                graph_frame(
                    &mut trace,
                    &dist,
                    &visited,
                    Some(v),
                    Some((u, v)),
                    format!(
                        "Check neighbor {} of node {}. No update needed (current distance is shorter).",
                        v, u
                    ),
                );
            }
        }
    }
    graph_frame(
        &mut trace,
        &dist,
        &visited,
        None,
        None,
        "All nodes visited. Shortest distances from start node are shown.".to_string(),
    );
    (trace, dist)
}
