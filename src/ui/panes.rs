//! Rendering logic for each TUI pane

use crate::structures::chain::ChainKind;
use crate::structures::graph::Graph;
use crate::structures::tree::{Color as NodeColor, TreeNode};
use crate::structures::{StructureKind, Value};
use crate::trace::{ElementId, GraphView, Snapshot};
use crate::ui::theme::DEFAULT_THEME;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn index_highlighted(highlight: &[ElementId], i: usize) -> bool {
    highlight.contains(&ElementId::Index(i))
}

fn key_highlighted(highlight: &[ElementId], v: Value) -> bool {
    highlight.contains(&ElementId::Key(v))
}

fn cell_style(highlighted: bool) -> Style {
    if highlighted {
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .bg(DEFAULT_THEME.highlight_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

/// Horizontal cells with an index row underneath; used for arrays and
/// queues
fn sequence_lines(values: &[Value], highlight: &[ElementId], front_marker: bool) -> Vec<Line<'static>> {
    if values.is_empty() {
        return vec![Line::from(Span::styled(
            "(empty)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    }
    let mut cells = Vec::new();
    let mut indices = Vec::new();
    for (i, &v) in values.iter().enumerate() {
        let text = format!("[{:^4}]", v);
        let width = text.len();
        cells.push(Span::styled(text, cell_style(index_highlighted(highlight, i))));
        indices.push(Span::styled(
            format!("{:^width$}", i, width = width),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }
    let mut lines = vec![Line::from(cells), Line::from(indices)];
    if front_marker {
        lines.push(Line::from(Span::styled(
            "front",
            Style::default().fg(DEFAULT_THEME.primary),
        )));
    }
    lines
}

/// Vertical cells, top of the stack first
fn stack_lines(values: &[Value], highlight: &[ElementId]) -> Vec<Line<'static>> {
    if values.is_empty() {
        return vec![Line::from(Span::styled(
            "(empty)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    }
    let mut lines = Vec::new();
    for (i, &v) in values.iter().enumerate().rev() {
        let marker = if i == values.len() - 1 { "top -> " } else { "       " };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(DEFAULT_THEME.primary)),
            Span::styled(format!("[{:^4}]", v), cell_style(index_highlighted(highlight, i))),
        ]));
    }
    lines
}

/// Nodes joined by arrows; doubly linked lists show both directions
fn chain_lines(values: &[Value], kind: ChainKind, highlight: &[ElementId]) -> Vec<Line<'static>> {
    if values.is_empty() {
        return vec![Line::from(Span::styled(
            "(empty)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    }
    let arrow = match kind {
        ChainKind::Singly => " -> ",
        ChainKind::Doubly => " <-> ",
    };
    let mut spans = vec![Span::styled(
        "head -> ".to_string(),
        Style::default().fg(DEFAULT_THEME.primary),
    )];
    for (i, &v) in values.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                arrow.to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }
        spans.push(Span::styled(
            format!("({})", v),
            cell_style(index_highlighted(highlight, i)),
        ));
    }
    vec![Line::from(spans)]
}

/// Sideways tree: right subtree above, root, left subtree below, one node
/// per line indented by depth
fn tree_lines(root: &Option<Box<TreeNode>>, highlight: &[ElementId]) -> Vec<Line<'static>> {
    fn walk(
        node: &Option<Box<TreeNode>>,
        depth: usize,
        highlight: &[ElementId],
        lines: &mut Vec<Line<'static>>,
    ) {
        let Some(n) = node else { return };
        walk(&n.right, depth + 1, highlight, lines);
        let label = match n.color {
            Some(NodeColor::Red) => format!("{} (R)", n.value),
            Some(NodeColor::Black) => format!("{} (B)", n.value),
            None => n.value.to_string(),
        };
        let style = if key_highlighted(highlight, n.value) {
            cell_style(true)
        } else {
            match n.color {
                Some(NodeColor::Red) => Style::default().fg(DEFAULT_THEME.node_red),
                Some(NodeColor::Black) => Style::default().fg(DEFAULT_THEME.node_black),
                None => Style::default().fg(DEFAULT_THEME.fg),
            }
        };
        lines.push(Line::from(vec![
            Span::raw("    ".repeat(depth)),
            Span::styled(label, style),
        ]));
        walk(&n.left, depth + 1, highlight, lines);
    }
    if root.is_none() {
        return vec![Line::from(Span::styled(
            "(empty)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    }
    let mut lines = Vec::new();
    walk(root, 0, highlight, &mut lines);
    lines
}

/// Distance table plus the fixed adjacency; the node being settled or
/// relax-checked gets an arrow marker
fn graph_lines(view: &GraphView, graph: Option<&Graph>) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, dist) in view.distances.iter().enumerate() {
        let marker = if view.current == Some(i) { "-> " } else { "   " };
        let dist_text = match dist {
            Some(d) => d.to_string(),
            None => "∞".to_string(),
        };
        let style = if view.current == Some(i) {
            cell_style(true)
        } else if view.visited[i] {
            Style::default().fg(DEFAULT_THEME.visited)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        let visited_tag = if view.visited[i] { "  visited" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(DEFAULT_THEME.primary)),
            Span::styled(format!("node {}  dist {}{}", i, dist_text, visited_tag), style),
        ]));
    }
    if let Some((u, v)) = view.edge {
        lines.push(Line::from(Span::styled(
            format!("checking edge {} - {}", u, v),
            Style::default().fg(DEFAULT_THEME.secondary),
        )));
    }
    if let Some(graph) = graph {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "edges:",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
        for (u, neighbors) in graph.adjacency().iter().enumerate() {
            for &(v, w) in neighbors {
                if u < v {
                    let on_edge = view.edge == Some((u, v)) || view.edge == Some((v, u));
                    let style = if on_edge {
                        Style::default().fg(DEFAULT_THEME.secondary)
                    } else {
                        Style::default().fg(DEFAULT_THEME.comment)
                    };
                    lines.push(Line::from(Span::styled(
                        format!("  {} - {}  (weight {})", u, v, w),
                        style,
                    )));
                }
            }
        }
    }
    lines
}

/// Render the structure pane for any snapshot variant
pub fn render_structure_pane(
    frame: &mut Frame,
    area: Rect,
    kind: StructureKind,
    snapshot: &Snapshot,
    highlight: &[ElementId],
    graph: Option<&Graph>,
) {
    let block = Block::default()
        .title(format!(" {} ", kind.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused));

    let lines = match snapshot {
        Snapshot::Sequence(values) => match kind {
            StructureKind::Stack => stack_lines(values, highlight),
            StructureKind::Queue => sequence_lines(values, highlight, true),
            _ => sequence_lines(values, highlight, false),
        },
        Snapshot::Chain { values, kind } => chain_lines(values, *kind, highlight),
        Snapshot::Tree(root) => tree_lines(root, highlight),
        Snapshot::Graph(view) => graph_lines(view, graph),
    };

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the explanation pane, with the swap temp register when one is
/// visible
pub fn render_explanation_pane(
    frame: &mut Frame,
    area: Rect,
    explanation: &str,
    scratch: Option<Value>,
) {
    let block = Block::default()
        .title(" Explanation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let mut lines = vec![Line::from(Span::styled(
        explanation.to_string(),
        Style::default().fg(DEFAULT_THEME.fg),
    ))];
    if let Some(value) = scratch {
        lines.push(Line::from(Span::styled(
            format!("temp = {}", value),
            Style::default()
                .fg(DEFAULT_THEME.scratch)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Render the command input line
pub fn render_input_pane(frame: &mut Frame, area: Rect, buffer: &str) {
    let block = Block::default()
        .title(" Command ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let line = Line::from(vec![
        Span::styled("> ", Style::default().fg(DEFAULT_THEME.primary)),
        Span::styled(buffer.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled("_", Style::default().fg(DEFAULT_THEME.comment)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_message: &str,
    progress: Option<(usize, usize)>,
    auto_play: bool,
) {
    let status_style = if status_message.starts_with("Error") {
        Style::default().fg(DEFAULT_THEME.error)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };
    let mut spans = vec![Span::styled(format!(" {} ", status_message), status_style)];
    if let Some((position, total)) = progress {
        spans.push(Span::styled(
            format!("| step {}/{} ", position, total),
            Style::default().fg(DEFAULT_THEME.primary),
        ));
    }
    if auto_play {
        spans.push(Span::styled(
            "| auto ",
            Style::default().fg(DEFAULT_THEME.success),
        ));
    }
    spans.push(Span::styled(
        "| Enter: run | Right: step | Tab: auto | Esc: cancel | help",
        Style::default().fg(DEFAULT_THEME.comment),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}
