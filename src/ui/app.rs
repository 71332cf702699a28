//! Main TUI application state and logic

use crate::algorithms::sorts::SortKind;
use crate::playback::{Renderer, Tick, TickTimer};
use crate::session::{Request, Session};
use crate::structures::{Structure, StructureKind, Value};
use crate::trace::Frame as TraceFrame;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// What the view currently shows: the last dispatched frame and the swap
/// temp register, when visible
#[derive(Default)]
pub struct ViewState {
    pub frame: Option<TraceFrame>,
    pub scratch: Option<Value>,
}

impl Renderer for ViewState {
    fn render_frame(&mut self, frame: &TraceFrame) {
        self.frame = Some(frame.clone());
    }

    fn show_scratch(&mut self, value: Value) {
        self.scratch = Some(value);
    }

    fn hide_scratch(&mut self) {
        self.scratch = None;
    }
}

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Request(Request),
    Regenerate { seed: Option<u64> },
    SetValues(Vec<Value>),
    Speed(u64),
    Help,
    Quit,
}

/// Parse an input line against the commands the structure kind supports.
/// Bounds and emptiness are checked later by the session; this only
/// handles shape and numbers.
fn parse_command(kind: StructureKind, input: &str) -> Result<Command, String> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Err("empty command".to_string());
    };

    fn value(args: &[&str], i: usize, usage: &str) -> Result<Value, String> {
        args.get(i)
            .and_then(|a| a.parse().ok())
            .ok_or_else(|| format!("usage: {}", usage))
    }
    fn index(args: &[&str], i: usize, usage: &str) -> Result<usize, String> {
        args.get(i)
            .and_then(|a| a.parse().ok())
            .ok_or_else(|| format!("usage: {}", usage))
    }

    let keyed = matches!(
        kind,
        StructureKind::BinarySearchTree
            | StructureKind::RedBlackTree
            | StructureKind::MinHeap
            | StructureKind::MaxHeap
    );

    match name {
        "q" | "quit" => Ok(Command::Quit),
        "help" => Ok(Command::Help),
        "new" => {
            let seed = match args.first() {
                Some(a) => Some(a.parse().map_err(|_| "usage: new [seed]".to_string())?),
                None => None,
            };
            Ok(Command::Regenerate { seed })
        }
        "set" => {
            if args.is_empty() {
                return Err("usage: set <value> [value ...]".to_string());
            }
            let values = args
                .iter()
                .map(|a| a.parse())
                .collect::<Result<Vec<Value>, _>>()
                .map_err(|_| "usage: set <value> [value ...]".to_string())?;
            Ok(Command::SetValues(values))
        }
        "speed" => Ok(Command::Speed(
            args.first()
                .and_then(|a| a.parse().ok())
                .ok_or_else(|| "usage: speed <milliseconds>".to_string())?,
        )),
        "add" | "push" | "enqueue" => {
            Ok(Command::Request(Request::Add(value(args, 0, "add <value>")?)))
        }
        "pop" => Ok(Command::Request(Request::Pop)),
        "dequeue" => Ok(Command::Request(Request::Dequeue)),
        "insert" => Ok(Command::Request(Request::InsertAt {
            index: index(args, 0, "insert <index> <value>")?,
            value: value(args, 1, "insert <index> <value>")?,
        })),
        "remove" => {
            if keyed {
                Ok(Command::Request(Request::Remove(value(
                    args,
                    0,
                    "remove <value>",
                )?)))
            } else {
                Ok(Command::Request(Request::RemoveAt {
                    index: index(args, 0, "remove <index>")?,
                }))
            }
        }
        "swap" => Ok(Command::Request(Request::Swap {
            i: index(args, 0, "swap <index> <index>")?,
            j: index(args, 1, "swap <index> <index>")?,
        })),
        "replace" => {
            if keyed {
                Ok(Command::Request(Request::ReplaceValue {
                    old: value(args, 0, "replace <old> <new>")?,
                    new: value(args, 1, "replace <old> <new>")?,
                }))
            } else {
                Ok(Command::Request(Request::ReplaceAt {
                    index: index(args, 0, "replace <index> <value>")?,
                    value: value(args, 1, "replace <index> <value>")?,
                }))
            }
        }
        "sort" => {
            let alg = args.first().copied().unwrap_or("");
            let sort_kind = SortKind::from_arg(alg)
                .ok_or_else(|| "usage: sort <bubble|selection|insertion|merge|quick>".to_string())?;
            Ok(Command::Request(Request::Sort(sort_kind)))
        }
        "dijkstra" => {
            let source = match args.first() {
                Some(a) => a.parse().map_err(|_| "usage: dijkstra [source]".to_string())?,
                None => 0,
            };
            Ok(Command::Request(Request::Dijkstra { source }))
        }
        other => Err(format!("unknown command: {}", other)),
    }
}

/// Commands available for a structure kind, shown by `help`
fn help_line(kind: StructureKind) -> &'static str {
    match kind {
        StructureKind::Array => {
            "add <v> | insert <i> <v> | remove <i> | swap <i> <j> | replace <i> <v> | sort <alg> | new | set | speed | quit"
        }
        StructureKind::Stack => "push <v> | pop | replace <i> <v> | new | set | speed | quit",
        StructureKind::Queue => {
            "enqueue <v> | dequeue | swap <i> <j> | replace <i> <v> | new | set | speed | quit"
        }
        StructureKind::SinglyLinkedList | StructureKind::DoublyLinkedList => {
            "add <v> | insert <i> <v> | remove <i> | swap <i> <j> | replace <i> <v> | new | set | speed | quit"
        }
        StructureKind::BinarySearchTree
        | StructureKind::RedBlackTree
        | StructureKind::MinHeap
        | StructureKind::MaxHeap => {
            "add <v> | remove <v> | replace <old> <new> | new | set | speed | quit"
        }
        StructureKind::Graph => "dijkstra [source] | speed | quit",
    }
}

/// The main application state
pub struct App {
    /// The visualizer session owning the live structure
    pub session: Session,

    /// Last dispatched frame and scratch register
    pub view: ViewState,

    /// Command line buffer
    pub input: String,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub auto_play: bool,

    /// Gate between auto-play ticks
    timer: TickTimer,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new app around a session
    pub fn new(session: Session) -> Self {
        App {
            session,
            view: ViewState::default(),
            input: String::new(),
            status_message: String::from("Ready! Type 'help' for commands."),
            auto_play: false,
            timer: TickTimer::new(Duration::from_millis(1500)),
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.auto_play && self.session.is_playing() && self.timer.due() {
                self.advance();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        let (snapshot, highlight) = match &self.view.frame {
            Some(f) => (f.snapshot.clone(), f.highlight.clone()),
            None => (self.session.live_snapshot(), Vec::new()),
        };
        let graph = match self.session.live() {
            Structure::Graph(g) => Some(g),
            _ => None,
        };

        super::panes::render_structure_pane(
            frame,
            chunks[0],
            self.session.kind(),
            &snapshot,
            &highlight,
            graph,
        );

        let explanation = self
            .view
            .frame
            .as_ref()
            .map(|f| f.explanation.as_str())
            .unwrap_or("Type a command to run an operation step by step.");
        super::panes::render_explanation_pane(frame, chunks[1], explanation, self.view.scratch);

        super::panes::render_input_pane(frame, chunks[2], &self.input);

        super::panes::render_status_bar(
            frame,
            chunks[3],
            &self.status_message,
            self.session.progress(),
            self.auto_play,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.input);
                if !line.trim().is_empty() {
                    self.submit(&line);
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Esc => {
                if self.session.is_playing() {
                    self.session.cancel(&mut self.view);
                    self.view.frame = None;
                    self.status_message = "Cancelled".to_string();
                } else {
                    self.input.clear();
                }
            }
            KeyCode::Tab => {
                self.auto_play = !self.auto_play;
                if self.auto_play {
                    self.timer.reset();
                    self.status_message = "Playing...".to_string();
                } else {
                    self.status_message = "Paused".to_string();
                }
            }
            KeyCode::Right => {
                if self.session.is_playing() {
                    self.advance();
                } else {
                    self.status_message = "Nothing to step".to_string();
                }
            }
            KeyCode::Char(c) => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    /// Advance the in-flight trace by one step
    fn advance(&mut self) {
        match self.session.tick(&mut self.view) {
            Tick::Dispatched => {}
            Tick::Finished => {
                self.status_message = "Playback complete".to_string();
            }
            Tick::Idle => {}
        }
    }

    /// Parse and execute one input line
    fn submit(&mut self, line: &str) {
        match parse_command(self.session.kind(), line) {
            Ok(Command::Quit) => {
                self.should_quit = true;
            }
            Ok(Command::Help) => {
                self.status_message = help_line(self.session.kind()).to_string();
            }
            Ok(Command::Regenerate { seed }) => {
                let seed = seed.unwrap_or_else(rand::random);
                self.session.regenerate(seed, &mut self.view);
                self.view.frame = None;
                self.status_message = format!(
                    "Generated a new {} (seed {})",
                    self.session.kind().label(),
                    seed
                );
            }
            Ok(Command::SetValues(values)) => {
                self.session.set_values(values, &mut self.view);
                self.view.frame = None;
                self.status_message = "Values set".to_string();
            }
            Ok(Command::Speed(ms)) => {
                let ms = ms.clamp(100, 10_000);
                self.timer.set_interval(Duration::from_millis(ms));
                self.status_message = format!("Auto-play interval set to {} ms", ms);
            }
            Ok(Command::Request(request)) => match self.session.apply(request, &mut self.view) {
                Ok(()) => {
                    self.timer.reset();
                    self.status_message = if self.auto_play {
                        "Playing...".to_string()
                    } else {
                        "Trace ready. Right to step, Tab for auto-play.".to_string()
                    };
                }
                Err(e) => {
                    self.status_message = format!("Error: {}", e);
                }
            },
            Err(message) => {
                self.status_message = message;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_commands_address_by_index() {
        assert_eq!(
            parse_command(StructureKind::Array, "remove 2"),
            Ok(Command::Request(Request::RemoveAt { index: 2 }))
        );
        assert_eq!(
            parse_command(StructureKind::Array, "replace 1 9"),
            Ok(Command::Request(Request::ReplaceAt { index: 1, value: 9 }))
        );
        assert_eq!(
            parse_command(StructureKind::Array, "sort quick"),
            Ok(Command::Request(Request::Sort(SortKind::Quick)))
        );
    }

    #[test]
    fn keyed_commands_address_by_value() {
        assert_eq!(
            parse_command(StructureKind::BinarySearchTree, "remove 42"),
            Ok(Command::Request(Request::Remove(42)))
        );
        assert_eq!(
            parse_command(StructureKind::MinHeap, "replace 5 9"),
            Ok(Command::Request(Request::ReplaceValue { old: 5, new: 9 }))
        );
    }

    #[test]
    fn stack_and_queue_verbs() {
        assert_eq!(
            parse_command(StructureKind::Stack, "push 7"),
            Ok(Command::Request(Request::Add(7)))
        );
        assert_eq!(
            parse_command(StructureKind::Stack, "pop"),
            Ok(Command::Request(Request::Pop))
        );
        assert_eq!(
            parse_command(StructureKind::Queue, "dequeue"),
            Ok(Command::Request(Request::Dequeue))
        );
    }

    #[test]
    fn dijkstra_defaults_to_source_zero() {
        assert_eq!(
            parse_command(StructureKind::Graph, "dijkstra"),
            Ok(Command::Request(Request::Dijkstra { source: 0 }))
        );
        assert_eq!(
            parse_command(StructureKind::Graph, "dijkstra 2"),
            Ok(Command::Request(Request::Dijkstra { source: 2 }))
        );
    }

    #[test]
    fn malformed_input_reports_usage() {
        let err = parse_command(StructureKind::Array, "insert one 2").unwrap_err();
        assert!(err.starts_with("usage: insert"));
        let err = parse_command(StructureKind::Array, "sort bogo").unwrap_err();
        assert!(err.starts_with("usage: sort"));
        let err = parse_command(StructureKind::Array, "frobnicate").unwrap_err();
        assert!(err.contains("unknown command"));
    }

    #[test]
    fn negative_values_parse_for_value_arguments() {
        assert_eq!(
            parse_command(StructureKind::Array, "add -5"),
            Ok(Command::Request(Request::Add(-5)))
        );
    }
}
