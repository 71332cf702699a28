// algotty: step-by-step data structure and algorithm visualizer

mod algorithms;
mod playback;
mod session;
mod structures;
mod trace;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use session::Session;
use structures::StructureKind;
use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("algotty");

    let Some(kind_arg) = args.get(1) else {
        eprintln!("Error: No structure given");
        eprintln!();
        eprintln!("Usage: {} <structure> [seed]", program_name);
        eprintln!();
        eprintln!("Structures:");
        eprintln!("  array stack queue list dlist bst rbt minheap maxheap graph");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} array         # random array, then try 'sort bubble'", program_name);
        eprintln!("  {} bst 42        # seeded BST, then try 'add 50'", program_name);
        eprintln!("  {} graph         # fixed demo graph, then try 'dijkstra'", program_name);
        std::process::exit(1);
    };

    let Some(kind) = StructureKind::from_arg(kind_arg) else {
        eprintln!("Error: Unknown structure '{}'", kind_arg);
        eprintln!("Expected one of: array stack queue list dlist bst rbt minheap maxheap graph");
        std::process::exit(1);
    };

    let seed = match args.get(2) {
        Some(arg) => match arg.parse() {
            Ok(seed) => seed,
            Err(_) => {
                eprintln!("Error: Seed '{}' is not a number", arg);
                std::process::exit(1);
            }
        },
        None => rand::random(),
    };

    let session = Session::new(kind, seed);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
