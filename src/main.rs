//! Terminal maze runner (default binary).
//!
//! Generates one maze, then blocks on key presses until the player reaches
//! the goal or quits. Frames are drawn inline with a diff renderer; the
//! summary is printed after the terminal is restored.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tui_maze::cli::Args;
use tui_maze::core::{GameSession, Maze, MazeConfig, RunSummary, SessionStep};
use tui_maze::input::map_key_event;
use tui_maze::term::{display_rows, TerminalRenderer};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    info!("Starting with {args:?}");

    let config = args.maze_config();
    config.validate()?;
    let mut rng = args.rng();
    let maze = Maze::generate(&config, rng.as_mut())?;
    check_terminal_fits(&config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &maze);

    // Always try to restore terminal state.
    let _ = term.exit();

    let summary = result?;
    if summary.finished {
        println!("{summary}");
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, maze: &Maze) -> Result<RunSummary> {
    let mut session = GameSession::new(maze);
    term.draw(session.frame())?;
    let started = Instant::now();

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match session.apply(map_key_event(key)) {
            SessionStep::Moved => term.draw(session.frame())?,
            SessionStep::Finished => {
                term.draw(session.frame())?;
                break;
            }
            SessionStep::Quit => break,
            SessionStep::Blocked | SessionStep::Ignored => {}
        }
    }

    Ok(session.summary(started.elapsed()))
}

/// Cursor-up redraws cannot reach lines that scrolled off the top.
fn check_terminal_fits(config: &MazeConfig) {
    let Ok((width, height)) = crossterm::terminal::size() else {
        return;
    };
    let needed_rows = display_rows(config.rows) + 1;
    if config.cols > usize::from(width) || needed_rows > usize::from(height) {
        warn!(
            "maze needs {}x{} cells but the terminal is {}x{}; redraws may tear",
            config.cols, needed_rows, width, height
        );
    }
}
