//! Game session - input events in, frame transitions out.
//!
//! Holds no clock. The caller measures elapsed time and hands it to
//! [`GameSession::summary`] when the run ends.

use std::fmt;
use std::time::Duration;

use crate::frame::FrameBuffer;
use crate::maze::Maze;
use crate::types::{InputEvent, Pos};

/// What a single input did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStep {
    /// The player moved; the frame changed.
    Moved,
    /// Movement into a wall or off the grid.
    Blocked,
    /// Not a movement or quit input, or the session already ended.
    Ignored,
    Quit,
    /// The player reached the goal with this move.
    Finished,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    frame: FrameBuffer,
    goal: Pos,
    min_moves: usize,
    moves: u32,
    finished: bool,
}

impl GameSession {
    pub fn new(maze: &Maze) -> Self {
        Self {
            frame: FrameBuffer::from_maze(maze),
            goal: maze.goal,
            min_moves: maze.min_moves,
            moves: 0,
            finished: false,
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn min_moves(&self) -> usize {
        self.min_moves
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn apply(&mut self, event: InputEvent) -> SessionStep {
        if event == InputEvent::Quit {
            return SessionStep::Quit;
        }
        if self.finished {
            return SessionStep::Ignored;
        }
        let Some(dir) = event.direction() else {
            return SessionStep::Ignored;
        };
        let Some(next) = self.frame.try_move(dir) else {
            return SessionStep::Blocked;
        };

        self.frame = next;
        self.moves += 1;
        if self.frame.player() == self.goal {
            self.finished = true;
            return SessionStep::Finished;
        }
        SessionStep::Moved
    }

    pub fn summary(&self, elapsed: Duration) -> RunSummary {
        RunSummary {
            elapsed,
            moves: self.moves,
            min_moves: self.min_moves,
            finished: self.finished,
        }
    }
}

/// End-of-run statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub elapsed: Duration,
    pub moves: u32,
    pub min_moves: usize,
    pub finished: bool,
}

impl RunSummary {
    pub fn moves_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs <= 0.0 {
            return 0.0;
        }
        f64::from(self.moves) / secs
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.elapsed.as_secs();
        let rule = "=====================";

        writeln!(f, "{}", if self.finished { "You finished!" } else { "Gave up." })?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Total Time  : {}m {}s", (total % 3600) / 60, total % 60)?;
        writeln!(f, "Total Moves : {}", self.moves)?;
        writeln!(f, "Min. Moves  : {}", self.min_moves)?;
        writeln!(f, "Moves / s   : {:.0}", self.moves_per_second())?;
        write!(f, "{rule}")
    }
}
