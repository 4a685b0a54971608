//! Playing generated mazes through the session API.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use tui_maze::core::{GameSession, Maze, MazeConfig, SessionStep, SimpleRng};
use tui_maze::types::{Direction, InputEvent, Pos, Tile};

fn event_for(dir: Direction) -> InputEvent {
    match dir {
        Direction::Up => InputEvent::Up,
        Direction::Down => InputEvent::Down,
        Direction::Left => InputEvent::Left,
        Direction::Right => InputEvent::Right,
    }
}

/// Shortest route from start to goal as a list of directions.
fn solve(maze: &Maze) -> Vec<Direction> {
    let mut came: HashMap<Pos, (Pos, Direction)> = HashMap::new();
    let mut queue = VecDeque::from([maze.start]);
    while let Some(at) = queue.pop_front() {
        if at == maze.goal {
            break;
        }
        for dir in Direction::SEARCH_ORDER {
            let Some(next) = at.step(dir, 1) else { continue };
            if next != maze.start && maze.grid.is_walkable(next) && !came.contains_key(&next) {
                came.insert(next, (at, dir));
                queue.push_back(next);
            }
        }
    }

    let mut route = Vec::new();
    let mut at = maze.goal;
    while at != maze.start {
        let (prev, dir) = came[&at];
        route.push(dir);
        at = prev;
    }
    route.reverse();
    route
}

#[test]
fn optimal_route_finishes_in_min_moves() {
    let maze = Maze::generate(&MazeConfig::default(), &mut SimpleRng::new(12345)).unwrap();
    let route = solve(&maze);
    assert_eq!(route.len(), maze.min_moves);

    let mut session = GameSession::new(&maze);
    let last = route.len() - 1;
    for (i, dir) in route.into_iter().enumerate() {
        let expected = if i == last { SessionStep::Finished } else { SessionStep::Moved };
        assert_eq!(session.apply(event_for(dir)), expected);
    }
    assert_eq!(session.moves() as usize, maze.min_moves);
    assert_eq!(session.frame().tile(maze.goal), Some(Tile::Player));

    let summary = session.summary(Duration::from_secs(10));
    assert!(summary.finished);
    assert!(summary.to_string().contains(&format!("Min. Moves  : {}", maze.min_moves)));
}

#[test]
fn quitting_early_is_not_a_finish() {
    let maze = Maze::generate(&MazeConfig::default(), &mut SimpleRng::new(1)).unwrap();
    let mut session = GameSession::new(&maze);
    assert_eq!(session.apply(InputEvent::None), SessionStep::Ignored);
    assert_eq!(session.apply(InputEvent::Quit), SessionStep::Quit);

    let summary = session.summary(Duration::from_secs(3));
    assert!(!summary.finished);
    assert_eq!(summary.moves, 0);
}

#[test]
fn wandering_off_and_back_keeps_goal_visible() {
    let maze = Maze::generate(&MazeConfig::new(9, 9, Pos::new(1, 1)), &mut SimpleRng::new(77)).unwrap();
    let route = solve(&maze);
    let mut session = GameSession::new(&maze);

    // Walk to one step before the goal, then check the goal tile still shows.
    for dir in &route[..route.len() - 1] {
        session.apply(event_for(*dir));
    }
    assert_eq!(session.frame().tile(maze.goal), Some(Tile::Goal));
    assert_eq!(session.frame().base().get(maze.start), Some(Tile::Path));
    assert_eq!(session.frame().tile(maze.start), Some(Tile::Path));
}
