use std::collections::HashSet;

use longest_trail::{exhaustive_longest, parse_maze, solve, JunctionGraph, Maze, Position};
use proptest::prelude::*;

/// Mazes with a single opening in the top and bottom rows and random walls in between.
fn maze_text() -> impl Strategy<Value = String> {
    (2usize..7, 3usize..7)
        .prop_flat_map(|(row_n, col_n)| {
            (
                Just(row_n),
                Just(col_n),
                0..col_n,
                0..col_n,
                prop::collection::vec(prop::bool::weighted(0.65), row_n * col_n),
            )
        })
        .prop_map(|(row_n, col_n, start_c, end_c, open)| {
            let mut text = String::new();
            for r in 0..row_n {
                for c in 0..col_n {
                    let is_open = if r == 0 {
                        c == start_c
                    } else if r == row_n - 1 {
                        c == end_c
                    } else {
                        open[r * col_n + c]
                    };
                    text.push(if is_open { '.' } else { '#' });
                }
                text.push('\n');
            }
            text
        })
}

/// The same mazes with some inner open cells turned into slopes.
fn sloped_maze_text() -> impl Strategy<Value = String> {
    maze_text()
        .prop_flat_map(|text| {
            let cell_n = text.len();
            (Just(text), prop::collection::vec(0usize..8, cell_n))
        })
        .prop_map(|(text, rolls)| {
            let row_n = text.lines().count();
            let mut sloped = String::new();
            let mut ind = 0;
            for (r, line) in text.lines().enumerate() {
                for ch in line.chars() {
                    let inner = r != 0 && r != row_n - 1;
                    sloped.push(match (ch, rolls[ind]) {
                        ('.', 0) if inner => '^',
                        ('.', 1) if inner => '>',
                        ('.', 2) if inner => 'v',
                        ('.', 3) if inner => '<',
                        _ => ch,
                    });
                    ind += 1;
                }
                sloped.push('\n');
                ind += 1;
            }
            sloped
        })
}

fn cell_longest(maze: &Maze, pos: &Position, visited: &mut HashSet<Position>) -> Option<usize> {
    if pos == maze.end_pos() {
        return Some(0);
    }

    visited.insert(pos.clone());
    let mut longest = None;
    for next_pos in maze.open_neighbors(pos) {
        if visited.contains(&next_pos) {
            continue;
        }

        let found = cell_longest(maze, &next_pos, visited).map(|len| len + 1);
        longest = longest.max(found);
    }
    visited.remove(pos);

    longest
}

fn downhill_longest(
    maze: &Maze,
    pos: &Position,
    visited: &mut HashSet<Position>,
) -> Option<usize> {
    if pos == maze.end_pos() {
        return Some(0);
    }

    visited.insert(pos.clone());
    let mut longest = None;
    for (dir, next_pos) in maze.open_steps(pos) {
        if !maze.can_leave(pos, dir) || visited.contains(&next_pos) {
            continue;
        }

        let found = downhill_longest(maze, &next_pos, visited).map(|len| len + 1);
        longest = longest.max(found);
    }
    visited.remove(pos);

    longest
}

proptest! {
    #[test]
    fn boundary_program_matches_search(text in maze_text()) {
        let maze = parse_maze(&text).unwrap();
        let graph = JunctionGraph::from_maze(&maze).unwrap();
        let expected = cell_longest(&maze, maze.start_pos(), &mut HashSet::new());

        prop_assert_eq!(exhaustive_longest(&graph), expected);
        prop_assert_eq!(solve(&graph).longest, expected);
    }

    #[test]
    fn sloped_search_matches_cell_walk(text in sloped_maze_text()) {
        let maze = parse_maze(&text).unwrap();
        let graph = JunctionGraph::from_maze_with_slopes(&maze);
        let expected = downhill_longest(&maze, maze.start_pos(), &mut HashSet::new());

        prop_assert!(graph.is_directed());
        prop_assert_eq!(exhaustive_longest(&graph), expected);
    }
}
