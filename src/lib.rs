use std::{error, fmt::Display, path::PathBuf};

use clap::Parser;

pub mod boundary;
pub mod junction;
pub mod maze;
pub mod search;
pub mod solver;

pub use boundary::{Boundary, BoundaryDp, VertexId};
pub use junction::{Corridor, JunctionGraph};
pub use maze::{parse_maze, read_maze, Maze, Position};
pub use search::exhaustive_longest;
pub use solver::{solve, solve_maze, Solution, SolveStats};

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize),
    EmptyMaze,
    TooFewRows(usize),
    NoStartPosition,
    NoEndPosition,
    MultipleStartPosition(Position, Position),
    MultipleEndPosition(Position, Position),
    UnbalancedCorridor(Position, Position),
    SharedEndpoint(VertexId),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::EmptyMaze => write!(f, "Given maze has no rows."),
            Error::TooFewRows(row_n) => write!(
                f,
                "Expect at least 2 rows to hold both openings, given {}.",
                row_n
            ),
            Error::NoStartPosition => write!(f, "No start opening in the first row of maze."),
            Error::NoEndPosition => write!(f, "No end opening in the last row of maze."),
            Error::MultipleStartPosition(last_pos, pos) => write!(
                f,
                "Expect only one start opening, given two({}, {}).",
                last_pos, pos
            ),
            Error::MultipleEndPosition(last_pos, pos) => write!(
                f,
                "Expect only one end opening, given two({}, {}).",
                last_pos, pos
            ),
            Error::UnbalancedCorridor(from, to) => write!(
                f,
                "Corridors between junctions {} and {} aren't the same in both directions.",
                from, to
            ),
            Error::SharedEndpoint(v) => write!(
                f,
                "Vertex {} is the endpoint of more than one fragment in boundary.",
                v
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Try every simple path instead of running the boundary dynamic program.
    #[arg(long)]
    pub exhaustive: bool,
    /// Only walk down slopes (`^>v<`); always searched exhaustively.
    #[arg(long)]
    pub slopes: bool,
}
