use std::{
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};

use crate::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn row(&self) -> usize {
        self.r
    }

    pub fn col(&self) -> usize {
        self.c
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::North if self.r > 0 => Some(Self::new(self.r - 1, self.c)),
            Direction::East => Some(Self::new(self.r, self.c + 1)),
            Direction::South => Some(Self::new(self.r + 1, self.c)),
            Direction::West if self.c > 0 => Some(Self::new(self.r, self.c - 1)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRCTIONS: [Direction; 4] = [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ];

        &ALL_DIRCTIONS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
    Slope(Direction),
}

impl From<char> for Tile {
    fn from(value: char) -> Self {
        match value {
            '#' => Tile::Wall,
            '^' => Tile::Slope(Direction::North),
            '>' => Tile::Slope(Direction::East),
            'v' => Tile::Slope(Direction::South),
            '<' => Tile::Slope(Direction::West),
            _ => Tile::Open,
        }
    }
}

#[derive(Debug)]
pub struct Maze {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: usize,
    start_pos: Position,
    end_pos: Position,
}

impl Maze {
    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn start_pos(&self) -> &Position {
        &self.start_pos
    }

    pub fn end_pos(&self) -> &Position {
        &self.end_pos
    }

    pub fn cell_id(&self, pos: &Position) -> usize {
        pos.r * self.col_n + pos.c
    }

    pub fn tile(&self, pos: &Position) -> Option<&Tile> {
        if pos.r < self.row_n && pos.c < self.col_n {
            self.tiles.get(self.cell_id(pos))
        } else {
            None
        }
    }

    pub fn is_open(&self, pos: &Position) -> bool {
        self.tile(pos).is_some_and(|tile| *tile != Tile::Wall)
    }

    pub fn can_leave(&self, pos: &Position, dir: Direction) -> bool {
        match self.tile(pos) {
            Some(Tile::Open) => true,
            Some(Tile::Slope(slope_dir)) => *slope_dir == dir,
            _ => false,
        }
    }

    pub fn open_steps<'a>(
        &'a self,
        pos: &'a Position,
    ) -> impl Iterator<Item = (Direction, Position)> + 'a {
        Direction::all_dirs()
            .iter()
            .filter_map(move |dir| pos.neighbor(*dir).map(|next_pos| (*dir, next_pos)))
            .filter(move |(_, next_pos)| self.is_open(next_pos))
    }

    pub fn open_neighbors<'a>(
        &'a self,
        pos: &'a Position,
    ) -> impl Iterator<Item = Position> + 'a {
        self.open_steps(pos).map(|(_, next_pos)| next_pos)
    }

    pub fn degree(&self, pos: &Position) -> usize {
        self.open_neighbors(pos).count()
    }

    pub fn is_terminal(&self, pos: &Position) -> bool {
        *pos == self.start_pos || *pos == self.end_pos
    }

    pub fn is_junction(&self, pos: &Position) -> bool {
        self.is_open(pos) && (self.is_terminal(pos) || self.degree(pos) > 2)
    }
}

#[derive(Debug)]
pub struct MazeBuilder {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: Option<usize>,
}

impl MazeBuilder {
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let this_col_n = text.chars().count();
        let col_n = *self.col_n.get_or_insert(this_col_n);
        if col_n != this_col_n {
            return Err(Error::InconsistentRow(col_n, this_col_n));
        }

        self.tiles.extend(text.chars().map(Tile::from));
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<Maze, Error> {
        let Some(col_n) = self.col_n else {
            return Err(Error::EmptyMaze);
        };
        if self.row_n < 2 {
            return Err(Error::TooFewRows(self.row_n));
        }

        let start_pos = self
            .find_opening(0)
            .map_err(|(last_pos, pos)| Error::MultipleStartPosition(last_pos, pos))?
            .ok_or(Error::NoStartPosition)?;
        let end_pos = self
            .find_opening(self.row_n - 1)
            .map_err(|(last_pos, pos)| Error::MultipleEndPosition(last_pos, pos))?
            .ok_or(Error::NoEndPosition)?;

        Ok(Maze {
            tiles: self.tiles,
            row_n: self.row_n,
            col_n,
            start_pos,
            end_pos,
        })
    }

    fn find_opening(&self, r: usize) -> Result<Option<Position>, (Position, Position)> {
        let col_n = self.col_n.unwrap_or(0);
        let mut opening: Option<Position> = None;
        for (c, tile) in self.tiles[(r * col_n)..((r + 1) * col_n)].iter().enumerate() {
            if *tile == Tile::Open {
                let pos = Position::new(r, c);
                if let Some(last_pos) = opening.take() {
                    return Err((last_pos, pos));
                }

                opening = Some(pos);
            }
        }

        Ok(opening)
    }
}

impl Default for MazeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse_maze(text: &str) -> Result<Maze, Error> {
    let mut builder = MazeBuilder::new();
    for line in text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
    {
        builder.add_row(line)?;
    }

    builder.build()
}

pub fn read_maze<P: AsRef<Path>>(path: P) -> Result<Maze> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = MazeBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        builder
            .add_row(line)
            .with_context(|| format!("Invalid row at line {}.", ind + 1))?;
    }

    Ok(builder.build()?)
}
