use std::collections::{HashMap, LinkedList};

use log::debug;

use crate::{
    boundary::VertexId,
    maze::{Direction, Maze, Position},
    Error,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corridor {
    to: VertexId,
    steps: usize,
}

impl Corridor {
    pub fn new(to: VertexId, steps: usize) -> Self {
        Self { to, steps }
    }

    pub fn to(&self) -> VertexId {
        self.to
    }

    pub fn steps(&self) -> usize {
        self.steps
    }
}

/// Junctions of a maze joined by the corridors between them.
///
/// Vertices are numbered in discovery order starting from the start opening.
/// Without slopes every corridor is listed once at each of its ends, parallel
/// corridors included. With slopes a corridor is only listed at the end it can
/// be entered from.
#[derive(Debug)]
pub struct JunctionGraph {
    positions: Vec<Position>,
    ids: HashMap<Position, VertexId>,
    corridors: Vec<Vec<Corridor>>,
    start: VertexId,
    end: VertexId,
    directed: bool,
}

impl JunctionGraph {
    pub fn from_maze(maze: &Maze) -> Result<Self, Error> {
        let graph = Self::reduce(maze, false);
        graph.check_balance()?;
        Ok(graph)
    }

    pub fn from_maze_with_slopes(maze: &Maze) -> Self {
        Self::reduce(maze, true)
    }

    fn reduce(maze: &Maze, follow_slopes: bool) -> Self {
        let mut graph = JunctionGraph {
            positions: Vec::new(),
            ids: HashMap::new(),
            corridors: Vec::new(),
            start: 0,
            end: 0,
            directed: follow_slopes,
        };
        let start = graph.add_vertex(maze.start_pos());
        let mut search_queue = LinkedList::from([start]);
        while let Some(from) = search_queue.pop_front() {
            let from_pos = graph.positions[from].clone();
            for (first_dir, _) in maze.open_steps(&from_pos) {
                let Some((junction_pos, len)) =
                    walk_corridor(maze, &from_pos, first_dir, follow_slopes)
                else {
                    continue;
                };

                let to = match graph.vertex_at(&junction_pos) {
                    Some(id) => id,
                    None => {
                        let id = graph.add_vertex(&junction_pos);
                        search_queue.push_back(id);
                        id
                    }
                };
                graph.corridors[from].push(Corridor::new(to, len));
            }
        }

        // An unreachable end still gets a vertex, just without corridors.
        graph.end = match graph.vertex_at(maze.end_pos()) {
            Some(id) => id,
            None => graph.add_vertex(maze.end_pos()),
        };
        graph.start = start;

        debug!(
            "Reduced {}x{} maze to {} junction(s) and {} corridor(s){}.",
            maze.row_n(),
            maze.col_n(),
            graph.vertex_n(),
            graph.corridor_n(),
            if follow_slopes { " following slopes" } else { "" }
        );

        graph
    }

    pub fn vertex_n(&self) -> usize {
        self.positions.len()
    }

    pub fn corridor_n(&self) -> usize {
        let listed_n = self.corridors.iter().map(Vec::len).sum::<usize>();
        if self.directed {
            listed_n
        } else {
            listed_n / 2
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn end(&self) -> VertexId {
        self.end
    }

    pub fn is_terminal(&self, v: VertexId) -> bool {
        v == self.start || v == self.end
    }

    pub fn position(&self, v: VertexId) -> &Position {
        &self.positions[v]
    }

    pub fn vertex_at(&self, pos: &Position) -> Option<VertexId> {
        self.ids.get(pos).copied()
    }

    pub fn corridors(&self, v: VertexId) -> &[Corridor] {
        &self.corridors[v]
    }

    pub fn degree(&self, v: VertexId) -> usize {
        self.corridors[v].len()
    }

    fn add_vertex(&mut self, pos: &Position) -> VertexId {
        let id = self.positions.len();
        self.ids.insert(pos.clone(), id);
        self.positions.push(pos.clone());
        self.corridors.push(Vec::new());
        id
    }

    fn check_balance(&self) -> Result<(), Error> {
        let mut seen_n: HashMap<(VertexId, VertexId, usize), isize> = HashMap::new();
        for (from, corridors) in self.corridors.iter().enumerate() {
            for corridor in corridors {
                let (a, b) = (from.min(corridor.to), from.max(corridor.to));
                if a == b {
                    return Err(self.unbalanced(a, b));
                }

                let seen = seen_n.entry((a, b, corridor.steps)).or_insert(0);
                *seen += if from == a { 1 } else { -1 };
            }
        }

        match seen_n.into_iter().find(|(_, n)| *n != 0) {
            Some(((a, b, _), _)) => Err(self.unbalanced(a, b)),
            None => Ok(()),
        }
    }

    fn unbalanced(&self, a: VertexId, b: VertexId) -> Error {
        Error::UnbalancedCorridor(self.positions[a].clone(), self.positions[b].clone())
    }
}

/// Follows a corridor from junction `origin`, leaving towards `first_dir`, until
/// the next junction. Dead ends, corridors looping back into `origin` and, when
/// following slopes, steps against a slope give `None`.
fn walk_corridor(
    maze: &Maze,
    origin: &Position,
    first_dir: Direction,
    follow_slopes: bool,
) -> Option<(Position, usize)> {
    let mut cur_pos = origin.clone();
    let mut dir = first_dir;
    let mut len = 0;
    loop {
        if follow_slopes && !maze.can_leave(&cur_pos, dir) {
            return None;
        }

        let next_pos = cur_pos.neighbor(dir)?;
        let last_pos = std::mem::replace(&mut cur_pos, next_pos);
        len += 1;
        if cur_pos == *origin {
            return None;
        }
        if maze.is_junction(&cur_pos) {
            return Some((cur_pos, len));
        }

        (dir, _) = maze
            .open_steps(&cur_pos)
            .find(|(_, next_pos)| *next_pos != last_pos)?;
    }
}
