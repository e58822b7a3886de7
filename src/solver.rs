use std::collections::LinkedList;

use log::{debug, info};

use crate::{boundary::BoundaryDp, junction::JunctionGraph, maze::Maze, Error};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    pub peak_boundary_n: usize,
    pub peak_active_n: usize,
    pub contraction_n: usize,
}

impl SolveStats {
    fn observe(&mut self, dp: &BoundaryDp, active_n: usize) {
        self.peak_boundary_n = self.peak_boundary_n.max(dp.boundary_n());
        self.peak_active_n = self.peak_active_n.max(active_n);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub longest: Option<usize>,
    pub stats: SolveStats,
}

/// Only for graphs built without slopes; the boundary program can't follow
/// one-way corridors.
pub fn solve(graph: &JunctionGraph) -> Solution {
    debug_assert!(!graph.is_directed(), "boundary program needs an undirected graph");
    let vertex_n = graph.vertex_n();
    let mut dp = BoundaryDp::new(graph.start(), graph.end());
    let mut stats = SolveStats::default();
    let mut uncontracted_n: Vec<usize> = (0..vertex_n).map(|v| graph.degree(v)).collect();
    let mut discovered = vec![false; vertex_n];
    let mut known = vec![false; vertex_n];
    let mut active_n = 0;

    let mut search_queue = LinkedList::from([graph.start()]);
    discovered[graph.start()] = true;
    while let Some(cur) = search_queue.pop_front() {
        dp.activate(cur);
        known[cur] = true;
        active_n += 1;
        stats.observe(&dp, active_n);

        for corridor in graph.corridors(cur) {
            let next = corridor.to();
            if known[next] {
                dp.contract(cur, next, corridor.steps());
                stats.contraction_n += 1;
                stats.observe(&dp, active_n);

                for v in [cur, next] {
                    uncontracted_n[v] -= 1;
                    if uncontracted_n[v] == 0 {
                        dp.retire(v);
                        if !graph.is_terminal(v) {
                            active_n -= 1;
                        }
                    }
                }
            } else if !discovered[next] {
                discovered[next] = true;
                search_queue.push_back(next);
            }
        }
    }

    let longest = dp.longest();
    debug!(
        "Boundary program finished after {} contraction(s), at most {} boundaries over {} active vertices.",
        stats.contraction_n, stats.peak_boundary_n, stats.peak_active_n
    );
    match longest {
        Some(len) => info!("Longest simple path has {} step(s).", len),
        None => info!("No simple path joins start and end."),
    }

    Solution { longest, stats }
}

pub fn solve_maze(maze: &Maze) -> Result<Solution, Error> {
    let graph = JunctionGraph::from_maze(maze)?;
    Ok(solve(&graph))
}
