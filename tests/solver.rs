use longest_trail::{exhaustive_longest, parse_maze, solve, solve_maze, JunctionGraph};

fn longest_of(text: &str) -> Option<usize> {
    let maze = parse_maze(text).unwrap();
    solve_maze(&maze).unwrap().longest
}

#[test]
fn single_corridor_gives_its_length() {
    assert_eq!(longest_of(include_str!("inputs/single_corridor.txt")), Some(6));
}

#[test]
fn winding_corridor_gives_eight() {
    assert_eq!(longest_of(include_str!("inputs/winding.txt")), Some(8));
}

#[test]
fn dead_end_changes_nothing() {
    assert_eq!(
        longest_of(include_str!("inputs/winding_dead_end.txt")),
        longest_of(include_str!("inputs/winding.txt"))
    );
}

#[test]
fn parallel_corridors_use_only_the_longer() {
    // One step into the upper junction, 11 through the longer side, one step out.
    assert_eq!(longest_of(include_str!("inputs/parallel.txt")), Some(1 + 11 + 1));
}

#[test]
fn ladder_chains_both_sides() {
    // Down one side, across the rung and down the other side.
    assert_eq!(longest_of(include_str!("inputs/ladder.txt")), Some(1 + 6 + 6 + 4 + 1));
}

#[test]
fn loop_back_into_junction_is_ignored() {
    assert_eq!(longest_of(include_str!("inputs/self_loop.txt")), Some(7));
}

#[test]
fn sample_gives_154() {
    assert_eq!(longest_of(include_str!("inputs/sample.txt")), Some(154));
}

#[test]
fn sample_with_slopes_gives_94() {
    let maze = parse_maze(include_str!("inputs/sample.txt")).unwrap();
    let graph = JunctionGraph::from_maze_with_slopes(&maze);

    assert_eq!(exhaustive_longest(&graph), Some(94));
}

#[test]
fn no_path_gives_none() {
    assert_eq!(longest_of(include_str!("inputs/no_path.txt")), None);
}

#[test]
fn adjacent_openings() {
    assert_eq!(longest_of("#.#\n#.#\n"), Some(1));
}

#[test]
fn exhaustive_search_agrees_on_fixtures() {
    for text in [
        include_str!("inputs/single_corridor.txt"),
        include_str!("inputs/winding.txt"),
        include_str!("inputs/winding_dead_end.txt"),
        include_str!("inputs/parallel.txt"),
        include_str!("inputs/ladder.txt"),
        include_str!("inputs/self_loop.txt"),
        include_str!("inputs/no_path.txt"),
        include_str!("inputs/sample.txt"),
    ] {
        let maze = parse_maze(text).unwrap();
        let graph = JunctionGraph::from_maze(&maze).unwrap();
        assert_eq!(solve(&graph).longest, exhaustive_longest(&graph));
    }
}

#[test]
fn stats_cover_every_corridor() {
    let maze = parse_maze(include_str!("inputs/sample.txt")).unwrap();
    let graph = JunctionGraph::from_maze(&maze).unwrap();
    let solution = solve(&graph);

    assert_eq!(solution.stats.contraction_n, graph.corridor_n());
    assert!(solution.stats.peak_active_n >= 2);
    assert!(solution.stats.peak_active_n <= graph.vertex_n());
    assert!(solution.stats.peak_boundary_n >= 2);
}
