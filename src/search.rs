use crate::{boundary::VertexId, junction::JunctionGraph};

// Exponential in the number of junctions.
pub fn exhaustive_longest(graph: &JunctionGraph) -> Option<usize> {
    let mut visited = vec![false; graph.vertex_n()];
    search_from(graph, graph.start(), 0, &mut visited)
}

fn search_from(
    graph: &JunctionGraph,
    cur: VertexId,
    len: usize,
    visited: &mut [bool],
) -> Option<usize> {
    if cur == graph.end() {
        return Some(len);
    }

    visited[cur] = true;
    let mut longest = None;
    for corridor in graph.corridors(cur) {
        if visited[corridor.to()] {
            continue;
        }

        let found = search_from(graph, corridor.to(), len + corridor.steps(), visited);
        longest = longest.max(found);
    }
    visited[cur] = false;

    longest
}
