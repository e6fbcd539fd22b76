use super::{members, Retain, ScanOutcome, VertexClass};
use crate::error::Result;
use crate::graph::{dfs, InteractionGraph};

/// Scan `class` for the vertex whose depth-first reach is largest.
///
/// Each vertex is scored by the length of `dfs` from it. Equal scores
/// replace the retained vertex, so the last maximum in vertex order wins.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn most_connected(graph: &InteractionGraph, class: VertexClass) -> Result<ScanOutcome> {
    let mut scan = ScanOutcome::default();
    for vertex in members(graph, class) {
        let reach = dfs(graph, vertex.as_str())?.len();
        scan.offer(vertex, reach, Retain::AtLeast);
    }
    Ok(scan)
}
