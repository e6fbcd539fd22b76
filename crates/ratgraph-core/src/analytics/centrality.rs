use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{members, Retain, ScanOutcome, VertexClass};
use crate::error::{RatError, Result};
use crate::graph::{bfs_find, bfs_layers, InteractionGraph};

/// How the distance from a candidate to every other vertex is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistanceMetric {
    /// Length of `bfs_find`: vertices dequeued before the target is reached.
    /// An unreachable target counts the whole component.
    #[default]
    DequeueCount,
    /// True breadth-first hop count. An unreachable target adds the vertex
    /// count, which exceeds any real hop distance, so isolated vertices rank last.
    Hops,
}

impl FromStr for DistanceMetric {
    type Err = RatError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dequeue-count" => Ok(DistanceMetric::DequeueCount),
            "hops" => Ok(DistanceMetric::Hops),
            other => Err(RatError::invalid_value("distance metric", other)),
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceMetric::DequeueCount => write!(f, "dequeue-count"),
            DistanceMetric::Hops => write!(f, "hops"),
        }
    }
}

/// Sum of distances from `vertex` to every vertex in the graph.
pub fn distance_sum(graph: &InteractionGraph, vertex: &str, metric: DistanceMetric) -> Result<usize> {
    match metric {
        DistanceMetric::DequeueCount => {
            let mut total = 0;
            for target in graph.vertices() {
                total += bfs_find(graph, vertex, target.as_str())?.len();
            }
            Ok(total)
        }
        DistanceMetric::Hops => {
            let layers = bfs_layers(graph, vertex)?;
            let reached: usize = layers.iter().map(|(_, depth)| depth).sum();
            let unreachable = graph.vertex_count().saturating_sub(layers.len());
            Ok(reached + unreachable * graph.vertex_count())
        }
    }
}

/// Scan `class` for the vertex with the smallest distance sum.
///
/// Equal sums replace the retained vertex, so the last minimum in vertex
/// order wins.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn most_central(
    graph: &InteractionGraph,
    class: VertexClass,
    metric: DistanceMetric,
) -> Result<ScanOutcome> {
    let mut scan = ScanOutcome::default();
    for vertex in members(graph, class) {
        let sum = distance_sum(graph, vertex, metric)?;
        tracing::trace!(vertex = %vertex, sum, "distance sum");
        scan.offer(vertex, sum, Retain::AtMost);
    }
    Ok(scan)
}
