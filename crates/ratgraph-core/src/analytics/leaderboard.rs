use std::collections::HashMap;

use serde::Serialize;

use super::{members, VertexClass};
use crate::error::{RatError, Result};
use crate::graph::InteractionGraph;
use crate::ranking::sort_descending;

/// One rank of a degree leaderboard: every vertex tied at `score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub score: usize,
    pub vertices: Vec<String>,
}

/// Rank the vertices of `class` by successor count.
///
/// Vertices sharing a score form one entry, listed in the order they were
/// first encountered. Only the `top` highest distinct scores are returned;
/// asking for more ranks than there are distinct scores is an
/// [`RatError::IndexOutOfRange`].
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn degree_leaderboard(
    graph: &InteractionGraph,
    class: VertexClass,
    top: usize,
) -> Result<Vec<LeaderboardEntry>> {
    let mut buckets: HashMap<usize, Vec<String>> = HashMap::new();
    let mut distinct = Vec::new();

    for vertex in members(graph, class) {
        let score = graph.successors(vertex.as_str())?.len();
        let bucket = buckets.entry(score).or_insert_with(|| {
            distinct.push(score);
            Vec::new()
        });
        bucket.push(vertex.clone());
    }

    if top > distinct.len() {
        return Err(RatError::IndexOutOfRange {
            requested: top,
            available: distinct.len(),
        });
    }

    let ranked = sort_descending(distinct);
    let mut entries = Vec::with_capacity(top);
    for (index, score) in ranked.into_iter().take(top).enumerate() {
        let vertices = buckets.remove(&score).unwrap_or_default();
        entries.push(LeaderboardEntry {
            rank: index + 1,
            score,
            vertices,
        });
    }

    tracing::debug!(class = %class, ranks = entries.len(), "built leaderboard");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InteractionGraph {
        // U1 and U3 each touch two stories, U2 touches three
        let mut g = InteractionGraph::new();
        let records: [(&str, &[&str]); 3] = [
            ("U1", &["10", "20"]),
            ("U2", &["10", "20", "30"]),
            ("U3", &["20", "40"]),
        ];
        for (user, stories) in records {
            g.add_vertex(user.to_string());
            for story in stories {
                g.add_vertex(story.to_string());
                g.add_edge(user, *story);
            }
        }
        g
    }

    #[test]
    fn test_user_leaderboard_groups_ties() {
        let board = degree_leaderboard(&sample(), VertexClass::User, 2).unwrap();
        assert_eq!(
            board,
            vec![
                LeaderboardEntry {
                    rank: 1,
                    score: 3,
                    vertices: vec!["U2".to_string()],
                },
                LeaderboardEntry {
                    rank: 2,
                    score: 2,
                    vertices: vec!["U1".to_string(), "U3".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_story_leaderboard() {
        let board = degree_leaderboard(&sample(), VertexClass::Story, 3).unwrap();
        let shape: Vec<(usize, usize, Vec<&str>)> = board
            .iter()
            .map(|e| (e.rank, e.score, e.vertices.iter().map(String::as_str).collect()))
            .collect();
        assert_eq!(
            shape,
            vec![
                (1, 3, vec!["20"]),
                (2, 2, vec!["10"]),
                (3, 1, vec!["30", "40"]),
            ]
        );
    }

    #[test]
    fn test_top_beyond_distinct_scores_is_error() {
        let err = degree_leaderboard(&sample(), VertexClass::User, 3).unwrap_err();
        assert!(matches!(
            err,
            RatError::IndexOutOfRange {
                requested: 3,
                available: 2
            }
        ));
    }

    #[test]
    fn test_zero_top_is_empty() {
        assert!(degree_leaderboard(&sample(), VertexClass::User, 0)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_empty_class() {
        let g = InteractionGraph::new();
        assert!(degree_leaderboard(&g, VertexClass::Story, 0).unwrap().is_empty());
        assert!(degree_leaderboard(&g, VertexClass::Story, 1).is_err());
    }
}
