//! Leaderboards, connectivity and centrality over an interaction graph
//!
//! Vertex class is derived from the label: a label whose first character is
//! `U` or `u` is a user, anything else is a story.

pub mod centrality;
pub mod connectivity;
pub mod leaderboard;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::RatError;
use crate::graph::InteractionGraph;

pub use centrality::{distance_sum, most_central, DistanceMetric};
pub use connectivity::most_connected;
pub use leaderboard::{degree_leaderboard, LeaderboardEntry};

/// The two sides of the bipartite graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexClass {
    User,
    Story,
}

impl VertexClass {
    /// Classify a label by its first character.
    pub fn of(label: &str) -> Self {
        match label.chars().next() {
            Some(c) if c.eq_ignore_ascii_case(&'U') => VertexClass::User,
            _ => VertexClass::Story,
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            VertexClass::User => "users",
            VertexClass::Story => "stories",
        }
    }
}

impl FromStr for VertexClass {
    type Err = RatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" | "users" => Ok(VertexClass::User),
            "story" | "stories" => Ok(VertexClass::Story),
            other => Err(RatError::invalid_value("vertex class", other)),
        }
    }
}

impl fmt::Display for VertexClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexClass::User => write!(f, "user"),
            VertexClass::Story => write!(f, "story"),
        }
    }
}

/// Vertices of one class, in graph insertion order.
pub fn members(graph: &InteractionGraph, class: VertexClass) -> Vec<&String> {
    graph
        .vertices()
        .iter()
        .filter(|v| VertexClass::of(v) == class)
        .collect()
}

pub fn users(graph: &InteractionGraph) -> Vec<&String> {
    members(graph, VertexClass::User)
}

pub fn stories(graph: &InteractionGraph) -> Vec<&String> {
    members(graph, VertexClass::Story)
}

/// A vertex together with the score a scan assigned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredVertex {
    pub vertex: String,
    pub score: usize,
}

/// Which way a scan compares a candidate against the retained best.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retain {
    /// Keep the candidate when `score >= best`
    AtLeast,
    /// Keep the candidate when `score <= best`
    AtMost,
}

/// Result of scanning every vertex of a class.
///
/// Ties replace the retained vertex, so among equal scores the last one
/// scanned wins. `improvements` lists each replacement in scan order and
/// ends with `best`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanOutcome {
    pub best: Option<ScoredVertex>,
    pub improvements: Vec<ScoredVertex>,
}

impl ScanOutcome {
    pub fn offer(&mut self, vertex: &str, score: usize, rule: Retain) {
        let replaces = match (&self.best, rule) {
            (None, _) => true,
            (Some(best), Retain::AtLeast) => score >= best.score,
            (Some(best), Retain::AtMost) => score <= best.score,
        };
        if replaces {
            let scored = ScoredVertex {
                vertex: vertex.to_string(),
                score,
            };
            self.improvements.push(scored.clone());
            self.best = Some(scored);
        }
    }
}
