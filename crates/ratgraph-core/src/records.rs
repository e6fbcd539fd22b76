//! Interaction record parsing and graph construction
//!
//! Input is line oriented. The first line is a header and is discarded.
//! Every other line tokenizes on runs of commas and whitespace into:
//!
//! ```text
//! user_id, tweet_count, story_count, story_id*
//! ```
//!
//! Brackets and quotes around story ids are stripped, so a story list
//! written as `"[101, 202]"` reads the same as `101,202`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Instant;

use regex::Regex;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{RatError, Result};
use crate::graph::InteractionGraph;
use crate::trace_time;

static FIELD_SEPARATOR: OnceLock<Regex> = OnceLock::new();

fn get_field_separator() -> Result<&'static Regex> {
    if let Some(re) = FIELD_SEPARATOR.get() {
        return Ok(re);
    }
    let re = Regex::new(r"[,\s]+")
        .map_err(|e| RatError::Other(format!("failed to compile field separator: {}", e)))?;
    Ok(FIELD_SEPARATOR.get_or_init(|| re))
}

/// One user's line from the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionRecord {
    pub user_id: String,
    pub tweet_count: u64,
    pub story_count: u64,
    pub stories: Vec<String>,
}

impl InteractionRecord {
    /// Vertex label for this record's user.
    pub fn user_label(&self) -> String {
        format!("U{}", self.user_id)
    }
}

/// Parse every record after the header. Blank lines are skipped.
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<InteractionRecord>> {
    let separator = get_field_separator()?;
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        records.push(parse_line(separator, trimmed, index + 1)?);
    }

    Ok(records)
}

fn parse_line(separator: &Regex, line: &str, line_number: usize) -> Result<InteractionRecord> {
    let tokens: Vec<&str> = separator
        .split(line)
        .map(|token| token.trim_matches(|c| matches!(c, '[' | ']' | '"' | '\'')))
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.len() < 3 {
        return Err(RatError::InvalidRecord {
            line: line_number,
            reason: format!(
                "expected user id, tweet count and story count, found {} field(s)",
                tokens.len()
            ),
        });
    }

    let tweet_count = parse_count(tokens[1], "tweet count", line_number)?;
    let story_count = parse_count(tokens[2], "story count", line_number)?;
    let stories: Vec<String> = tokens[3..].iter().map(|s| s.to_string()).collect();

    if stories.len() as u64 != story_count {
        warn!(
            line = line_number,
            user = tokens[0],
            declared = story_count,
            actual = stories.len(),
            "story count does not match listed stories"
        );
    }

    Ok(InteractionRecord {
        user_id: tokens[0].to_string(),
        tweet_count,
        story_count,
        stories,
    })
}

fn parse_count(token: &str, field: &str, line_number: usize) -> Result<u64> {
    token.parse().map_err(|_| RatError::InvalidRecord {
        line: line_number,
        reason: format!("{} is not a number: {}", field, token),
    })
}

/// Build an undirected bipartite graph: one vertex per user and story, one
/// edge per (user, story) pair.
pub fn build_graph(records: &[InteractionRecord]) -> InteractionGraph {
    // Upper bound: stories shared between users are counted once per record
    let capacity = records.iter().map(|r| 1 + r.stories.len()).sum();
    let mut graph = InteractionGraph::with_capacity(capacity);
    for record in records {
        let user = record.user_label();
        graph.add_vertex(user.clone());
        for story in &record.stories {
            graph.add_vertex(story.clone());
            graph.add_edge(user.as_str(), story.as_str());
        }
    }
    graph
}

/// Read a record file and build its graph.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_graph(path: &Path) -> Result<InteractionGraph> {
    let start = Instant::now();
    let file = File::open(path).map_err(|e| RatError::io_operation("open", path.display(), e))?;
    let records = parse_records(BufReader::new(file))?;
    let graph = build_graph(&records);

    info!(
        records = records.len(),
        vertices = graph.vertex_count(),
        arcs = graph.arc_count(),
        "loaded interaction graph"
    );
    trace_time!(start, "load_graph");
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    const SAMPLE: &str = "\
user_id,tweet_count,story_count,stories
101,12,2,500,600
102,3,1,600

103 40 2 700 500
";

    #[test]
    fn test_parse_skips_header_and_blank_lines() {
        let records = parse_records(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0],
            InteractionRecord {
                user_id: "101".to_string(),
                tweet_count: 12,
                story_count: 2,
                stories: vec!["500".to_string(), "600".to_string()],
            }
        );
        assert_eq!(records[2].stories, vec!["700", "500"]);
    }

    #[test]
    fn test_bracketed_story_list() {
        let input = "header\n7,1,2,\"[11, 22]\"\n";
        let records = parse_records(Cursor::new(input)).unwrap();
        assert_eq!(records[0].stories, vec!["11", "22"]);
    }

    #[test]
    fn test_short_record_is_error() {
        let err = parse_records(Cursor::new("header\n101,12\n")).unwrap_err();
        assert!(matches!(err, RatError::InvalidRecord { line: 2, .. }));
    }

    #[test]
    fn test_non_numeric_count_is_error() {
        let err = parse_records(Cursor::new("header\n101,many,1,500\n")).unwrap_err();
        match err {
            RatError::InvalidRecord { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("tweet count"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_count_mismatch_is_not_fatal() {
        let records = parse_records(Cursor::new("header\n101,1,5,500\n")).unwrap();
        assert_eq!(records[0].stories.len(), 1);
    }

    #[test]
    fn test_header_only_is_empty() {
        assert!(parse_records(Cursor::new("header\n")).unwrap().is_empty());
        assert!(parse_records(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn test_build_graph() {
        let records = parse_records(Cursor::new(SAMPLE)).unwrap();
        let graph = build_graph(&records);

        assert_eq!(
            graph.vertices(),
            &["U101", "500", "600", "U102", "U103", "700"]
        );
        // Five user-story edges, each stored as two arcs
        assert_eq!(graph.arc_count(), 10);
        assert!(graph.is_undirected());
        assert!(graph.is_edge("U103", "500"));
        assert_eq!(graph.successors("600").unwrap(), &["U101", "U102"]);
    }

    #[test]
    fn test_repeated_story_on_one_line() {
        let records = parse_records(Cursor::new("header\n1,1,2,9,9\n")).unwrap();
        let graph = build_graph(&records);
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.arc_count(), 2);
    }

    #[test]
    fn test_load_graph_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.csv");
        fs::write(&path, SAMPLE).unwrap();

        let graph = load_graph(&path).unwrap();
        assert_eq!(graph.vertex_count(), 6);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_graph(&dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, RatError::FailedOperationWithTarget { .. }));
    }
}
