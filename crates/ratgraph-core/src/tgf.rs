//! Trivial Graph Format export and re-import
//!
//! ```text
//! 1 U101
//! 2 500
//! #
//! 1 2
//! 2 1
//! ```
//!
//! Vertex lines carry a 1-based index and the label (which may contain
//! spaces). After the `#` separator every directed arc is one line of
//! origin and destination indices.

use std::collections::HashMap;
use std::fmt::Display;
use std::fs::File;
use std::hash::Hash;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{RatError, Result};
use crate::graph::{Graph, InteractionGraph};

const SEPARATOR: &str = "#";

/// Write `graph` in export format.
pub fn write<V, W>(graph: &Graph<V>, mut out: W) -> Result<()>
where
    V: Eq + Hash + Clone + Display,
    W: Write,
{
    for (index, vertex) in graph.vertices().iter().enumerate() {
        writeln!(out, "{} {}", index + 1, vertex)?;
    }
    writeln!(out, "{}", SEPARATOR)?;
    for (from, row) in graph.rows() {
        let Some(origin) = graph.position(from) else {
            continue;
        };
        for to in row {
            if let Some(destination) = graph.position(to) {
                writeln!(out, "{} {}", origin + 1, destination + 1)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Parse an export back into a graph.
pub fn read<R: BufRead>(reader: R) -> Result<InteractionGraph> {
    let mut graph = InteractionGraph::new();
    let mut labels: HashMap<usize, String> = HashMap::new();
    let mut in_arcs = false;
    let mut last_line = 0;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        last_line = line_number;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !in_arcs && trimmed == SEPARATOR {
            in_arcs = true;
            continue;
        }

        if in_arcs {
            let (origin, destination) = parse_arc(trimmed, line_number, &labels)?;
            graph.add_arc(origin, destination);
        } else {
            let (vertex_index, label) = parse_vertex(trimmed, line_number)?;
            if labels.contains_key(&vertex_index) {
                return Err(invalid(line_number, format!("duplicate index {}", vertex_index)));
            }
            if !graph.add_vertex(label.to_string()) {
                return Err(invalid(line_number, format!("duplicate label '{}'", label)));
            }
            labels.insert(vertex_index, label.to_string());
        }
    }

    if !in_arcs {
        return Err(invalid(last_line, "missing '#' separator"));
    }
    Ok(graph)
}

fn invalid(line: usize, reason: impl Into<String>) -> RatError {
    RatError::InvalidTgf {
        line,
        reason: reason.into(),
    }
}

fn parse_index(token: &str, line_number: usize) -> Result<usize> {
    match token.parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(invalid(line_number, format!("bad index '{}'", token))),
    }
}

fn parse_vertex(line: &str, line_number: usize) -> Result<(usize, &str)> {
    let (index, label) = line
        .split_once(char::is_whitespace)
        .ok_or_else(|| invalid(line_number, "expected '<index> <label>'"))?;
    let label = label.trim();
    if label.is_empty() {
        return Err(invalid(line_number, "empty label"));
    }
    Ok((parse_index(index, line_number)?, label))
}

fn parse_arc<'a>(
    line: &str,
    line_number: usize,
    labels: &'a HashMap<usize, String>,
) -> Result<(&'a str, &'a str)> {
    let mut fields = line.split_whitespace();
    let (Some(origin), Some(destination), None) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(invalid(line_number, "expected '<origin> <destination>'"));
    };

    let lookup = move |token: &str| -> Result<&'a str> {
        let index = parse_index(token, line_number)?;
        labels
            .get(&index)
            .map(String::as_str)
            .ok_or_else(|| invalid(line_number, format!("unknown vertex index {}", index)))
    };
    Ok((lookup(origin)?, lookup(destination)?))
}

/// Export `graph` to a file.
pub fn save<V>(graph: &Graph<V>, path: &Path) -> Result<()>
where
    V: Eq + Hash + Clone + Display,
{
    let file = File::create(path).map_err(|e| RatError::io_operation("create", path.display(), e))?;
    write(graph, BufWriter::new(file))?;
    info!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        arcs = graph.arc_count(),
        "exported graph"
    );
    Ok(())
}

/// Re-import an export file.
pub fn load(path: &Path) -> Result<InteractionGraph> {
    let file = File::open(path).map_err(|e| RatError::io_operation("open", path.display(), e))?;
    let graph = read(BufReader::new(file))?;
    info!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        arcs = graph.arc_count(),
        "imported graph"
    );
    Ok(graph)
}
