//! CLI commands for ratgraph

pub mod central;
pub mod connected;
pub mod dispatch;
pub mod export;
pub mod find;
pub mod leaderboard;
pub mod neighbors;
pub mod show;
pub mod summary;
pub mod title;
pub mod traverse;

use serde::Serialize;

use ratgraph_core::analytics::{ScanOutcome, ScoredVertex, VertexClass};
use ratgraph_core::error::Result;
use ratgraph_core::format::to_json_string;
use ratgraph_core::titles::TitleLookup;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", to_json_string(value)?);
    Ok(())
}

/// A vertex as rendered in command output; stories carry their title.
#[derive(Debug, Clone, Serialize)]
pub struct VertexView {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl VertexView {
    pub fn new(vertex: &str, titles: &dyn TitleLookup) -> Self {
        let title = match VertexClass::of(vertex) {
            VertexClass::Story => Some(titles.title(vertex)),
            VertexClass::User => None,
        };
        Self {
            id: vertex.to_string(),
            title,
        }
    }

    /// `id` or `id: title`
    pub fn label(&self) -> String {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => format!("{}: {}", self.id, title),
            _ => self.id.clone(),
        }
    }
}

/// A scored scan step with its vertex rendered.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredView {
    #[serde(flatten)]
    pub vertex: VertexView,
    pub score: usize,
}

impl ScoredView {
    fn new(scored: &ScoredVertex, titles: &dyn TitleLookup) -> Self {
        Self {
            vertex: VertexView::new(&scored.vertex, titles),
            score: scored.score,
        }
    }
}

/// Rendered outcome of a connectivity or centrality scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanView {
    pub class: VertexClass,
    pub best: Option<ScoredView>,
    pub improvements: Vec<ScoredView>,
}

impl ScanView {
    pub fn new(class: VertexClass, scan: &ScanOutcome, titles: &dyn TitleLookup) -> Self {
        Self {
            class,
            best: scan.best.as_ref().map(|b| ScoredView::new(b, titles)),
            improvements: scan
                .improvements
                .iter()
                .map(|s| ScoredView::new(s, titles))
                .collect(),
        }
    }
}
