use ratgraph_core::analytics::{DistanceMetric, VertexClass};
use ratgraph_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse vertex class ("users" or "stories") from string
pub fn parse_vertex_class(s: &str) -> std::result::Result<VertexClass, String> {
    s.parse::<VertexClass>().map_err(|e| e.to_string())
}

/// Parse centrality distance metric from string
pub fn parse_distance(s: &str) -> std::result::Result<DistanceMetric, String> {
    s.parse::<DistanceMetric>().map_err(|e| e.to_string())
}
