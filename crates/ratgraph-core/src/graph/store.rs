use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::{RatError, Result};

/// Directed graph stored as adjacency rows.
///
/// `vertices[i]` owns row `arcs[i]`; `positions` maps each label back to `i`.
/// Rows never hold the same successor twice. An edge is simply both arcs.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    vertices: Vec<V>,
    arcs: Vec<Vec<V>>,
    positions: HashMap<V, usize>,
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            arcs: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            arcs: Vec::with_capacity(vertex_count),
            positions: HashMap::with_capacity(vertex_count),
        }
    }

    /// Append a vertex with an empty row. Returns false if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.positions.contains_key(&vertex) {
            return false;
        }
        self.positions.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        self.arcs.push(Vec::new());
        true
    }

    /// Remove a vertex, its row, and every arc pointing at it.
    ///
    /// Later vertices shift down one position. Returns false if absent.
    pub fn remove_vertex<Q>(&mut self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let Some(index) = self.positions.remove(vertex) else {
            return false;
        };
        self.vertices.remove(index);
        self.arcs.remove(index);

        for position in self.positions.values_mut() {
            if *position > index {
                *position -= 1;
            }
        }
        for row in &mut self.arcs {
            row.retain(|successor| !is_label(successor, vertex));
        }
        true
    }

    /// Insert the arc `from -> to` if both vertices exist and the arc is new.
    pub fn add_arc<Q>(&mut self, from: &Q, to: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let (Some(&origin), Some(&target)) = (self.positions.get(from), self.positions.get(to))
        else {
            return false;
        };
        if self.arcs[origin].iter().any(|s| is_label(s, to)) {
            return false;
        }
        let successor = self.vertices[target].clone();
        self.arcs[origin].push(successor);
        true
    }

    /// Delete the arc `from -> to`. Returns false if it did not exist.
    pub fn remove_arc<Q>(&mut self, from: &Q, to: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        if !self.positions.contains_key(to) {
            return false;
        }
        let Some(&origin) = self.positions.get(from) else {
            return false;
        };
        let row = &mut self.arcs[origin];
        match row.iter().position(|s| is_label(s, to)) {
            Some(slot) => {
                row.remove(slot);
                true
            }
            None => false,
        }
    }

    /// Add both `a -> b` and `b -> a`.
    pub fn add_edge<Q>(&mut self, a: &Q, b: &Q)
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.add_arc(a, b);
        self.add_arc(b, a);
    }

    /// Remove both `a -> b` and `b -> a`.
    pub fn remove_edge<Q>(&mut self, a: &Q, b: &Q)
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.remove_arc(a, b);
        self.remove_arc(b, a);
    }

    /// Adjacency row of `vertex`, in arc insertion order.
    pub fn successors<Q>(&self, vertex: &Q) -> Result<&[V]>
    where
        V: Borrow<Q>,
        Q: Eq + Hash + fmt::Debug + ?Sized,
    {
        self.positions
            .get(vertex)
            .map(|&index| self.arcs[index].as_slice())
            .ok_or_else(|| RatError::not_found("vertex", format!("{:?}", vertex)))
    }

    /// Every vertex with an arc into `vertex`, in vertex order.
    ///
    /// Scans all rows; an absent vertex simply has no predecessors.
    pub fn predecessors<Q>(&self, vertex: &Q) -> Vec<V>
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.vertices
            .iter()
            .zip(&self.arcs)
            .filter(|(_, row)| row.iter().any(|s| is_label(s, vertex)))
            .map(|(v, _)| v.clone())
            .collect()
    }

    pub fn is_arc<Q>(&self, from: &Q, to: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.row(from).iter().any(|s| is_label(s, to))
    }

    pub fn is_edge<Q>(&self, a: &Q, b: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.is_arc(a, b) && self.is_arc(b, a)
    }

    /// True if every arc has its reverse arc.
    pub fn is_undirected(&self) -> bool {
        self.vertices.iter().zip(&self.arcs).all(|(origin, row)| {
            row.iter()
                .all(|successor| self.is_arc::<V>(successor, origin))
        })
    }

    pub fn contains<Q>(&self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.positions.contains_key(vertex)
    }

    /// Zero-based position of `vertex` in insertion order.
    pub fn position<Q>(&self, vertex: &Q) -> Option<usize>
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.positions.get(vertex).copied()
    }

    /// The stored label equal to `vertex`, if present.
    pub fn vertex<Q>(&self, vertex: &Q) -> Option<&V>
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.positions.get(vertex).map(|&index| &self.vertices[index])
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Vertices paired with their adjacency rows, in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = (&V, &[V])> {
        self.vertices
            .iter()
            .zip(self.arcs.iter().map(|row| row.as_slice()))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.iter().map(|row| row.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Row lookup that treats a missing vertex as having no successors.
    pub(crate) fn row<Q>(&self, vertex: &Q) -> &[V]
    where
        V: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.positions
            .get(vertex)
            .map(|&index| self.arcs[index].as_slice())
            .unwrap_or(&[])
    }
}

impl<V> Default for Graph<V>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Compare a stored label against a borrowed lookup key.
pub(crate) fn is_label<V, Q>(stored: &V, wanted: &Q) -> bool
where
    V: Borrow<Q>,
    Q: Eq + ?Sized,
{
    <V as Borrow<Q>>::borrow(stored) == wanted
}

fn write_list<V: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[V]) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}

impl<V> fmt::Display for Graph<V>
where
    V: Eq + Hash + Clone + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vertices: ")?;
        write_list(f, &self.vertices)?;
        write!(f, "\nEdges: ")?;
        for (vertex, row) in self.rows() {
            write!(f, "\nfrom {}: ", vertex)?;
            write_list(f, row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(labels: &[&str]) -> Graph<String> {
        let mut g = Graph::new();
        for label in labels {
            g.add_vertex(label.to_string());
        }
        g
    }

    fn bipartite() -> Graph<String> {
        let mut g = graph_of(&["A", "B", "C", "D", "E", "F"]);
        g.add_edge("A", "B");
        g.add_edge("A", "F");
        g.add_edge("C", "D");
        g.add_edge("C", "F");
        g.add_edge("E", "B");
        g
    }

    #[test]
    fn test_new_graph_is_empty() {
        let g: Graph<String> = Graph::new();
        assert!(g.is_empty());
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.arc_count(), 0);
        assert!(g.is_undirected());
    }

    #[test]
    fn test_with_capacity_starts_empty() {
        let mut g: Graph<String> = Graph::with_capacity(8);
        assert_eq!(g.vertex_count(), 0);
        assert!(g.add_vertex("A".to_string()));
        assert!(g.add_vertex("B".to_string()));
        g.add_edge("A", "B");
        assert_eq!(g.vertices(), &["A", "B"]);
        assert!(g.is_edge("A", "B"));
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut g = Graph::new();
        assert!(g.add_vertex("U1".to_string()));
        assert!(!g.add_vertex("U1".to_string()));
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn test_vertices_keep_insertion_order() {
        let g = graph_of(&["U9", "S1", "U2"]);
        assert_eq!(g.vertices(), &["U9", "S1", "U2"]);
        assert_eq!(g.position("S1"), Some(1));
    }

    #[test]
    fn test_add_arc_requires_both_vertices() {
        let mut g = graph_of(&["A"]);
        assert!(!g.add_arc("A", "B"));
        assert!(!g.add_arc("B", "A"));
        assert_eq!(g.arc_count(), 0);
    }

    #[test]
    fn test_add_arc_rejects_duplicates() {
        let mut g = graph_of(&["A", "B"]);
        assert!(g.add_arc("A", "B"));
        assert!(!g.add_arc("A", "B"));
        assert_eq!(g.successors("A").unwrap(), &["B"]);
    }

    #[test]
    fn test_edge_symmetry() {
        let mut g = graph_of(&["A", "B"]);
        g.add_edge("A", "B");
        assert!(g.is_arc("A", "B"));
        assert!(g.is_arc("B", "A"));
        assert!(g.is_edge("A", "B"));
        assert_eq!(g.arc_count(), 2);
    }

    #[test]
    fn test_single_arc_is_not_edge() {
        let mut g = graph_of(&["A", "B"]);
        g.add_arc("A", "B");
        assert!(!g.is_edge("A", "B"));
        assert!(!g.is_undirected());
    }

    #[test]
    fn test_successors_and_predecessors() {
        let g = bipartite();
        assert_eq!(g.successors("A").unwrap(), &["B", "F"]);
        assert_eq!(g.predecessors("B"), vec!["A", "E"]);
    }

    #[test]
    fn test_successors_of_missing_vertex_is_not_found() {
        let g = bipartite();
        let err = g.successors("Z").unwrap_err();
        assert!(matches!(err, RatError::NotFound { .. }));
    }

    #[test]
    fn test_predecessors_of_missing_vertex_is_empty() {
        let g = bipartite();
        assert!(g.predecessors("Z").is_empty());
    }

    #[test]
    fn test_remove_arc() {
        let mut g = bipartite();
        assert!(g.remove_arc("A", "B"));
        assert!(!g.remove_arc("A", "B"));
        assert!(!g.is_arc("A", "B"));
        assert!(g.is_arc("B", "A"));
    }

    #[test]
    fn test_remove_edge() {
        let mut g = bipartite();
        g.remove_edge("C", "F");
        assert!(!g.is_arc("C", "F"));
        assert!(!g.is_arc("F", "C"));
        assert!(g.is_undirected());
        assert_eq!(g.arc_count(), 8);
    }

    #[test]
    fn test_remove_vertex_realigns_rows() {
        let mut g = bipartite();
        assert!(g.remove_vertex("B"));
        assert!(!g.remove_vertex("B"));
        assert_eq!(g.vertices(), &["A", "C", "D", "E", "F"]);
        assert_eq!(g.position("C"), Some(1));
        assert_eq!(g.successors("C").unwrap(), &["D", "F"]);
        assert_eq!(g.successors("A").unwrap(), &["F"]);
        assert!(g.successors("E").unwrap().is_empty());
        assert!(g.is_undirected());
    }

    #[test]
    fn test_is_undirected_for_edge_built_graph() {
        assert!(bipartite().is_undirected());
    }

    #[test]
    fn test_generic_over_integers() {
        let mut g: Graph<u32> = Graph::new();
        g.add_vertex(1);
        g.add_vertex(2);
        g.add_edge(&1, &2);
        assert_eq!(g.successors(&1).unwrap(), &[2]);
        assert_eq!(g.predecessors(&1), vec![2]);
    }

    #[test]
    fn test_display() {
        let mut g = graph_of(&["A", "B"]);
        g.add_edge("A", "B");
        assert_eq!(
            g.to_string(),
            "Vertices: \n[A, B]\nEdges: \nfrom A: [B]\nfrom B: [A]"
        );
    }
}
