use super::*;
use std::collections::HashSet;

fn undirected(labels: &[&str], edges: &[(&str, &str)]) -> Graph<String> {
    let mut g = Graph::new();
    for label in labels {
        g.add_vertex(label.to_string());
    }
    for (a, b) in edges {
        g.add_edge(*a, *b);
    }
    g
}

/// Vertices A..F with edges A-B, A-F, C-D, C-F, E-B
fn bipartite() -> Graph<String> {
    undirected(
        &["A", "B", "C", "D", "E", "F"],
        &[("A", "B"), ("A", "F"), ("C", "D"), ("C", "F"), ("E", "B")],
    )
}

fn tree() -> Graph<String> {
    undirected(
        &["A", "B", "C", "D", "E"],
        &[("A", "B"), ("A", "C"), ("B", "D"), ("B", "E")],
    )
}

fn disconnected() -> Graph<String> {
    undirected(&["A", "B", "C"], &[("A", "B")])
}

fn triangle() -> Graph<String> {
    undirected(&["A", "B", "C"], &[("A", "B"), ("A", "C"), ("B", "C")])
}

fn make_chain(n: usize) -> Graph<String> {
    let labels: Vec<String> = (0..n).map(|i| format!("N{}", i)).collect();
    let mut g = Graph::new();
    for label in &labels {
        g.add_vertex(label.clone());
    }
    for pair in labels.windows(2) {
        g.add_edge(pair[0].as_str(), pair[1].as_str());
    }
    g
}

#[test]
fn test_bfs_bipartite_order() {
    let g = bipartite();
    assert_eq!(bfs(&g, "A").unwrap(), vec!["A", "B", "F", "E", "C", "D"]);
    assert_eq!(bfs(&g, "B").unwrap(), vec!["B", "A", "E", "F", "C", "D"]);
    assert_eq!(bfs(&g, "D").unwrap(), vec!["D", "C", "F", "A", "B", "E"]);
}

#[test]
fn test_dfs_bipartite_order() {
    let g = bipartite();
    assert_eq!(dfs(&g, "A").unwrap(), vec!["A", "B", "E", "F", "C", "D"]);
    assert_eq!(dfs(&g, "B").unwrap(), vec!["B", "A", "F", "C", "D", "E"]);
    assert_eq!(dfs(&g, "D").unwrap(), vec!["D", "C", "F", "A", "B", "E"]);
}

#[test]
fn test_tree_orders() {
    let g = tree();
    assert_eq!(bfs(&g, "A").unwrap(), vec!["A", "B", "C", "D", "E"]);
    assert_eq!(dfs(&g, "A").unwrap(), vec!["A", "B", "D", "E", "C"]);
}

#[test]
fn test_disconnected_graph() {
    let g = disconnected();
    assert_eq!(bfs(&g, "A").unwrap(), vec!["A", "B"]);
    assert_eq!(bfs(&g, "C").unwrap(), vec!["C"]);
    assert_eq!(dfs(&g, "A").unwrap(), vec!["A", "B"]);
    assert_eq!(dfs(&g, "C").unwrap(), vec!["C"]);
}

#[test]
fn test_cycle_no_infinite_loop() {
    let g = triangle();
    assert_eq!(bfs(&g, "A").unwrap(), vec!["A", "B", "C"]);
    assert_eq!(bfs(&g, "C").unwrap(), vec!["C", "A", "B"]);
    assert_eq!(dfs(&g, "A").unwrap(), vec!["A", "B", "C"]);
    assert_eq!(dfs(&g, "C").unwrap(), vec!["C", "A", "B"]);
}

#[test]
fn test_start_not_in_graph() {
    let g = bipartite();
    assert!(bfs(&g, "Z").unwrap().is_empty());
    assert!(dfs(&g, "Z").unwrap().is_empty());
    assert!(bfs_layers(&g, "Z").unwrap().is_empty());
}

#[test]
fn test_empty_graph() {
    let g: Graph<String> = Graph::new();
    assert!(bfs(&g, "A").unwrap().is_empty());
    assert!(dfs(&g, "A").unwrap().is_empty());
}

#[test]
fn test_bfs_and_dfs_visit_same_set() {
    for g in [bipartite(), tree(), triangle(), make_chain(12)] {
        for start in g.vertices() {
            let breadth = bfs(&g, start).unwrap();
            let depth = dfs(&g, start).unwrap();
            let breadth_set: HashSet<&String> = breadth.iter().collect();
            let depth_set: HashSet<&String> = depth.iter().collect();
            assert_eq!(breadth.len(), breadth_set.len(), "BFS repeated a vertex");
            assert_eq!(depth.len(), depth_set.len(), "DFS repeated a vertex");
            assert_eq!(breadth_set, depth_set);
            assert_eq!(breadth.len(), g.vertex_count());
        }
    }
}

#[test]
fn test_directed_arcs_limit_reach() {
    let mut g = Graph::new();
    for label in ["A", "B", "C"] {
        g.add_vertex(label.to_string());
    }
    g.add_arc("A", "B");
    g.add_arc("B", "C");
    assert_eq!(bfs(&g, "A").unwrap(), vec!["A", "B", "C"]);
    assert_eq!(bfs(&g, "C").unwrap(), vec!["C"]);
    assert_eq!(dfs(&g, "B").unwrap(), vec!["B", "C"]);
}

#[test]
fn test_bfs_find_tree() {
    let g = tree();
    assert_eq!(bfs_find(&g, "A", "C").unwrap(), vec!["A", "B", "C"]);
}

#[test]
fn test_bfs_find_counts_dequeued_not_hops() {
    // D is two hops from A but four vertices are dequeued before it
    let g = tree();
    assert_eq!(bfs_find(&g, "A", "D").unwrap(), vec!["A", "B", "C", "D"]);
    assert_eq!(shortest_hops(&g, "A", "D").unwrap(), Some(2));
}

#[test]
fn test_bfs_find_same_vertex_is_empty() {
    let g = bipartite();
    for v in g.vertices() {
        assert!(bfs_find(&g, v, v).unwrap().is_empty());
    }
}

#[test]
fn test_bfs_find_missing_origin_is_empty() {
    let g = bipartite();
    assert!(bfs_find(&g, "Z", "A").unwrap().is_empty());
}

#[test]
fn test_bfs_find_unreachable_returns_component() {
    let g = disconnected();
    assert_eq!(bfs_find(&g, "A", "C").unwrap(), vec!["A", "B"]);
    assert_eq!(bfs_find(&g, "A", "missing").unwrap(), vec!["A", "B"]);
}

#[test]
fn test_bfs_layers_depths() {
    let g = tree();
    let layers = bfs_layers(&g, "A").unwrap();
    let depths: Vec<(&str, usize)> = layers.iter().map(|(v, d)| (v.as_str(), *d)).collect();
    assert_eq!(
        depths,
        vec![("A", 0), ("B", 1), ("C", 1), ("D", 2), ("E", 2)]
    );
}

#[test]
fn test_shortest_hops_chain() {
    let g = make_chain(6);
    assert_eq!(shortest_hops(&g, "N0", "N5").unwrap(), Some(5));
    assert_eq!(shortest_hops(&g, "N5", "N0").unwrap(), Some(5));
    assert_eq!(shortest_hops(&g, "N2", "N2").unwrap(), Some(0));
}

#[test]
fn test_shortest_hops_unreachable_or_missing() {
    let g = disconnected();
    assert_eq!(shortest_hops(&g, "A", "C").unwrap(), None);
    assert_eq!(shortest_hops(&g, "A", "Z").unwrap(), None);
    assert_eq!(shortest_hops(&g, "Z", "A").unwrap(), None);
}

#[test]
fn test_deep_chain_dfs_does_not_overflow() {
    let g = make_chain(20_000);
    let order = dfs(&g, "N0").unwrap();
    assert_eq!(order.len(), 20_000);
    assert_eq!(order.last().map(String::as_str), Some("N19999"));
}
