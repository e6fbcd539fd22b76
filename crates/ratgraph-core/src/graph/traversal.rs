//! Breadth-first and depth-first traversal over a [`Graph`]
//!
//! Every traversal keeps three pieces of state: a frontier (queue or stack),
//! a visited set, and the visit order it returns. Directionality is whatever
//! the arcs encode; graphs built with `add_edge` traverse as undirected.
//!
//! A start vertex that is not in the graph yields an empty sequence rather
//! than an error. Frontier misuse (`EmptyCollection`) does propagate.

#[cfg(test)]
mod tests;

use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

use crate::collections::{CircularQueue, Stack};
use crate::error::Result;
use crate::graph::store::{is_label, Graph};

/// Breadth-first visit order from `start`.
///
/// Successors are marked visited when enqueued, and a vertex joins the
/// output when it is dequeued, so vertices appear in non-decreasing hop order.
pub fn bfs<V, Q>(graph: &Graph<V>, start: &Q) -> Result<Vec<V>>
where
    V: Eq + Hash + Clone + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    let Some(start) = graph.vertex(start) else {
        return Ok(Vec::new());
    };
    breadth_first(graph, start, |_| false)
}

/// Breadth-first expansion from `origin` that halts once `destination`
/// has been dequeued.
///
/// The result holds every vertex dequeued up to and including `destination`,
/// so its length counts processed vertices and is not a hop distance. When
/// `destination` is unreachable the whole component is returned. An absent
/// `origin`, or `origin == destination`, yields an empty sequence.
pub fn bfs_find<V, Q>(graph: &Graph<V>, origin: &Q, destination: &Q) -> Result<Vec<V>>
where
    V: Eq + Hash + Clone + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    let Some(origin_vertex) = graph.vertex(origin) else {
        return Ok(Vec::new());
    };
    if origin == destination {
        return Ok(Vec::new());
    }
    breadth_first(graph, origin_vertex, |dequeued| is_label(dequeued, destination))
}

/// Depth-first pre-order from `start`.
///
/// The top of the stack advances to its first unvisited successor in row
/// order; a vertex with none left is popped.
pub fn dfs<V, Q>(graph: &Graph<V>, start: &Q) -> Result<Vec<V>>
where
    V: Eq + Hash + Clone + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    let Some(start) = graph.vertex(start) else {
        return Ok(Vec::new());
    };

    // Each frame remembers how far along its row the scan has got. Visited
    // only grows, so resuming there finds the same successor a rescan would.
    let mut frontier: Stack<(&V, usize)> = Stack::new();
    let mut visited: HashSet<&V> = HashSet::new();
    let mut order = Vec::new();

    frontier.push((start, 0));
    visited.insert(start);
    order.push(start.clone());

    while !frontier.is_empty() {
        let (current, cursor) = *frontier.peek()?;
        let row = graph.row::<V>(current);
        let next = row[cursor..]
            .iter()
            .enumerate()
            .find(|(_, successor)| !visited.contains(successor));

        match next {
            Some((offset, successor)) => {
                frontier.pop()?;
                frontier.push((current, cursor + offset + 1));
                visited.insert(successor);
                order.push(successor.clone());
                frontier.push((successor, 0));
            }
            None => {
                frontier.pop()?;
            }
        }
    }

    Ok(order)
}

/// Breadth-first visit order paired with each vertex's hop distance from `start`.
pub fn bfs_layers<V, Q>(graph: &Graph<V>, start: &Q) -> Result<Vec<(V, usize)>>
where
    V: Eq + Hash + Clone + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    let Some(start) = graph.vertex(start) else {
        return Ok(Vec::new());
    };

    let mut frontier = CircularQueue::new();
    let mut visited: HashSet<&V> = HashSet::new();
    let mut layers = Vec::new();

    frontier.enqueue((start, 0usize));
    visited.insert(start);

    while !frontier.is_empty() {
        let (current, depth) = frontier.dequeue()?;
        for successor in graph.row::<V>(current) {
            if visited.insert(successor) {
                frontier.enqueue((successor, depth + 1));
            }
        }
        layers.push((current.clone(), depth));
    }

    Ok(layers)
}

/// Hop count of a shortest path from `origin` to `destination`.
///
/// `Some(0)` when they are the same vertex, `None` when either is absent or
/// `destination` is unreachable.
pub fn shortest_hops<V, Q>(graph: &Graph<V>, origin: &Q, destination: &Q) -> Result<Option<usize>>
where
    V: Eq + Hash + Clone + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    let (Some(origin), true) = (graph.vertex(origin), graph.contains(destination)) else {
        return Ok(None);
    };
    if is_label(origin, destination) {
        return Ok(Some(0));
    }

    let mut frontier = CircularQueue::new();
    let mut visited: HashSet<&V> = HashSet::new();

    frontier.enqueue((origin, 0usize));
    visited.insert(origin);

    while !frontier.is_empty() {
        let (current, depth) = frontier.dequeue()?;
        for successor in graph.row::<V>(current) {
            if is_label(successor, destination) {
                return Ok(Some(depth + 1));
            }
            if visited.insert(successor) {
                frontier.enqueue((successor, depth + 1));
            }
        }
    }

    Ok(None)
}

/// Shared BFS loop. `stop` sees each vertex as it is dequeued; returning
/// true ends the expansion after that vertex is recorded.
fn breadth_first<V, F>(graph: &Graph<V>, start: &V, stop: F) -> Result<Vec<V>>
where
    V: Eq + Hash + Clone,
    F: Fn(&V) -> bool,
{
    let mut frontier = CircularQueue::new();
    let mut visited: HashSet<&V> = HashSet::new();
    let mut order = Vec::new();

    frontier.enqueue(start);
    visited.insert(start);

    while !frontier.is_empty() {
        let current = *frontier.first()?;
        for successor in graph.row::<V>(current) {
            if visited.insert(successor) {
                frontier.enqueue(successor);
            }
        }
        order.push(current.clone());
        frontier.dequeue()?;

        if stop(current) {
            break;
        }
    }

    Ok(order)
}
