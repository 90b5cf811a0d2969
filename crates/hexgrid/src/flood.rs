//! Reachability over neighbor graphs.
//!
//! `flood` expands breadth-first from a start node through nodes admitted by a
//! predicate. It only needs the `Neighbors` capability, so it runs on a built
//! `Grid` as well as on any other graph that can list a node's neighbors.

use std::collections::HashSet;
use std::hash::Hash;

/// Capability: list the present neighbors of a node.
pub trait Neighbors {
    type Node: Copy + Eq + Hash;

    fn neighbors(&self, node: Self::Node) -> impl Iterator<Item = Self::Node> + '_;
}

/// Nodes reachable from `start` through nodes satisfying `can_be_added`.
///
/// `start` itself is always part of the result, whether or not it satisfies the
/// predicate. The result is the predicate-respecting component of `start`;
/// iteration order of the returned set carries no meaning.
pub fn flood<G, F>(graph: &G, start: G::Node, can_be_added: F) -> HashSet<G::Node>
where
    G: Neighbors + ?Sized,
    F: Fn(G::Node) -> bool,
{
    let mut flooded: HashSet<G::Node> = HashSet::new();
    let mut in_process: HashSet<G::Node> = HashSet::from([start]);

    while !in_process.is_empty() {
        let mut waiting: HashSet<G::Node> = HashSet::new();
        for &node in &in_process {
            flooded.insert(node);
            waiting.extend(graph.neighbors(node).filter(|&n| {
                can_be_added(n) && !flooded.contains(&n) && !in_process.contains(&n)
            }));
        }
        in_process = waiting;
    }
    flooded
}

/// Does `cell`'s set of same-key direct neighbors fall apart into more than one
/// piece?
///
/// Only the immediate neighbors of `cell` are considered, and they may only link
/// up through each other. Returns `false` when no neighbor shares `cell`'s key.
pub fn is_disconnected_partition<G, K, F>(graph: &G, cell: G::Node, key_of: F) -> bool
where
    G: Neighbors + ?Sized,
    K: PartialEq,
    F: Fn(G::Node) -> K,
{
    let key = key_of(cell);
    let same: HashSet<G::Node> = graph.neighbors(cell).filter(|&n| key_of(n) == key).collect();
    let Some(&starter) = same.iter().next() else {
        return false;
    };
    let connected = flood(graph, starter, |n| same.contains(&n));
    same.len() > connected.len()
}
