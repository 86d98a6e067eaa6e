//! Connectivity repair: prune dangling flows, then stitch disconnected
//! subgraphs into one component.
//!
//! Every diagram the host accepts passes through here, so anything that
//! reaches layout or rendering has no dangling references and exactly one
//! connected component. The repairer adds flows but never removes one,
//! except connections whose endpoints no longer exist.
//!
//! Component discovery runs over an explicit index-based adjacency list in
//! element listing order, so identical input always yields identical
//! components, the same main-component choice, and the same added flows.

#[cfg(test)]
#[path = "repair_test.rs"]
mod repair_test;

use std::collections::VecDeque;

use indexmap::IndexMap;
use tracing::debug;

use crate::doc::{Connection, ElementKind, ProcessDiagram};
use crate::layout;
use crate::shape::{self, Point};

/// Outcome of a repair pass.
///
/// `added` lists the bridge connections the repairer inserted, in the order
/// the disconnected components were merged. The host can surface these to
/// the user — repair edits a user-authored graph without confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct Repaired {
    pub diagram: ProcessDiagram,
    pub added: Vec<Connection>,
}

/// Repair a structurally valid candidate diagram.
///
/// Prunes connections whose source or target element is gone, then merges
/// every disconnected component into the main one by adding a single flow
/// between the nearest cross-component pair of visual centers. Centers come
/// from freshly computed layout anchors, never from stored positions.
#[must_use]
pub fn repair(diagram: ProcessDiagram) -> Repaired {
    let mut diagram = diagram;
    let index = element_index(&diagram);

    let mut surviving = Vec::with_capacity(diagram.connections.len());
    for connection in diagram.connections.drain(..) {
        if index.contains_key(connection.source.as_str()) && index.contains_key(connection.target.as_str()) {
            surviving.push(connection);
        } else {
            debug!(
                source = %connection.source,
                target = %connection.target,
                "pruned dangling connection"
            );
        }
    }
    diagram.connections = surviving;

    let components = discover_components(&diagram, &index);
    if components.len() <= 1 {
        return Repaired { diagram, added: Vec::new() };
    }

    let main = select_main(&diagram, &components);
    let centers = visual_centers(&diagram);

    let mut added = Vec::new();
    for (i, component) in components.iter().enumerate() {
        if i == main {
            continue;
        }
        let Some((from, to)) = nearest_pair(&components[main], component, &centers) else {
            continue;
        };
        // Bridge runs left to right; the main-side endpoint wins an exact tie.
        let (source, target) = if centers[from].x <= centers[to].x {
            (from, to)
        } else {
            (to, from)
        };
        let source = diagram.elements[source].id.clone();
        let target = diagram.elements[target].id.clone();
        if diagram.has_connection(&source, &target) {
            continue;
        }
        debug!(source = %source, target = %target, "added bridge connection");
        let bridge = Connection { source, target, label: None };
        diagram.connections.push(bridge.clone());
        added.push(bridge);
    }

    Repaired { diagram, added }
}

/// Whether the undirected element graph is a single component.
///
/// Connections referencing missing elements are ignored, matching what a
/// repair pass would prune. Diagrams with fewer than two elements are
/// trivially connected.
#[must_use]
pub fn is_connected(diagram: &ProcessDiagram) -> bool {
    let index = element_index(diagram);
    discover_components(diagram, &index).len() <= 1
}

/// Map element id to its position in the element list. First listing wins.
/// Keys are owned so the map outlives edits to the diagram it was built from.
fn element_index(diagram: &ProcessDiagram) -> IndexMap<String, usize> {
    let mut index = IndexMap::with_capacity(diagram.elements.len());
    for (i, element) in diagram.elements.iter().enumerate() {
        index.entry(element.id.clone()).or_insert(i);
    }
    index
}

/// Discover connected components of the undirected element graph.
///
/// Traversal is breadth-first from the first unvisited element in listing
/// order; neighbors are visited in connection-insertion order. Component
/// order and the order of indices within each component are reproducible.
fn discover_components(diagram: &ProcessDiagram, index: &IndexMap<String, usize>) -> Vec<Vec<usize>> {
    let n = diagram.elements.len();
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
    for connection in &diagram.connections {
        let (Some(&s), Some(&t)) = (
            index.get(connection.source.as_str()),
            index.get(connection.target.as_str()),
        ) else {
            continue;
        };
        adjacency[s].push(t);
        adjacency[t].push(s);
    }

    let mut visited = vec![false; n];
    let mut components = Vec::new();
    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut component = Vec::new();
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            component.push(current);
            for &next in &adjacency[current] {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        components.push(component);
    }
    components
}

/// Pick the component everything else merges into: the first one holding a
/// start event, else the largest, ties to earliest discovery.
fn select_main(diagram: &ProcessDiagram, components: &[Vec<usize>]) -> usize {
    for (i, component) in components.iter().enumerate() {
        if component
            .iter()
            .any(|&e| diagram.elements[e].kind == ElementKind::StartEvent)
        {
            return i;
        }
    }
    let mut best = 0;
    for (i, component) in components.iter().enumerate().skip(1) {
        if component.len() > components[best].len() {
            best = i;
        }
    }
    best
}

/// Visual center of every element under a fresh layout pass.
fn visual_centers(diagram: &ProcessDiagram) -> Vec<Point> {
    let layout = layout::compute(diagram);
    diagram
        .elements
        .iter()
        .map(|element| {
            let anchor = layout.position(&element.id).unwrap_or(element.position);
            shape::center(element.kind, anchor)
        })
        .collect()
}

/// Scan (main, other) pairs in discovery order for the minimum squared
/// center distance. The first minimal pair wins ties.
fn nearest_pair(main: &[usize], other: &[usize], centers: &[Point]) -> Option<(usize, usize)> {
    let mut best: Option<(f64, usize, usize)> = None;
    for &m in main {
        for &o in other {
            let d = centers[m].distance_sq(centers[o]);
            if best.is_none_or(|(bd, _, _)| d < bd) {
                best = Some((d, m, o));
            }
        }
    }
    best.map(|(_, m, o)| (m, o))
}
