//! Read-only views for presentation layers.
//!
//! The graph has no change notifications; a renderer takes a fresh
//! [`GraphSnapshot`] after every mutation. The `Display` impl produces the
//! human-readable debug dump.

use super::Graph;
use crate::graph::edge::EdgeKind;
use core::fmt;
use serde::Serialize;

/// A node as a diagram widget sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeView {
    /// Identifier used by edges; the node value.
    pub id: String,
    /// Text shown on the node.
    pub label: String,
}

/// Which ends of an edge carry an arrow head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Arrows {
    /// Arrow at the `to` end.
    pub to: bool,
    /// Arrow at the `from` end.
    pub from: bool,
}

/// An edge as a diagram widget sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeView {
    /// Start node id.
    pub from: String,
    /// End node id.
    pub to: String,
    /// Arrow heads; undirected edges have both.
    pub arrows: Arrows,
    /// Weight, for weighted graphs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Nodes and edges of a graph, in insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GraphSnapshot {
    /// One entry per node.
    pub nodes: Vec<NodeView>,
    /// One entry per edge.
    pub edges: Vec<EdgeView>,
}

impl<V: fmt::Display, E: EdgeKind> Graph<V, E> {
    /// Captures the current nodes and edges for rendering.
    ///
    /// Directed edges run tail to head with one arrow. Undirected edges are
    /// emitted head to tail with arrows on both ends.
    pub fn snapshot(&self) -> GraphSnapshot {
        let nodes = self
            .nodes()
            .map(|(_, node)| {
                let text = node.value().to_string();
                NodeView {
                    id: text.clone(),
                    label: text,
                }
            })
            .collect();

        let edges = self
            .edges()
            .filter_map(|(_, edge)| {
                let tail = self.node(edge.tail())?.value().to_string();
                let head = self.node(edge.head())?.value().to_string();
                let directed = edge.is_directed();
                let (from, to) = if directed { (tail, head) } else { (head, tail) };
                Some(EdgeView {
                    from,
                    to,
                    arrows: Arrows {
                        to: true,
                        from: !directed,
                    },
                    weight: edge.numeric_weight(),
                })
            })
            .collect();

        GraphSnapshot { nodes, edges }
    }
}

impl<V: fmt::Display, E: EdgeKind> fmt::Display for Graph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Nodes: {}; Edges: {}; Connected: {}; Digraph: {}",
            self.node_count(),
            self.edge_count(),
            self.is_connected(),
            self.is_digraph()
        )?;

        for (_, node) in self.nodes() {
            writeln!(f, "Node: {}", node.value())?;
        }

        for (id, edge) in self.edges() {
            let (Some(tail), Some(head)) = (self.node(edge.tail()), self.node(edge.head())) else {
                writeln!(f, "Dangling: {id}")?;
                continue;
            };
            if edge.is_directed() {
                write!(f, "Directed: {} ---> {}", tail.value(), head.value())?;
            } else {
                write!(f, "Undirected: {} <---> {}", tail.value(), head.value())?;
            }
            if let Some(weight) = edge.numeric_weight() {
                write!(f, "; Weight: {weight}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
