//! Adjacency consistency checks.
//!
//! Every mutation path re-runs [`Graph::verify_consistency`] in debug builds,
//! while release builds remain unaffected.

use super::edge::EdgeKind;
use super::error::GraphError;
use super::mixed_graph::Graph;

impl<V, E: EdgeKind> Graph<V, E> {
    /// Checks that node adjacency lists and the edge set agree.
    ///
    /// For every edge, the tail lists it as outgoing and the head as
    /// incoming; an undirected edge additionally sits in the tail's incoming
    /// and the head's outgoing list. No adjacency list may mention an edge
    /// the graph does not hold, and no edge may be listed where its
    /// direction does not place it.
    ///
    /// # Errors
    /// Returns [`GraphError::Inconsistent`] naming the first offending edge,
    /// or [`GraphError::UnknownNode`] for an edge with a dead endpoint.
    pub fn verify_consistency(&self) -> Result<(), GraphError> {
        for (id, edge) in self.edges() {
            let tail = self.node(edge.tail()).ok_or(GraphError::UnknownNode(edge.tail()))?;
            let head = self.node(edge.head()).ok_or(GraphError::UnknownNode(edge.head()))?;
            let undirected = !edge.is_directed();

            let placed = tail.outgoing().contains(&id)
                && head.incoming().contains(&id)
                && tail.incoming().contains(&id) == undirected
                && head.outgoing().contains(&id) == undirected;
            if !placed {
                return Err(GraphError::Inconsistent(id));
            }
        }

        for (_, node) in self.nodes() {
            for &id in node.outgoing().iter().chain(node.incoming()) {
                if self.edge(id).is_none() {
                    return Err(GraphError::Inconsistent(id));
                }
            }
        }
        Ok(())
    }

    /// Debug-asserts [`verify_consistency`](Self::verify_consistency).
    #[inline]
    pub(crate) fn debug_assert_consistent(&self) {
        if cfg!(debug_assertions) {
            if let Err(err) = self.verify_consistency() {
                panic!("graph invariant violated: {err}");
            }
        }
    }
}
