//! Edge insertion and removal protocol.
//!
//! At most one edge joins any unordered pair of nodes. A request for a pair
//! that already has an edge never adds a second one: it is either rejected or
//! it demotes the existing directed edge to an undirected one.

use super::{EdgeInsertion, Graph};
use crate::graph::edge::{EdgeId, EdgeKind};
use crate::graph::error::GraphError;

impl<V, E: EdgeKind> Graph<V, E> {
    /// Inserts a prepared edge, resolving conflicts with an existing edge
    /// between the same endpoints.
    ///
    /// - no edge joins the endpoints: `edge` is added ([`EdgeInsertion::Inserted`])
    /// - both directed, same head: rejected
    /// - existing is directed and the request is undirected or points the
    ///   other way: the existing edge becomes undirected and the request is
    ///   discarded ([`EdgeInsertion::Downgraded`])
    /// - existing is undirected: rejected
    ///
    /// A rejected request leaves the graph untouched.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] or [`GraphError::InvalidWeight`] for a
    /// malformed edge and [`GraphError::UnknownNode`] if an endpoint is not
    /// part of this graph.
    pub fn insert_edge_object(&mut self, edge: E) -> Result<EdgeInsertion, GraphError> {
        edge.validate()?;
        self.require_node(edge.tail())?;
        self.require_node(edge.head())?;

        let existing = self
            .edges()
            .find(|(_, e)| e.compare(&edge, true))
            .map(|(id, e)| (id, e.is_directed(), e.head()));

        let Some((existing_id, existing_directed, existing_head)) = existing else {
            let id = self.link_edge(edge);
            debug_event!(edge = %id, "edge inserted");
            self.debug_assert_consistent();
            return Ok(EdgeInsertion::Inserted(id));
        };

        let outcome = match (edge.is_directed(), existing_directed) {
            (true, true) if edge.head() == existing_head => EdgeInsertion::Rejected,
            (_, true) => {
                self.demote_to_undirected(existing_id)?;
                EdgeInsertion::Downgraded(existing_id)
            }
            (_, false) => EdgeInsertion::Rejected,
        };
        debug_event!(edge = %existing_id, outcome = ?outcome, "edge request met existing edge");
        self.debug_assert_consistent();
        Ok(outcome)
    }

    /// Removes the edge joining the endpoints of `pattern`, in either role and
    /// with either direction.
    ///
    /// Returns false if no such edge exists.
    pub fn remove_edge_object<P: EdgeKind + ?Sized>(&mut self, pattern: &P) -> bool {
        let found = self
            .edges()
            .find(|(_, e)| e.compare(pattern, true))
            .map(|(id, _)| id);

        match found {
            Some(id) => {
                self.unlink_edge(id);
                debug_event!(edge = %id, "edge removed");
                self.debug_assert_consistent();
                true
            }
            None => false,
        }
    }

    /// Replaces the whole edge set and rebuilds every adjacency list.
    ///
    /// All edges are checked before anything changes: each must pass
    /// [`EdgeKind::validate`], join live nodes, and be the only edge for its
    /// endpoint pair.
    ///
    /// # Errors
    /// Returns the first violation found; the graph is left unchanged.
    pub fn replace_edges(&mut self, edges: Vec<E>) -> Result<Vec<EdgeId>, GraphError> {
        for (position, edge) in edges.iter().enumerate() {
            edge.validate()?;
            self.require_node(edge.tail())?;
            self.require_node(edge.head())?;
            if edges[..position].iter().any(|seen| seen.compare(edge, true)) {
                return Err(GraphError::DuplicateEdge {
                    tail: edge.tail(),
                    head: edge.head(),
                });
            }
        }

        self.edges.clear();
        self.edge_order.clear();
        for id in &self.node_order {
            if let Some(node) = self.nodes.get_mut(id.0) {
                node.set_outgoing(Vec::new());
                node.set_incoming(Vec::new());
            }
        }

        let ids = edges.into_iter().map(|edge| self.link_edge(edge)).collect();
        debug_event!(edges = self.edge_order.len(), "edge set replaced");
        self.debug_assert_consistent();
        Ok(ids)
    }

    /// Stores `edge` and records it in its endpoints' adjacency lists.
    fn link_edge(&mut self, edge: E) -> EdgeId {
        let (tail, head, directed) = (edge.tail(), edge.head(), edge.is_directed());
        let id = EdgeId(self.edges.alloc(edge));
        self.edge_order.push(id);

        if let Some(node) = self.nodes.get_mut(tail.0) {
            if directed {
                node.push_outgoing(id);
            } else {
                node.push_both(id);
            }
        }
        if let Some(node) = self.nodes.get_mut(head.0) {
            if directed {
                node.push_incoming(id);
            } else {
                node.push_both(id);
            }
        }
        id
    }

    /// Drops edge `id` from both endpoints and from the edge set.
    pub(super) fn unlink_edge(&mut self, id: EdgeId) -> Option<E> {
        let edge = self.edges.free(id.0)?;
        for end in [edge.tail(), edge.head()] {
            if let Some(node) = self.nodes.get_mut(end.0) {
                node.detach(id);
            }
        }
        self.edge_order.retain(|&e| e != id);
        trace_event!(edge = %id, "edge unlinked");
        Some(edge)
    }
}
