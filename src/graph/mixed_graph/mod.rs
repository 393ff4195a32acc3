//! `Graph` — an owning graph mixing directed and undirected edges.
//!
//! Nodes and edges live in generational pools; node adjacency lists store
//! [`EdgeId`]s, so there are no ownership cycles between nodes and edges.
//! Insertion order is tracked separately from pool slots, which keeps
//! iteration stable across removals.
//!
//! # Performance
//! - `insert_node`, `find_node`: O(V) (value scan keeps uniqueness)
//! - `insert_edge`, `find_edge`: O(E) (endpoint scan keeps one edge per pair)
//! - `remove_edge`: O(E + degree)
//! - `remove_node`: O(E · degree) in the worst case

mod protocol;
pub mod render;

use super::edge::{Edge, EdgeId, EdgeKind};
use super::error::GraphError;
use super::node::{Node, NodeId};
use super::value::NodeValue;
use super::weighted::WeightedEdge;
use crate::alloc::GenerationalPool;
use num_traits::Float;

/// Outcome of an edge insertion request.
///
/// Conflicts are not errors; check for [`EdgeInsertion::Rejected`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsertion {
    /// The edge was new and now belongs to the graph.
    Inserted(EdgeId),
    /// A directed edge already joined the endpoints; it was turned into an
    /// undirected edge and the request was discarded.
    Downgraded(EdgeId),
    /// The request conflicts with an existing edge; nothing changed.
    Rejected,
}

impl EdgeInsertion {
    /// The affected edge, unless the request was rejected.
    pub fn edge(self) -> Option<EdgeId> {
        match self {
            Self::Inserted(id) | Self::Downgraded(id) => Some(id),
            Self::Rejected => None,
        }
    }

    /// True if a new edge was added.
    pub fn is_inserted(self) -> bool {
        matches!(self, Self::Inserted(_))
    }

    /// True if nothing changed.
    pub fn is_rejected(self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// A mutable graph with value-identified nodes and mixed edges.
///
/// `E` selects the edge kind: [`Edge`] for plain graphs and
/// [`WeightedEdge`] for [`WeightedGraph`](super::WeightedGraph).
#[derive(Debug, Clone)]
pub struct Graph<V, E = Edge> {
    nodes: GenerationalPool<Node<V>>,
    edges: GenerationalPool<E>,
    node_order: Vec<NodeId>,
    edge_order: Vec<EdgeId>,
}

impl<V, E> Graph<V, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: GenerationalPool::new(),
            edges: GenerationalPool::new(),
            node_order: Vec::new(),
            edge_order: Vec::new(),
        }
    }

    /// Creates an empty graph with room for the given number of nodes and edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: GenerationalPool::with_capacity(nodes),
            edges: GenerationalPool::with_capacity(edges),
            node_order: Vec::with_capacity(nodes),
            edge_order: Vec::with_capacity(edges),
        }
    }

    /// Creates a graph whose only node is `node`.
    ///
    /// Any edge handles the node carries are dropped; they cannot refer to
    /// edges of the new graph.
    pub fn from_root_node(mut node: Node<V>) -> Self {
        node.set_outgoing(Vec::new());
        node.set_incoming(Vec::new());
        let mut graph = Self::new();
        graph.push_node(node);
        graph
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_order.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_order.len()
    }

    /// True if the graph holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.node_order.is_empty()
    }

    /// Node handles in insertion order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.node_order
    }

    /// Edge handles in insertion order.
    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.edge_order
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<V>)> + '_ {
        self.node_order
            .iter()
            .filter_map(move |&id| self.nodes.get(id.0).map(|n| (id, n)))
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &E)> + '_ {
        self.edge_order
            .iter()
            .filter_map(move |&id| self.edges.get(id.0).map(|e| (id, e)))
    }

    /// Looks up a node by handle.
    pub fn node(&self, id: NodeId) -> Option<&Node<V>> {
        self.nodes.get(id.0)
    }

    /// Mutable node access.
    ///
    /// Use with care: edits made here bypass the graph's value uniqueness and
    /// adjacency bookkeeping.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<V>> {
        self.nodes.get_mut(id.0)
    }

    /// Looks up an edge by handle.
    pub fn edge(&self, id: EdgeId) -> Option<&E> {
        self.edges.get(id.0)
    }

    /// Mutable edge access.
    ///
    /// Use with care: changing endpoints or direction here leaves the
    /// endpoint adjacency lists stale.
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut E> {
        self.edges.get_mut(id.0)
    }

    /// The pool holding the graph's edges, for node-level adjacency queries.
    pub fn edge_pool(&self) -> &GenerationalPool<E> {
        &self.edges
    }

    /// True if every node has an incident edge. Graphs with fewer than two
    /// nodes are never connected.
    ///
    /// This is a per-node degree check; it does not test reachability.
    pub fn is_connected(&self) -> bool {
        self.node_count() > 1 && self.nodes().all(|(_, node)| node.is_connected())
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.node_order.clear();
        self.edge_order.clear();
        debug_event!("graph cleared");
    }

    fn push_node(&mut self, node: Node<V>) -> NodeId {
        let id = NodeId(self.nodes.alloc(node));
        self.node_order.push(id);
        id
    }

    fn require_node(&self, id: NodeId) -> Result<&Node<V>, GraphError> {
        self.nodes.get(id.0).ok_or(GraphError::UnknownNode(id))
    }
}

impl<V: NodeValue, E> Graph<V, E> {
    /// Creates a graph whose only node holds `value`.
    pub fn with_root(value: V) -> Self {
        Self::from_root_node(Node::new(value))
    }

    /// Builds a detached node for `value`, trimming text values.
    ///
    /// Uniqueness is not checked; use [`insert_node`](Self::insert_node) to
    /// add nodes to a graph.
    pub fn create_node(value: V) -> Node<V> {
        Node::new(value)
    }

    /// Finds the node named by `value`.
    pub fn find_node(&self, value: &V) -> Option<NodeId> {
        self.nodes()
            .find(|(_, node)| node.matches(value))
            .map(|(id, _)| id)
    }

    /// True if a node named by `value` exists.
    pub fn contains_node(&self, value: &V) -> bool {
        self.find_node(value).is_some()
    }

    /// Adds a node for `value`.
    ///
    /// Returns `None` and leaves the graph unchanged if a node with the same
    /// value already exists.
    pub fn insert_node(&mut self, value: V) -> Option<NodeId> {
        let node = Self::create_node(value);
        if self.contains_node(node.value()) {
            debug_event!("node insertion rejected: duplicate value");
            return None;
        }
        let id = self.push_node(node);
        debug_event!(node = %id, "node inserted");
        Some(id)
    }

    /// Replaces every node with fresh nodes for `values`, dropping all edges.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateNode`] and leaves the graph unchanged
    /// if two values name the same node.
    pub fn replace_nodes(&mut self, values: Vec<V>) -> Result<Vec<NodeId>, GraphError> {
        let fresh: Vec<Node<V>> = values.into_iter().map(Node::new).collect();
        for (position, node) in fresh.iter().enumerate() {
            if fresh[..position].iter().any(|seen| seen.matches(node.value())) {
                return Err(GraphError::DuplicateNode { position });
            }
        }

        self.clear();
        Ok(fresh.into_iter().map(|node| self.push_node(node)).collect())
    }
}

impl<V, E: EdgeKind> Graph<V, E> {
    /// True if any edge is directed.
    pub fn is_digraph(&self) -> bool {
        self.edges().any(|(_, e)| e.is_directed())
    }

    /// Finds the edge joining `tail` and `head`.
    ///
    /// With `directed` unset the endpoints match in either role and the
    /// direction flag is ignored. With `Some(flag)` the edge must also have
    /// that direction flag. A node is never joined to itself.
    pub fn find_edge(&self, tail: NodeId, head: NodeId, directed: Option<bool>) -> Option<EdgeId> {
        let pattern = Edge::new(tail, head, directed.unwrap_or(false)).ok()?;
        self.edges()
            .find(|(_, e)| e.compare(&pattern, directed.is_none()))
            .map(|(id, _)| id)
    }

    /// True if [`find_edge`](Self::find_edge) succeeds.
    pub fn contains_edge(&self, tail: NodeId, head: NodeId, directed: Option<bool>) -> bool {
        self.find_edge(tail, head, directed).is_some()
    }

    /// True if an edge leads from `a` to `b` or from `b` to `a`, counting
    /// undirected edges both ways.
    pub fn is_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        a != b
            && self
                .nodes
                .get(a.0)
                .is_some_and(|node| node.is_adjacent_to(b, &self.edges))
    }

    /// Distinct nodes sharing an edge with `id`, in adjacency-list order.
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        let Some(node) = self.nodes.get(id.0) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for edge_id in node.outgoing().iter().chain(node.incoming()) {
            let Some(edge) = self.edges.get(edge_id.0) else {
                continue;
            };
            let other = if edge.tail() == id { edge.head() } else { edge.tail() };
            if !out.contains(&other) {
                out.push(other);
            }
        }
        out
    }

    /// Removes the node `id` and every edge touching it.
    ///
    /// Returns false, changing nothing, if `id` is not a live node.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        if !self.nodes.contains(id.0) {
            return false;
        }

        let incident: Vec<EdgeId> = self
            .edges()
            .filter(|(_, e)| e.tail() == id || e.head() == id)
            .map(|(edge_id, _)| edge_id)
            .collect();
        for &edge_id in incident.iter().rev() {
            self.unlink_edge(edge_id);
        }

        self.nodes.free(id.0);
        self.node_order.retain(|&n| n != id);
        debug_event!(node = %id, edges = incident.len(), "node removed");
        self.debug_assert_consistent();
        true
    }

    /// Removes the node named by `value`, if any.
    pub fn remove_node_value(&mut self, value: &V) -> bool
    where
        V: NodeValue,
    {
        self.find_node(value).is_some_and(|id| self.remove_node(id))
    }

    /// Turns edge `id` into an undirected edge in place, completing the
    /// endpoint adjacency lists.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownEdge`] for a stale handle.
    pub fn demote_to_undirected(&mut self, id: EdgeId) -> Result<(), GraphError> {
        let edge = self.edges.get_mut(id.0).ok_or(GraphError::UnknownEdge(id))?;
        edge.set_directed(false);
        let (tail, head) = (edge.tail(), edge.head());

        for end in [tail, head] {
            if let Some(node) = self.nodes.get_mut(end.0) {
                if !node.outgoing().contains(&id) {
                    node.push_outgoing(id);
                }
                if !node.incoming().contains(&id) {
                    node.push_incoming(id);
                }
            }
        }
        trace_event!(edge = %id, "edge demoted to undirected");
        Ok(())
    }
}

impl<V: NodeValue> Graph<V, Edge> {
    /// Builds a plain edge for this graph.
    ///
    /// The endpoints need not belong to the graph yet; insertion checks that.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] if `tail == head`.
    pub fn create_edge(&self, tail: NodeId, head: NodeId, directed: bool) -> Result<Edge, GraphError> {
        Edge::new(tail, head, directed)
    }

    /// Builds and inserts an edge; see [`insert_edge_object`](Self::insert_edge_object).
    ///
    /// # Errors
    /// Propagates construction and endpoint errors.
    pub fn insert_edge(
        &mut self,
        tail: NodeId,
        head: NodeId,
        directed: bool,
    ) -> Result<EdgeInsertion, GraphError> {
        let edge = self.create_edge(tail, head, directed)?;
        self.insert_edge_object(edge)
    }

    /// Removes the edge joining `tail` and `head`, whatever its direction.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] if `tail == head`.
    pub fn remove_edge(&mut self, tail: NodeId, head: NodeId, directed: bool) -> Result<bool, GraphError> {
        let pattern = self.create_edge(tail, head, directed)?;
        Ok(self.remove_edge_object(&pattern))
    }
}

impl<V: NodeValue, W: Float> Graph<V, WeightedEdge<W>> {
    /// Builds a weighted edge for this graph.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidWeight`] or [`GraphError::SelfLoop`].
    pub fn create_edge(
        &self,
        tail: NodeId,
        head: NodeId,
        weight: W,
        directed: bool,
    ) -> Result<WeightedEdge<W>, GraphError> {
        WeightedEdge::new(tail, head, weight, directed)
    }

    /// Builds and inserts a weighted edge. The weight does not influence
    /// conflict resolution.
    ///
    /// # Errors
    /// Propagates construction and endpoint errors.
    pub fn insert_edge(
        &mut self,
        tail: NodeId,
        head: NodeId,
        weight: W,
        directed: bool,
    ) -> Result<EdgeInsertion, GraphError> {
        let edge = self.create_edge(tail, head, weight, directed)?;
        self.insert_edge_object(edge)
    }

    /// Removes the edge joining `tail` and `head`. The weight must be valid
    /// but is not used for matching.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidWeight`] or [`GraphError::SelfLoop`].
    pub fn remove_edge(
        &mut self,
        tail: NodeId,
        head: NodeId,
        weight: W,
        directed: bool,
    ) -> Result<bool, GraphError> {
        let pattern = self.create_edge(tail, head, weight, directed)?;
        Ok(self.remove_edge_object(&pattern))
    }
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}
