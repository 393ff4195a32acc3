//! Graph nodes.
//!
//! A node owns its value plus two lists of edge handles: edges it leaves
//! (`outgoing`) and edges it enters (`incoming`). An undirected edge sits in
//! all four lists of its two endpoints. The lists are plain back-references;
//! the owning [`Graph`](super::Graph) is what keeps them honest.

use super::edge::{EdgeId, EdgeKind};
use super::value::NodeValue;
use crate::alloc::{GenerationalIndex, GenerationalPool};
use core::fmt;

/// A strongly-typed handle to a node of a [`Graph`](super::Graph).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) GenerationalIndex);

impl NodeId {
    /// Slot position of the node inside its graph.
    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.0.index(), self.0.generation())
    }
}

/// A vertex holding a unique value and its incident edge handles.
#[derive(Debug, Clone)]
pub struct Node<V> {
    value: V,
    outgoing: Vec<EdgeId>,
    incoming: Vec<EdgeId>,
}

impl<V: NodeValue> Node<V> {
    /// Creates a detached node. Text values are trimmed.
    ///
    /// Uniqueness is only guaranteed when nodes enter a graph through
    /// [`Graph::insert_node`](super::Graph::insert_node).
    pub fn new(value: V) -> Self {
        Self {
            value: value.normalize(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Replaces the value.
    ///
    /// Use with care: the graph does not re-check uniqueness.
    pub fn set_value(&mut self, value: V) {
        self.value = value.normalize();
    }

    /// Returns true if `value` names this node.
    pub fn matches(&self, value: &V) -> bool {
        self.value.same_value(value)
    }
}

impl<V> Node<V> {
    /// The node's value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the node, returning its value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Edges whose tail is this node, plus undirected edges touching it.
    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    /// Edges whose head is this node, plus undirected edges touching it.
    pub fn incoming(&self) -> &[EdgeId] {
        &self.incoming
    }

    /// Overwrites the outgoing list. Use with care.
    pub fn set_outgoing(&mut self, edges: Vec<EdgeId>) {
        self.outgoing = edges;
    }

    /// Overwrites the incoming list. Use with care.
    pub fn set_incoming(&mut self, edges: Vec<EdgeId>) {
        self.incoming = edges;
    }

    /// Appends to the outgoing list.
    pub fn push_outgoing(&mut self, edge: EdgeId) {
        self.outgoing.push(edge);
    }

    /// Appends to the incoming list.
    pub fn push_incoming(&mut self, edge: EdgeId) {
        self.incoming.push(edge);
    }

    /// Appends to both lists.
    pub fn push_both(&mut self, edge: EdgeId) {
        self.outgoing.push(edge);
        self.incoming.push(edge);
    }

    /// Removes the outgoing entry at `index`, if any.
    pub fn remove_outgoing(&mut self, index: usize) -> Option<EdgeId> {
        (index < self.outgoing.len()).then(|| self.outgoing.remove(index))
    }

    /// Removes the incoming entry at `index`, if any.
    pub fn remove_incoming(&mut self, index: usize) -> Option<EdgeId> {
        (index < self.incoming.len()).then(|| self.incoming.remove(index))
    }

    /// Position of the first outgoing edge whose head is `head`.
    pub fn outgoing_index_to<E: EdgeKind>(
        &self,
        head: NodeId,
        edges: &GenerationalPool<E>,
    ) -> Option<usize> {
        self.outgoing
            .iter()
            .position(|id| edges.get(id.0).is_some_and(|e| e.head() == head))
    }

    /// Position of the first incoming edge whose tail is `tail`.
    pub fn incoming_index_from<E: EdgeKind>(
        &self,
        tail: NodeId,
        edges: &GenerationalPool<E>,
    ) -> Option<usize> {
        self.incoming
            .iter()
            .position(|id| edges.get(id.0).is_some_and(|e| e.tail() == tail))
    }

    /// Removes every reference to `edge` from both lists.
    pub(crate) fn detach(&mut self, edge: EdgeId) {
        if let Some(pos) = self.outgoing.iter().position(|&e| e == edge) {
            self.outgoing.remove(pos);
        }
        if let Some(pos) = self.incoming.iter().position(|&e| e == edge) {
            self.incoming.remove(pos);
        }
    }

    /// True if the node has at least one incident edge.
    ///
    /// This is a degree check, not reachability.
    pub fn is_connected(&self) -> bool {
        !self.outgoing.is_empty() || !self.incoming.is_empty()
    }

    /// True if an incident edge leads to `other`, or arrives from it.
    ///
    /// Undirected edges count in both directions. Asking a node about itself
    /// is meaningful only through [`Graph::is_adjacent`](super::Graph::is_adjacent).
    pub fn is_adjacent_to<E: EdgeKind>(&self, other: NodeId, edges: &GenerationalPool<E>) -> bool {
        let leads_to = self.outgoing.iter().filter_map(|id| edges.get(id.0)).any(|e| {
            e.head() == other || (!e.is_directed() && e.tail() == other)
        });
        leads_to
            || self.incoming.iter().filter_map(|id| edges.get(id.0)).any(|e| {
                e.tail() == other || (!e.is_directed() && e.head() == other)
            })
    }
}

impl<V: PartialEq> Node<V> {
    /// True if `other` is this very node or holds an equal value.
    pub fn compare(&self, other: &Node<V>) -> bool {
        core::ptr::eq(self, other) || self.value == other.value
    }
}
