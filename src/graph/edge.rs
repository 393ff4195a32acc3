//! Graph edges.
//!
//! Every edge kind exposes the same capability through [`EdgeKind`]: two
//! endpoints, a mutable `directed` flag and the matching rules used by the
//! graph's insertion and removal protocol. [`Edge`] is the plain kind;
//! [`WeightedEdge`](super::WeightedEdge) adds a weight on top of it.

use super::error::GraphError;
use super::node::NodeId;
use crate::alloc::GenerationalIndex;
use core::fmt;

/// A strongly-typed handle to an edge of a [`Graph`](super::Graph).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) GenerationalIndex);

impl EdgeId {
    /// Slot position of the edge inside its graph.
    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.0.index(), self.0.generation())
    }
}

/// Capability shared by all edge kinds.
///
/// The setters are low-level escape hatches: changing endpoints or direction
/// of an edge that already sits in a graph desynchronizes the endpoint
/// adjacency lists. Route structural changes through the graph instead.
pub trait EdgeKind {
    /// Origin endpoint.
    fn tail(&self) -> NodeId;

    /// Destination endpoint.
    fn head(&self) -> NodeId;

    /// Overwrites the origin endpoint. Use with care.
    fn set_tail(&mut self, tail: NodeId);

    /// Overwrites the destination endpoint. Use with care.
    fn set_head(&mut self, head: NodeId);

    /// True for `tail -> head` edges, false for `tail -- head` edges.
    fn is_directed(&self) -> bool;

    /// Overwrites the direction flag. Use with care.
    fn set_directed(&mut self, directed: bool);

    /// Weight as `f64`, for kinds that carry one.
    fn numeric_weight(&self) -> Option<f64> {
        None
    }

    /// Re-checks construction-time constraints.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] if tail and head coincide.
    fn validate(&self) -> Result<(), GraphError> {
        if self.tail() == self.head() {
            Err(GraphError::SelfLoop(self.tail()))
        } else {
            Ok(())
        }
    }

    /// True if this edge joins `a` and `b`, in either role.
    fn joins(&self, a: NodeId, b: NodeId) -> bool {
        (self.tail() == a && self.head() == b) || (self.tail() == b && self.head() == a)
    }

    /// Edge equality.
    ///
    /// Identical objects always match. Otherwise, with `ignore_direction`
    /// unset, the endpoints must match in either order and the `directed`
    /// flags must be equal; with it set, matching endpoints in either order
    /// is enough. Weights never participate.
    fn compare<O: EdgeKind + ?Sized>(&self, other: &O, ignore_direction: bool) -> bool {
        let this = core::ptr::from_ref(self).cast::<()>();
        let that = core::ptr::from_ref(other).cast::<()>();
        if this == that {
            return true;
        }
        if !self.joins(other.tail(), other.head()) {
            return false;
        }
        ignore_direction || self.is_directed() == other.is_directed()
    }
}

/// A plain edge between two distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    tail: NodeId,
    head: NodeId,
    directed: bool,
}

impl Edge {
    /// Creates an edge from `tail` to `head`.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] if `tail == head`.
    pub fn new(tail: NodeId, head: NodeId, directed: bool) -> Result<Self, GraphError> {
        if tail == head {
            return Err(GraphError::SelfLoop(tail));
        }
        Ok(Self {
            tail,
            head,
            directed,
        })
    }

    /// Creates an undirected edge between `tail` and `head`.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] if `tail == head`.
    pub fn undirected(tail: NodeId, head: NodeId) -> Result<Self, GraphError> {
        Self::new(tail, head, false)
    }
}

impl EdgeKind for Edge {
    #[inline]
    fn tail(&self) -> NodeId {
        self.tail
    }

    #[inline]
    fn head(&self) -> NodeId {
        self.head
    }

    fn set_tail(&mut self, tail: NodeId) {
        self.tail = tail;
    }

    fn set_head(&mut self, head: NodeId) {
        self.head = head;
    }

    #[inline]
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }
}
