//! Error type for graph contract violations.
//!
//! Operational conflicts (duplicate nodes, conflicting edges, missing targets
//! on removal) are not errors; they are reported through `Option`, `bool` or
//! [`EdgeInsertion::Rejected`](super::EdgeInsertion::Rejected).

use super::{EdgeId, NodeId};
use core::fmt;

/// A contract violation detected while building or installing graph parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An edge was given the same node as tail and head.
    SelfLoop(NodeId),
    /// A weight was NaN, infinite or negative.
    InvalidWeight,
    /// A node handle does not refer to a live node of this graph.
    UnknownNode(NodeId),
    /// An edge handle does not refer to a live edge of this graph.
    UnknownEdge(EdgeId),
    /// Two edges in one edge list join the same pair of nodes.
    DuplicateEdge {
        /// Tail of the second edge for the pair.
        tail: NodeId,
        /// Head of the second edge for the pair.
        head: NodeId,
    },
    /// Two values in one node list normalize to the same value.
    DuplicateNode {
        /// Position of the second occurrence.
        position: usize,
    },
    /// Adjacency bookkeeping disagrees with the edge set.
    Inconsistent(EdgeId),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfLoop(node) => write!(f, "edge tail and head are the same node {node}"),
            Self::InvalidWeight => f.write_str("edge weight must be a finite, non-negative number"),
            Self::UnknownNode(node) => write!(f, "node {node} is not part of this graph"),
            Self::UnknownEdge(edge) => write!(f, "edge {edge} is not part of this graph"),
            Self::DuplicateEdge { tail, head } => {
                write!(f, "more than one edge joins nodes {tail} and {head}")
            }
            Self::DuplicateNode { position } => {
                write!(f, "node value at position {position} is already present")
            }
            Self::Inconsistent(edge) => {
                write!(f, "adjacency lists disagree with the edge set at edge {edge}")
            }
        }
    }
}

impl std::error::Error for GraphError {}
