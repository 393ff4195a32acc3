//! Weighted edges and the weighted graph alias.
//!
//! A [`WeightedEdge`] is an [`Edge`] plus a finite, non-negative weight. The
//! weight is validated on construction and on every update; it never takes
//! part in edge matching, so two weighted edges between the same endpoints are
//! the same edge as far as the graph is concerned.

use super::edge::{Edge, EdgeKind};
use super::error::GraphError;
use super::mixed_graph::Graph;
use super::node::NodeId;
use num_traits::Float;

/// A graph whose edges all carry a weight.
pub type WeightedGraph<V, W = f64> = Graph<V, WeightedEdge<W>>;

/// Checks that `weight` is finite and not negative.
///
/// # Errors
/// Returns [`GraphError::InvalidWeight`] for NaN, infinities and negatives.
pub fn validate_weight<W: Float>(weight: W) -> Result<W, GraphError> {
    if weight.is_finite() && weight >= W::zero() {
        Ok(weight)
    } else {
        Err(GraphError::InvalidWeight)
    }
}

/// An edge carrying a finite, non-negative weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEdge<W = f64> {
    edge: Edge,
    weight: W,
}

impl<W: Float> WeightedEdge<W> {
    /// Creates a weighted edge from `tail` to `head`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidWeight`] for an unusable weight and
    /// [`GraphError::SelfLoop`] if `tail == head`.
    pub fn new(tail: NodeId, head: NodeId, weight: W, directed: bool) -> Result<Self, GraphError> {
        let weight = validate_weight(weight)?;
        Ok(Self {
            edge: Edge::new(tail, head, directed)?,
            weight,
        })
    }

    /// Attaches a weight to an existing plain edge.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidWeight`] for an unusable weight.
    pub fn from_edge(edge: Edge, weight: W) -> Result<Self, GraphError> {
        Ok(Self {
            edge,
            weight: validate_weight(weight)?,
        })
    }

    /// The edge weight.
    pub fn weight(&self) -> W {
        self.weight
    }

    /// Replaces the weight.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidWeight`] and keeps the old weight if the
    /// new one is unusable.
    pub fn set_weight(&mut self, weight: W) -> Result<(), GraphError> {
        self.weight = validate_weight(weight)?;
        Ok(())
    }

    /// The underlying unweighted edge.
    pub fn as_edge(&self) -> &Edge {
        &self.edge
    }
}

impl<W: Float> EdgeKind for WeightedEdge<W> {
    #[inline]
    fn tail(&self) -> NodeId {
        self.edge.tail()
    }

    #[inline]
    fn head(&self) -> NodeId {
        self.edge.head()
    }

    fn set_tail(&mut self, tail: NodeId) {
        self.edge.set_tail(tail);
    }

    fn set_head(&mut self, head: NodeId) {
        self.edge.set_head(head);
    }

    #[inline]
    fn is_directed(&self) -> bool {
        self.edge.is_directed()
    }

    fn set_directed(&mut self, directed: bool) {
        self.edge.set_directed(directed);
    }

    fn numeric_weight(&self) -> Option<f64> {
        self.weight.to_f64()
    }

    fn validate(&self) -> Result<(), GraphError> {
        validate_weight(self.weight)?;
        self.edge.validate()
    }
}
