//! Mixed directed/undirected graphs and their building blocks.
//!
//! - `node`: value-identified vertices with outgoing/incoming edge lists
//! - `edge`: the `EdgeKind` capability and the plain `Edge`
//! - `weighted`: `WeightedEdge` and the `WeightedGraph` alias
//! - `mixed_graph`: the owning `Graph` and its edge-insertion protocol

pub mod edge;
pub mod error;
pub(crate) mod invariants;
pub mod mixed_graph;
pub mod node;
pub mod value;
pub mod weighted;

pub use edge::{Edge, EdgeId, EdgeKind};
pub use error::GraphError;
pub use mixed_graph::render::{Arrows, EdgeView, GraphSnapshot, NodeView};
pub use mixed_graph::{EdgeInsertion, Graph};
pub use node::{Node, NodeId};
pub use value::NodeValue;
pub use weighted::{WeightedEdge, WeightedGraph};
