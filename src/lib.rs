//! # `mixgraph` - Mixed Directed/Undirected Graphs
//!
//! A small in-memory mutable graph whose edges may be directed or undirected,
//! with a weighted variant that carries a finite, non-negative weight per edge.
//!
//! ## Model
//!
//! - **Nodes** are identified by value. No two nodes in one graph compare
//!   equal; string values are trimmed before they are stored or compared.
//! - **Edges** join two distinct nodes and carry a mutable `directed` flag.
//! - **Graphs** own both collections in generational arenas. Every node keeps
//!   `outgoing` and `incoming` lists of edge handles, and the graph keeps those
//!   lists consistent with its edge set.
//!
//! ### Edge insertion protocol
//!
//! At most one edge exists per unordered pair of endpoints. A second request
//! for the same pair resolves as follows:
//!
//! | existing   | requested                 | outcome                    |
//! |------------|---------------------------|----------------------------|
//! | `A -> B`   | `A -> B`                  | rejected                   |
//! | `A -> B`   | `B -> A` or `A -- B`      | existing demoted to `A -- B` |
//! | `A -- B`   | anything                  | rejected                   |
//!
//! Weights never take part in matching or conflict resolution.
//!
//! ## Example
//!
//! ```rust
//! use mixgraph::{EdgeInsertion, Graph};
//!
//! let mut graph: Graph<&str> = Graph::new();
//! let a = graph.insert_node("A").unwrap();
//! let b = graph.insert_node(" B ").unwrap();
//!
//! let first = graph.insert_edge(a, b, true).unwrap();
//! assert!(matches!(first, EdgeInsertion::Inserted(_)));
//!
//! // The reverse direction folds the pair into one undirected edge.
//! let second = graph.insert_edge(b, a, true).unwrap();
//! assert_eq!(second, EdgeInsertion::Downgraded(first.edge().unwrap()));
//! assert!(!graph.is_digraph());
//! assert_eq!(graph.find_node(&"B"), Some(b));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod alloc;
pub mod graph;

pub use alloc::{GenerationalIndex, GenerationalPool};
pub use graph::{
    Edge, EdgeId, EdgeInsertion, EdgeKind, Graph, GraphError, GraphSnapshot, Node, NodeId,
    NodeValue, WeightedEdge, WeightedGraph,
};

const _: () = {
    use core::mem;

    // Handles are plain copies; keep them two words or less.
    assert!(mem::size_of::<NodeId>() <= mem::size_of::<usize>() * 2);
    assert!(mem::size_of::<EdgeId>() == mem::size_of::<NodeId>());
};
