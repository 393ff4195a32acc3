//! Storage primitives backing the graph.

pub mod generational_pool;

pub use generational_pool::{GenerationalIndex, GenerationalPool};
