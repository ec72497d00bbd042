//! Canonical regression tree representation.

/// Canonical node identifier.
///
/// Internally this is just an index into the tree's node arena.
pub type NodeId = u32;

pub mod mutable_tree;
pub mod node;
pub mod tree;

pub use mutable_tree::MutableTree;
pub use node::Node;
pub use tree::{Tree, TreeValidationError};
