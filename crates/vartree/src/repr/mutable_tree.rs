//! Mutable tree construction during training.

use super::node::Node;
use super::tree::Tree;
use super::NodeId;

/// Tree under construction.
///
/// The grower allocates nodes top-down: [`init_root`](Self::init_root) first,
/// then [`apply_split`](Self::apply_split) turns an undecided node into an
/// internal split and allocates its two children, and
/// [`make_leaf`](Self::make_leaf) finalizes an undecided node as a leaf.
/// [`freeze`](Self::freeze) produces the immutable [`Tree`] once every
/// allocated node has been decided.
///
/// Parents are always allocated before their children, so node 0 is the root.
#[derive(Debug, Default)]
pub struct MutableTree {
    /// `None` marks an allocated node whose kind is not decided yet.
    nodes: Vec<Option<Node>>,
}

impl MutableTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of allocated nodes.
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Allocate the root node.
    pub fn init_root(&mut self) -> NodeId {
        debug_assert!(self.nodes.is_empty(), "root must be the first node");
        self.nodes.push(None);
        Tree::ROOT
    }

    /// Finalize a node as a leaf with the given prediction value.
    pub fn make_leaf(&mut self, node: NodeId, value: f32) {
        debug_assert!(self.nodes[node as usize].is_none(), "node already decided");
        self.nodes[node as usize] = Some(Node::Leaf { value });
    }

    /// Turn a node into an internal split and allocate both children.
    ///
    /// Returns the `(left, right)` child ids; both start undecided.
    pub fn apply_split(&mut self, node: NodeId, feature: u32, threshold: f32) -> (NodeId, NodeId) {
        debug_assert!(self.nodes[node as usize].is_none(), "node already decided");

        let left = self.nodes.len() as NodeId;
        let right = left + 1;
        self.nodes.push(None);
        self.nodes.push(None);

        self.nodes[node as usize] = Some(Node::Split {
            feature,
            threshold,
            left,
            right,
        });

        (left, right)
    }

    /// Freeze into an immutable [`Tree`].
    ///
    /// Every allocated node must have been decided via
    /// [`make_leaf`](Self::make_leaf) or [`apply_split`](Self::apply_split).
    pub fn freeze(self, n_features: usize) -> Tree {
        let nodes: Vec<Node> = self
            .nodes
            .into_iter()
            .map(|node| node.expect("every allocated node must be decided before freeze"))
            .collect();
        Tree::new(nodes, n_features)
    }
}
