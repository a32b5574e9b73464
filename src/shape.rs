use serde::Serialize;

use crate::{dot::Dot, node::Node};

/// A read-only copy of the structure of a [`BalancedMap`], for consumers that
/// lay out and draw the tree.
///
/// Each [`Shape`] carries the key and value of one node and the shapes of its
/// children. Node heights are not exposed.
///
/// Serialises as `{"key": .., "value": .., "left": .., "right": ..}` with
/// `null` for an absent child.
///
/// [`BalancedMap`]: crate::BalancedMap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shape<K, V> {
    /// The key of this node.
    pub key: K,
    /// The value of this node.
    pub value: V,
    /// The subtree of keys less than `key`.
    pub left: Option<Box<Shape<K, V>>>,
    /// The subtree of keys greater than `key`.
    pub right: Option<Box<Shape<K, V>>>,
}

impl<'a, K, V> Shape<&'a K, &'a V> {
    pub(crate) fn from_node(n: &'a Node<K, V>) -> Self {
        Self {
            key: n.key(),
            value: n.value(),
            left: n.left().map(|v| Box::new(Self::from_node(v))),
            right: n.right().map(|v| Box::new(Self::from_node(v))),
        }
    }

    /// Clone the borrowed keys and values into an owned [`Shape`].
    pub fn cloned(&self) -> Shape<K, V>
    where
        K: Clone,
        V: Clone,
    {
        Shape {
            key: self.key.clone(),
            value: self.value.clone(),
            left: self.left.as_ref().map(|v| Box::new(v.cloned())),
            right: self.right.as_ref().map(|v| Box::new(v.cloned())),
        }
    }
}

impl<K, V> Shape<K, V> {
    /// The number of nodes on the longest path from this node to a leaf,
    /// inclusive.
    pub fn depth(&self) -> usize {
        let left = self.left.as_ref().map(|v| v.depth()).unwrap_or_default();
        let right = self.right.as_ref().map(|v| v.depth()).unwrap_or_default();
        1 + left.max(right)
    }

    /// The number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        1 + self.left.as_ref().map(|v| v.node_count()).unwrap_or_default()
            + self.right.as_ref().map(|v| v.node_count()).unwrap_or_default()
    }

    /// Render this subtree as a Graphviz DOT digraph via its [`Display`]
    /// impl.
    ///
    /// [`Display`]: std::fmt::Display
    pub fn dot(&self) -> Dot<'_, K, V> {
        Dot::new(self)
    }
}
