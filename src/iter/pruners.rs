use std::borrow::Borrow;

use crate::node::Node;

use super::pruning_iter::PruningOracle;

/// Selects keys starting with `prefix`.
///
/// All keys sharing a prefix are contiguous in the key order, beginning at or
/// after the prefix itself.
#[derive(Debug)]
pub(crate) struct PrefixPruner<'a> {
    prefix: &'a str,
}

impl<'a> PrefixPruner<'a> {
    pub(crate) fn new(prefix: &'a str) -> Self {
        Self { prefix }
    }
}

impl<K, V> PruningOracle<K, V> for PrefixPruner<'_>
where
    K: Borrow<str>,
{
    fn visit_left(&self, subtree_root: &Node<K, V>) -> bool {
        // Every key in the left subtree is less than this key, which is less
        // than any key that starts with the prefix.
        let key: &str = subtree_root.key().borrow();
        self.prefix <= key
    }

    fn visit_right(&self, subtree_root: &Node<K, V>) -> bool {
        // A key greater than the prefix that is not itself a match sorts
        // after every possible match, and so does its right subtree.
        let key: &str = subtree_root.key().borrow();
        self.prefix >= key || key.starts_with(self.prefix)
    }

    fn filter_yield(&self, n: &Node<K, V>) -> bool {
        let key: &str = n.key().borrow();
        key.starts_with(self.prefix)
    }
}
