use crate::node::Node;

pub(crate) trait PruningOracle<K, V> {
    /// Returns true when the left subtree of `subtree_root` may contain a
    /// match and should be descended into.
    fn visit_left(&self, subtree_root: &Node<K, V>) -> bool;

    /// Returns true when the right subtree of `subtree_root` may contain a
    /// match and should be descended into.
    fn visit_right(&self, subtree_root: &Node<K, V>) -> bool;

    /// Returns true if `n` satisfies the pruning logic and should be yielded to
    /// the caller.
    fn filter_yield(&self, n: &Node<K, V>) -> bool;
}

/// An [`Iterator`] that performs a depth-first, in-order walk of a subtree and
/// yields [`Node`] instances that match a pruning predicate.
///
/// Subtrees rejected by the [`PruningOracle`] are never visited.
#[derive(Debug)]
pub(crate) struct PruningIter<'a, K, V, T> {
    stack: Vec<&'a Node<K, V>>,
    pruner: T,
}

impl<'a, K, V, T> PruningIter<'a, K, V, T>
where
    T: PruningOracle<K, V>,
{
    pub(crate) fn new(root: &'a Node<K, V>, pruner: T) -> Self {
        let mut this = Self {
            stack: vec![],
            pruner,
        };

        // Descend down the left side of the tree, pushing all the internal
        // nodes onto the stack until the left-most candidate is reached.
        this.push_subtree(root);

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a Node<K, V>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = v.left().filter(|_| self.pruner.visit_left(v));
        }
    }
}

impl<'a, K, V, T> Iterator for PruningIter<'a, K, V, T>
where
    T: PruningOracle<K, V>,
{
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let v = self.stack.pop()?;

            // Push the right subtree to be visited next, unless it is pruned.
            if let Some(right) = v.right().filter(|_| self.pruner.visit_right(v)) {
                self.push_subtree(right);
            }

            // Yield this node if it satisfies the pruning predicate.
            if self.pruner.filter_yield(v) {
                return Some(v);
            }
        }
    }
}
