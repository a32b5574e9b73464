use crate::node::Node;

/// A depth-first, in-order walk yielding every [`Node`] of a subtree in
/// ascending key order.
///
/// The stack holds the nodes whose left subtree is being (or has been)
/// walked but which have not been yielded yet, so its depth never exceeds the
/// tree height. Popping a node yields it and then stacks the left spine of
/// its right child.
#[derive(Debug)]
pub(crate) struct RefIter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> RefIter<'a, K, V> {
    pub(crate) fn new(root: &'a Node<K, V>) -> Self {
        let mut this = Self { stack: vec![] };

        // Descend down the left side of the tree.
        this.push_subtree(root);

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a Node<K, V>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, K, V> Iterator for RefIter<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        if let Some(right) = v.right() {
            self.push_subtree(right);
        }

        Some(v)
    }
}
