use std::{borrow::Borrow, cmp::Ordering};

/// The outcome of inserting a key into the subtree rooted at a [`Node`].
#[derive(Debug)]
pub(crate) enum InsertResult<V> {
    /// The key was already present and the previous value was replaced.
    ///
    /// The tree structure is unchanged.
    Replaced(V),

    /// A new node was linked into the subtree.
    ///
    /// Carries the ordering of the inserted key relative to the key of the
    /// node that returned it, which the parent uses to select a rotation.
    Added(Ordering),
}

/// Selects the tie-break table [`rebalance()`] applies to a node whose
/// balance factor reached ±2.
#[derive(Debug, Clone, Copy)]
enum Trigger {
    /// A new key was added beneath the heavy child, ordered relative to that
    /// child's key as given.
    Inserted(Ordering),

    /// A node was unlinked from the subtree.
    Removed,
}

impl Trigger {
    /// Returns true when a left-heavy `n` is fixed with a single right
    /// rotation, false when it requires a left-right double rotation.
    fn single_right<K, V>(self, n: &Node<K, V>) -> bool {
        match self {
            Self::Inserted(Ordering::Less) => true,
            Self::Inserted(Ordering::Greater) => false,
            Self::Inserted(Ordering::Equal) | Self::Removed => {
                n.left().map(balance).unwrap_or_default() >= 0
            }
        }
    }

    /// Returns true when a right-heavy `n` is fixed with a single left
    /// rotation, false when it requires a right-left double rotation.
    fn single_left<K, V>(self, n: &Node<K, V>) -> bool {
        match self {
            Self::Inserted(Ordering::Greater) => true,
            Self::Inserted(Ordering::Less) => false,
            Self::Inserted(Ordering::Equal) | Self::Removed => {
                n.right().map(balance).unwrap_or_default() <= 0
            }
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    /// Child nodes pointers.
    left: Option<Box<Node<K, V>>>,
    right: Option<Box<Node<K, V>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, and an absent child a height of 0.
    ///
    /// A u8 holds a maximum value of 255, far beyond the height of any
    /// balanced tree that fits in memory.
    height: u8,

    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            height: 1,
        }
    }

    pub(crate) fn insert(self: &mut Box<Self>, key: K, value: V) -> InsertResult<V>
    where
        K: Ord,
    {
        let side = key.cmp(&self.key);
        let child = match side {
            Ordering::Less => &mut self.left,
            Ordering::Equal => {
                return InsertResult::Replaced(std::mem::replace(&mut self.value, value));
            }
            Ordering::Greater => &mut self.right,
        };

        let child_side = match child {
            Some(v) => match v.insert(key, value) {
                // The tree structure has not been modified, so it does not
                // require rebalancing.
                InsertResult::Replaced(old) => return InsertResult::Replaced(old),
                InsertResult::Added(v) => v,
            },
            None => {
                // Insert the value as a new immediate descendent of self.
                *child = Some(Box::new(Self::new(key, value)));

                // A single new leaf changes the height difference at this
                // node by at most 1 from a balanced state, so only the height
                // needs updating.
                update_height(self);
                return InsertResult::Added(side);
            }
        };

        rebalance(self, Trigger::Inserted(child_side));

        InsertResult::Added(side)
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = match key.cmp(self.key.borrow()) {
            Ordering::Less => self.left(),
            Ordering::Equal => return Some(&self.value),
            Ordering::Greater => self.right(),
        }?;

        node.get(key)
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = match key.cmp(self.key.borrow()) {
            Ordering::Less => self.left.as_deref_mut(),
            Ordering::Equal => return Some(&mut self.value),
            Ordering::Greater => self.right.as_deref_mut(),
        }?;

        node.get_mut(key)
    }

    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Explode this [`Node`] into the key and value it contains.
    pub(crate) fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

pub(crate) fn height<K, V>(n: Option<&Node<K, V>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

fn update_height<K, V>(n: &mut Node<K, V>) {
    n.height = 1 + height(n.left()).max(height(n.right()));
}

/// Compute the "balance factor" of the subtree rooted at `n`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
fn balance<K, V>(n: &Node<K, V>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.left()) as i16 - height(n.right()) as i16) as i8
}

/// Recompute the height of `n` after one of its subtrees changed, and restore
/// the AVL balance of the subtree rooted at `n` using the tie-break rules of
/// `trigger`.
fn rebalance<K, V>(n: &mut Box<Node<K, V>>, trigger: Trigger) {
    update_height(n);

    match balance(n) {
        // Left-heavy
        2.. if trigger.single_right(n) => rotate_right(n),
        2.. => {
            if let Some(l) = n.left.as_mut() {
                rotate_left(l);
            }
            rotate_right(n);
        }
        // Right-heavy
        ..=-2 if trigger.single_left(n) => rotate_left(n),
        ..=-2 => {
            if let Some(r) = n.right.as_mut() {
                rotate_right(r);
            }
            rotate_left(n);
        }
        -1..=1 => { /* The tree is well balanced */ }
    }

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1.
    debug_assert!(balance(n).abs() <= 1);
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<K, V>(x: &mut Box<Node<K, V>>) {
    let mut p = x.right.take().unwrap();
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<K, V>(y: &mut Box<Node<K, V>>) {
    let mut p = y.left.take().unwrap();
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);
}

/// Unlinks the node holding the minimum key in the subtree rooted at `slot`,
/// linking its right subtree (if any) in its place and rebalancing every
/// ancestor on the way back up.
///
/// Returns [`None`] if `slot` is empty.
fn extract_subtree_min<K, V>(slot: &mut Option<Box<Node<K, V>>>) -> Option<Box<Node<K, V>>> {
    let node = slot.as_mut()?;

    if node.left.is_some() {
        // Descend left to the end of the left edge.
        let min = extract_subtree_min(&mut node.left);
        rebalance(node, Trigger::Removed);
        return min;
    }

    // This node is the minimum.
    //
    // ```text
    //                 6
    //                / \
    //    here ->   <4>   7
    //                \
    //                 5
    // ```
    //
    // It has no left child, so its right subtree (if any) takes its place.
    let mut min = slot.take()?;
    *slot = min.right.take();

    // Invariant: the extracted node contains no subtree.
    debug_assert!(min.left.is_none());
    debug_assert!(min.right.is_none());

    Some(min)
}

/// Remove the node holding `key` from the subtree rooted at `slot`, if it
/// exists, leaving the rebalanced subtree root in `slot`.
///
/// Returns [`None`] if the key is not found.
pub(crate) fn remove_recurse<K, V, Q>(
    slot: &mut Option<Box<Node<K, V>>>,
    key: &Q,
) -> Option<(K, V)>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let node = slot.as_mut()?;

    let removed = match key.cmp(node.key.borrow()) {
        Ordering::Less => remove_recurse(&mut node.left, key)?,
        Ordering::Greater => remove_recurse(&mut node.right, key)?,
        Ordering::Equal if node.left.is_some() && node.right.is_some() => {
            // This node holds the key and has two children:
            //
            //                          +----------+
            //                     +----|   node   |----+
            //                     |    +----------+    |
            //                     v                    v
            //               +-----------+       +------------+
            //               | node.left |       | node.right |
            //               +-----------+       +------------+
            //
            // The in-order successor (the minimum of "node.right") is
            // unlinked from the right subtree and its key and value take the
            // place of those in "node", preserving the binary search
            // property without relinking "node" itself.
            let mut successor = extract_subtree_min(&mut node.right)?;
            std::mem::swap(&mut node.key, &mut successor.key);
            std::mem::swap(&mut node.value, &mut successor.value);

            successor.into_tuple()
        }
        Ordering::Equal => {
            // This node holds the key and has at most one child, which
            // replaces it. The child subtree is already balanced.
            let mut old = slot.take()?;
            *slot = old.take_left().or_else(|| old.take_right());

            return Some(old.into_tuple());
        }
    };

    if let Some(node) = slot.as_mut() {
        rebalance(node, Trigger::Removed);
    }

    Some(removed)
}
