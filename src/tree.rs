use std::borrow::Borrow;

use crate::{
    iter::{OwnedIter, PrefixPruner, PruningIter, RefIter},
    node::{height, remove_recurse, InsertResult, Node},
    shape::Shape,
};

/// An ordered map backed by an AVL tree.
///
/// Keys are unique and kept in ascending [`Ord`] order. Every insert and
/// remove rebalances the path it touched, so the tree height stays within
/// `O(log n)` of the number of entries.
#[derive(Debug, Clone)]
pub struct BalancedMap<K, V> {
    root: Option<Box<Node<K, V>>>,
    len: usize,
}

impl<K, V> Default for BalancedMap<K, V> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<K, V> BalancedMap<K, V> {
    /// Construct an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of entries in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The height of the tree, counting nodes on the longest root-to-leaf
    /// path. An empty map has a height of 0.
    pub fn height(&self) -> usize {
        height(self.root.as_deref()) as usize
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Iterate over all `(key, value)` entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.root
            .iter()
            .flat_map(|v| RefIter::new(v))
            .map(|v| (v.key(), v.value()))
    }

    /// Iterate over the keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _v)| k)
    }

    /// Iterate over the values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_k, v)| v)
    }

    /// Iterate over the entries whose key starts with `prefix`, in ascending
    /// key order.
    ///
    /// Subtrees that cannot hold a matching key are skipped. An empty
    /// `prefix` yields every entry.
    pub fn prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a K, &'a V)> + 'a
    where
        K: Borrow<str>,
    {
        self.root
            .iter()
            .flat_map(move |v| PruningIter::new(v, PrefixPruner::new(prefix)))
            .map(|v| (v.key(), v.value()))
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// Take a read-only copy of the tree structure, or [`None`] if the map is
    /// empty.
    pub fn snapshot(&self) -> Option<Shape<&K, &V>> {
        self.root.as_deref().map(Shape::from_node)
    }
}

impl<K, V> BalancedMap<K, V>
where
    K: Ord,
{
    /// Insert `value` under `key`, returning the value it replaced if `key`
    /// was already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.root {
            Some(ref mut v) => match v.insert(key, value) {
                InsertResult::Replaced(old) => Some(old),
                InsertResult::Added(_) => {
                    self.len += 1;
                    None
                }
            },
            None => {
                self.root = Some(Box::new(Node::new(key, value)));
                self.len = 1;
                None
            }
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.as_ref().and_then(|v| v.get(key))
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.as_mut().and_then(|v| v.get_mut(key))
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Remove `key` from the map, returning its value if it was present.
    ///
    /// Removing an absent key leaves the map unchanged.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key).map(|(_k, v)| v)
    }

    /// Remove `key` from the map, returning the stored key and value if it
    /// was present.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let v = remove_recurse(&mut self.root, key)?;
        self.len -= 1;
        Some(v)
    }
}

impl<K, V> IntoIterator for BalancedMap<K, V> {
    type Item = (K, V);
    type IntoIter = OwnedIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        OwnedIter::new(self.root)
    }
}

impl<K, V> FromIterator<(K, V)> for BalancedMap<K, V>
where
    K: Ord,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<K, V> Extend<(K, V)> for BalancedMap<K, V>
where
    K: Ord,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
