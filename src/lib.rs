//! A word dictionary over an AVL-balanced ordered map.
//!
//! [`BalancedMap`] is a self-balancing binary search tree mapping unique,
//! ordered keys to values. Inserts and removals rebalance the tree with
//! rotations so its height remains logarithmic in the number of entries,
//! and string-keyed maps support ordered prefix search that skips subtrees
//! unable to hold a match:
//!
//! ```
//! use avldict::BalancedMap;
//!
//! let mut t = BalancedMap::new();
//! t.insert("banana".to_string(), "yellow fruit");
//! t.insert("apple".to_string(), "red fruit");
//! t.insert("apricot".to_string(), "orange fruit");
//!
//! let got = t.prefix("ap").map(|(k, _v)| k.as_str()).collect::<Vec<_>>();
//! assert_eq!(got, ["apple", "apricot"]);
//! ```
//!
//! [`Dictionary`] wraps a `BalancedMap<String, String>` with the service
//! behaviour around it: words added without a meaning are resolved through
//! a [`DefinitionSource`], falling back to a sentinel meaning when the lookup
//! fails. [`Shape`] exposes the tree structure to renderers, as JSON through
//! [`serde`] or as a Graphviz digraph through [`Shape::dot()`].

mod config;
mod definition;
mod dictionary;
mod dot;
mod error;
mod iter;
mod node;
mod shape;
mod tree;

pub use config::*;
pub use definition::*;
pub use dictionary::*;
pub use dot::*;
pub use error::*;
pub use iter::OwnedIter;
pub use shape::*;
pub use tree::*;

#[cfg(test)]
mod test_utils;
