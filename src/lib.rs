//! This crate exposes three independent generic containers: an ordered
//! binary search tree, a bounded array list, and a prefix trie.
//!
//! ## Binary Search Tree
//!
//! [`tree::Tree`] stores elements under a total order. For every node, the
//! elements in its left subtree compare less than or equal to its own
//! element and the elements in its right subtree compare strictly greater.
//! Searching therefore takes `O(height)`, and visiting the left subtree,
//! then the node, then the right subtree yields the elements in sorted
//! order. The tree performs no rebalancing, so its shape (and its height)
//! depends entirely on the insertion order.
//!
//! ## Bounded Array List
//!
//! [`array::ArrayList`] is a contiguous sequence with a capacity fixed at
//! construction. Insertions shift trailing elements right and removals
//! shift them left; exceeding the capacity or indexing past the live
//! elements is reported through [`array::ListError`] rather than by growing
//! the storage.
//!
//! ## Prefix Trie
//!
//! [`trie::Trie`] maps words to the position and length of an occurrence,
//! one character per edge, and keeps a per-node count of the words passing
//! through that node so that prefix frequencies are a single walk away.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod array;
pub mod tree;
pub mod trie;

#[cfg(test)]
mod test;
