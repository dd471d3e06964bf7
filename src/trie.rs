//! A prefix trie keyed by Unicode characters. Each inserted word records
//! the position and length of an occurrence (for instance, its location in
//! some larger text), and every node counts the words whose path passes
//! through it, so prefix frequencies cost one walk.
//!
//! Strings are iterated with `chars()`: one Unicode scalar value per edge,
//! no normalization. Callers should normalize inputs when canonical
//! equivalence matters.
//!
//! # Examples
//!
//! ```
//! use structures::trie::{Span, Trie};
//!
//! let mut trie = Trie::new();
//! trie.insert("cat", 0, 3);
//! trie.insert("car", 4, 3);
//! trie.insert("cart", 8, 4);
//!
//! assert_eq!(trie.count_prefix("ca"), 3);
//! assert_eq!(trie.count_prefix("car"), 2);
//! assert_eq!(trie.search("cat"), Some(Span { position: 0, length: 3 }));
//!
//! // "ca" is a prefix of stored words but not a word itself.
//! assert_eq!(trie.search("ca"), None);
//! ```

use std::collections::HashMap;

/// Where a word occurs: the offset it starts at and its length. Stored by
/// [`Trie::insert`] and handed back by [`Trie::search`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    /// Offset of the occurrence.
    pub position: usize,
    /// Length of the occurrence.
    pub length: usize,
}

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    /// Present iff a word ends at this node.
    span: Option<Span>,
    /// How many insert calls walked through or ended at this node.
    prefix_count: usize,
}

/// A character-keyed trie mapping words to the [`Span`] of an occurrence,
/// with per-node prefix occurrence counts.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    distinct_words: usize,
}

impl Trie {
    /// Generates a new, empty `Trie`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `word` as occurring at `position` with length `length`,
    /// creating nodes along its character path as needed. Every node on
    /// the path, the root included, has its prefix count incremented.
    ///
    /// Inserting a word again overwrites its stored span without creating
    /// duplicate branches; the prefix counts still count each call.
    pub fn insert(&mut self, word: &str, position: usize, length: usize) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node.prefix_count += 1;
            node = node.children.entry(c).or_default();
        }
        node.prefix_count += 1;
        if node.span.is_none() {
            self.distinct_words += 1;
        }
        node.span = Some(Span { position, length });
    }

    /// The stored span for `word`, or `None` when `word` was never
    /// inserted. A string that is only a prefix of inserted words is not
    /// found.
    pub fn search(&self, word: &str) -> Option<Span> {
        self.walk(word)?.span
    }

    /// Whether `word` was inserted as a complete word.
    pub fn contains(&self, word: &str) -> bool {
        self.search(word).is_some()
    }

    /// How many insert calls passed a word with `prefix` as a prefix,
    /// exact matches included. The empty prefix counts every insert call.
    ///
    /// # Examples
    ///
    /// ```
    /// use structures::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("to", 0, 2);
    /// trie.insert("tea", 3, 3);
    ///
    /// assert_eq!(trie.count_prefix("t"), 2);
    /// assert_eq!(trie.count_prefix("te"), 1);
    /// assert_eq!(trie.count_prefix("x"), 0);
    /// assert_eq!(trie.count_prefix(""), 2);
    /// ```
    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.walk(prefix).map_or(0, |node| node.prefix_count)
    }

    /// The number of distinct words stored.
    pub fn len(&self) -> usize {
        self.distinct_words
    }

    /// Whether no words are stored.
    pub fn is_empty(&self) -> bool {
        self.distinct_words == 0
    }

    /// The node at the end of `path`'s character chain, if every link
    /// exists.
    fn walk(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in path.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}
