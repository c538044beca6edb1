//! Prefix tree over dictionary words
//!
//! Nodes live in a single arena and refer to their children by index, so the
//! whole structure is one flat allocation with no shared ownership. Each node
//! keeps a short list of `(letter, child)` edges; at most 26 per node.

/// Handle to a node in the trie arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

/// Handle to a word in the owning dictionary's word list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordId(pub(crate) u32);

impl WordId {
    /// Index into the dictionary word list
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: Vec<(u8, NodeId)>,
    terminal: Option<WordId>,
}

/// Arena-backed prefix tree
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Trie {
    const ROOT: NodeId = NodeId(0);

    /// Create an empty trie holding only the root
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// The root node (empty prefix)
    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Number of nodes, root included
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Insert a word, marking its final node with `id`
    ///
    /// # Panics
    /// Panics if the arena grows past `u32::MAX` nodes.
    pub fn insert(&mut self, word: &str, id: WordId) {
        let mut node = Self::ROOT;
        for &letter in word.as_bytes() {
            node = match self.child(node, letter) {
                Some(next) => next,
                None => self.add_child(node, letter),
            };
        }
        self.nodes[node.0 as usize].terminal = Some(id);
    }

    fn add_child(&mut self, parent: NodeId, letter: u8) -> NodeId {
        let id = NodeId(
            u32::try_from(self.nodes.len()).expect("trie exceeds u32::MAX nodes"),
        );
        self.nodes.push(TrieNode::default());
        self.nodes[parent.0 as usize].children.push((letter, id));
        id
    }

    /// Follow the edge labelled `letter` out of `node`
    #[inline]
    #[must_use]
    pub fn child(&self, node: NodeId, letter: u8) -> Option<NodeId> {
        self.nodes[node.0 as usize]
            .children
            .iter()
            .find_map(|&(l, child)| (l == letter).then_some(child))
    }

    /// The word ending at `node`, if any
    #[inline]
    #[must_use]
    pub fn terminal(&self, node: NodeId) -> Option<WordId> {
        self.nodes[node.0 as usize].terminal
    }

    /// Walk the whole prefix from the root
    #[must_use]
    pub fn node_at(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .as_bytes()
            .iter()
            .try_fold(Self::ROOT, |node, &letter| self.child(node, letter))
    }

    /// Check whether any word starts with `prefix`
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.node_at(prefix).is_some()
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for (i, word) in words.iter().enumerate() {
            trie.insert(word, WordId(i as u32));
        }
        trie
    }

    #[test]
    fn empty_trie_has_only_root() {
        let trie = Trie::new();
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.terminal(trie.root()), None);
        assert_eq!(trie.child(trie.root(), b'a'), None);
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let trie = build(&["den", "dens", "dent"]);
        // root + d + e + n + s + t
        assert_eq!(trie.node_count(), 6);
    }

    #[test]
    fn terminal_marks_whole_words_only() {
        let trie = build(&["dens", "node"]);
        let de = trie.node_at("de").unwrap();
        assert_eq!(trie.terminal(de), None);

        let dens = trie.node_at("dens").unwrap();
        assert_eq!(trie.terminal(dens), Some(WordId(0)));

        let node = trie.node_at("node").unwrap();
        assert_eq!(trie.terminal(node), Some(WordId(1)));
    }

    #[test]
    fn child_steps_one_letter() {
        let trie = build(&["end"]);
        let e = trie.child(trie.root(), b'e').unwrap();
        let n = trie.child(e, b'n').unwrap();
        assert_eq!(trie.child(n, b'x'), None);
        assert_eq!(trie.node_at("en"), Some(n));
    }

    #[test]
    fn prefix_queries() {
        let trie = build(&["quit"]);
        assert!(trie.has_prefix(""));
        assert!(trie.has_prefix("qu"));
        assert!(!trie.has_prefix("qi"));
        assert_eq!(trie.node_at("quits"), None);
    }
}
