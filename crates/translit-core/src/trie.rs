//! Prefix-probe trie over a table's source keys.
//!
//! Keys are walked by `char`, so a Latin cluster with a combining mark
//! (`"t\u{361}s"`) is one path of three edges. `longest_prefix` is the probe
//! a greedy longest-match consumer needs at each input position.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{debug, debug_span};

use crate::table::Table;

#[derive(Debug, PartialEq)]
pub enum TrieLookupResult {
    None,
    Prefix,
    Exact(String),
    ExactAndPrefix(String),
}

/// The longest source key found at the start of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixMatch<'a> {
    /// Byte length of the matched key within the input.
    pub len: usize,
    /// Position of the entry in the table.
    pub index: usize,
    pub target: &'a str,
}

struct Node {
    children: HashMap<char, Node>,
    entry: Option<usize>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            entry: None,
        }
    }

    fn count(&self) -> usize {
        1 + self.children.values().map(Node::count).sum::<usize>()
    }
}

pub struct GraphemeTrie {
    root: Node,
    targets: Vec<String>,
}

impl GraphemeTrie {
    pub fn build(table: &Table) -> Self {
        let _span = debug_span!("trie_build", table = table.name()).entered();
        let mut trie = GraphemeTrie {
            root: Node::new(),
            targets: table.target().to_vec(),
        };
        for entry in table.entries() {
            trie.insert(entry.source, entry.index);
        }
        debug!(nodes = trie.root.count());
        trie
    }

    /// Get or initialize the trie over `Table::global()`.
    pub fn global() -> &'static GraphemeTrie {
        static INSTANCE: OnceLock<GraphemeTrie> = OnceLock::new();
        INSTANCE.get_or_init(|| GraphemeTrie::build(Table::global()))
    }

    pub fn lookup(&self, key: &str) -> TrieLookupResult {
        let Some(node) = self.find(key) else {
            return TrieLookupResult::None;
        };
        let has_children = !node.children.is_empty();
        match node.entry {
            Some(i) if has_children => TrieLookupResult::ExactAndPrefix(self.targets[i].clone()),
            Some(i) => TrieLookupResult::Exact(self.targets[i].clone()),
            None if has_children => TrieLookupResult::Prefix,
            None => TrieLookupResult::None,
        }
    }

    /// Longest key that is a prefix of `input`.
    pub fn longest_prefix(&self, input: &str) -> Option<PrefixMatch<'_>> {
        let mut node = &self.root;
        let mut best = None;
        for (pos, c) in input.char_indices() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(i) = node.entry {
                best = Some(PrefixMatch {
                    len: pos + c.len_utf8(),
                    index: i,
                    target: self.targets[i].as_str(),
                });
            }
        }
        best
    }

    fn find(&self, key: &str) -> Option<&Node> {
        let mut node = &self.root;
        for c in key.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    fn insert(&mut self, key: &str, index: usize) {
        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_insert_with(Node::new);
        }
        node.entry = Some(index);
    }
}
