pub mod table;
pub mod trie;
pub mod unicode;
