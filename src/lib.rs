//! Cyrillic ⇄ ALA-LC Latin transliteration tables.
//!
//! The table asset, its validation, and the prefix-probe trie live in
//! `translit-core`; this crate re-exports them and owns tracing set-up.

mod trace_init;

pub use trace_init::init_tracing;
pub use translit_core::table::{
    parse_table_toml, Direction, Entry, Side, Table, TableError, DEFAULT_TOML,
};
pub use translit_core::trie::{GraphemeTrie, PrefixMatch, TrieLookupResult};
pub use translit_core::unicode;

/// The embedded ALA-LC Russian table.
pub fn ala_lc_russian() -> &'static Table {
    Table::global()
}
