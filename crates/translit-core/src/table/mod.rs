//! Cyrillic ⇄ Latin transliteration table.
//!
//! A `Table` is two parallel sequences, `source` and `target`, where
//! `source[i]` transliterates to `target[i]`. The ALA-LC Russian table is
//! embedded via `include_str!("default_ala_lc_ru.toml")` and served by
//! `Table::global()`, following the same OnceLock pattern as settings:
//!
//! - `Table::init_custom(toml_content)` replaces the default before the first
//!   `global()` call
//! - `Table::global()` returns `&'static Table` (lazy-init singleton)
//!
//! Declared order is preserved for positional access. Consumers that match
//! greedily should iterate `by_specificity()` or use `GraphemeTrie` instead of
//! relying on the declared order.

mod config;

pub use config::{parse_table_toml, DEFAULT_TOML};

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use tracing::{debug, debug_span};

use crate::unicode::{grapheme_weight, is_cyrillic_key};

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Which of the two parallel sequences an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => f.write_str("source"),
            Side::Target => f.write_str("target"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("[mappings] table is empty")]
    NoMappings,

    #[error("malformed table: {sources} source entries but {targets} target entries")]
    LengthMismatch { sources: usize, targets: usize },

    #[error("empty {side} entry at index {index}")]
    Empty { side: Side, index: usize },

    #[error("duplicate {side} entry {key:?} at indices {first} and {second}")]
    Duplicate {
        side: Side,
        key: String,
        first: usize,
        second: usize,
    },

    #[error("transliteration table already initialized")]
    AlreadyInitialized,
}

/// A borrowed view of one positional pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub index: usize,
    pub source: &'a str,
    pub target: &'a str,
}

/// Script direction of a table, judged from its keys and values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    CyrillicToLatin,
    LatinToCyrillic,
    Mixed,
}

#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    source: Vec<String>,
    target: Vec<String>,
    /// source key → position
    index: HashMap<String, usize>,
}

impl Table {
    /// Build a table from two parallel sequences.
    ///
    /// Fails if the sequences differ in length, if any entry is empty, or if
    /// a source key repeats. Checks run in that order and the first failure
    /// is returned.
    pub fn new(
        name: impl Into<String>,
        source: Vec<String>,
        target: Vec<String>,
    ) -> Result<Self, TableError> {
        let name = name.into();
        let _span = debug_span!("table_build", name = name.as_str()).entered();

        if source.len() != target.len() {
            return Err(TableError::LengthMismatch {
                sources: source.len(),
                targets: target.len(),
            });
        }
        for (i, (s, t)) in source.iter().zip(&target).enumerate() {
            if s.is_empty() {
                return Err(TableError::Empty {
                    side: Side::Source,
                    index: i,
                });
            }
            if t.is_empty() {
                return Err(TableError::Empty {
                    side: Side::Target,
                    index: i,
                });
            }
        }
        let index = unique_index(&source, Side::Source)?;

        debug!(entries = source.len());
        Ok(Self {
            name,
            source,
            target,
            index,
        })
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Table {
        static INSTANCE: OnceLock<Table> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            parse_table_toml(toml_str).expect("transliteration table TOML must be valid")
        })
    }

    /// Load a table definition from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, TableError> {
        let content = std::fs::read_to_string(path)?;
        parse_table_toml(&content)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn source(&self) -> &[String] {
        &self.source
    }

    pub fn target(&self) -> &[String] {
        &self.target
    }

    pub fn get(&self, index: usize) -> Option<Entry<'_>> {
        Some(Entry {
            index,
            source: self.source.get(index)?,
            target: self.target.get(index)?,
        })
    }

    /// Entries in declared order.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> + '_ {
        self.source
            .iter()
            .zip(&self.target)
            .enumerate()
            .map(|(index, (source, target))| Entry {
                index,
                source,
                target,
            })
    }

    pub fn position(&self, source: &str) -> Option<usize> {
        self.index.get(source).copied()
    }

    /// Exact lookup of a source key.
    pub fn lookup(&self, source: &str) -> Option<&str> {
        self.position(source).map(|i| self.target[i].as_str())
    }

    /// The zipped mapping, ordered by source key.
    pub fn to_map(&self) -> BTreeMap<&str, &str> {
        self.entries().map(|e| (e.source, e.target)).collect()
    }

    /// Entries ordered longest source first, ties broken by longer target.
    ///
    /// The sort is stable, so entries with equal weights keep their declared
    /// order. Length is counted with `grapheme_weight`, which ignores
    /// combining marks.
    pub fn by_specificity(&self) -> Vec<Entry<'_>> {
        let mut entries: Vec<Entry<'_>> = self.entries().collect();
        entries.sort_by(|a, b| {
            grapheme_weight(b.source)
                .cmp(&grapheme_weight(a.source))
                .then_with(|| grapheme_weight(b.target).cmp(&grapheme_weight(a.target)))
        });
        entries
    }

    /// Whether the declared source order is already non-increasing in length.
    pub fn is_longest_first(&self) -> bool {
        self.source
            .windows(2)
            .all(|w| grapheme_weight(&w[0]) >= grapheme_weight(&w[1]))
    }

    /// Check that targets are unique too, so `inverted()` drops no entry.
    pub fn verify_bijective(&self) -> Result<(), TableError> {
        unique_index(&self.target, Side::Target).map(|_| ())
    }

    /// The reverse table: `target` becomes the key side.
    ///
    /// When several sources share a target (ALA-LC gives `ъ` and `Ъ` the same
    /// prime), the first declared source wins and later ones are dropped.
    pub fn inverted(&self) -> Result<Table, TableError> {
        let mut seen = HashSet::with_capacity(self.len());
        let mut source = Vec::with_capacity(self.len());
        let mut target = Vec::with_capacity(self.len());
        for entry in self.entries() {
            if seen.insert(entry.target) {
                source.push(entry.target.to_string());
                target.push(entry.source.to_string());
            }
        }
        debug!(dropped = self.len() - source.len(), "inverted");
        let name = if self.name.is_empty() {
            String::new()
        } else {
            format!("{} (inverted)", self.name)
        };
        Table::new(name, source, target)
    }

    pub fn direction(&self) -> Direction {
        if self.is_empty() {
            Direction::Mixed
        } else if self.source.iter().all(|s| is_cyrillic_key(s))
            && !self.target.iter().any(|t| is_cyrillic_key(t))
        {
            Direction::CyrillicToLatin
        } else if self.target.iter().all(|t| is_cyrillic_key(t))
            && !self.source.iter().any(|s| is_cyrillic_key(s))
        {
            Direction::LatinToCyrillic
        } else {
            Direction::Mixed
        }
    }
}

/// Map each key to its position, rejecting the first repeated key.
fn unique_index(keys: &[String], side: Side) -> Result<HashMap<String, usize>, TableError> {
    let mut index = HashMap::with_capacity(keys.len());
    for (i, key) in keys.iter().enumerate() {
        if let Some(&first) = index.get(key.as_str()) {
            return Err(TableError::Duplicate {
                side,
                key: key.clone(),
                first,
                second: i,
            });
        }
        index.insert(key.clone(), i);
    }
    Ok(index)
}
