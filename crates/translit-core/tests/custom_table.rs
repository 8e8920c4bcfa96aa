//! Custom table installation. Lives in its own test binary because it
//! replaces the process-wide table.

use translit_core::table::{Table, TableError};
use translit_core::trie::GraphemeTrie;

const CUSTOM_TOML: &str = r#"
name = "custom"

[mappings]
cyr = ["щ", "ж", "а"]
lat = ["shh", "zh", "a"]
"#;

#[test]
fn init_custom_replaces_default_once() {
    Table::init_custom(CUSTOM_TOML.to_string()).unwrap();

    let table = Table::global();
    assert_eq!(table.name(), "custom");
    assert_eq!(table.len(), 3);
    assert_eq!(table.lookup("щ"), Some("shh"));
    assert_eq!(table.lookup("ё"), None);

    let m = GraphemeTrie::global().longest_prefix("жа").unwrap();
    assert_eq!(m.target, "zh");

    let err = Table::init_custom(CUSTOM_TOML.to_string()).unwrap_err();
    assert!(matches!(err, TableError::AlreadyInitialized));
    assert_eq!(Table::global().name(), "custom");
}
