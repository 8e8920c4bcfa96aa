use serde::Deserialize;

use super::{Table, TableError};

pub const DEFAULT_TOML: &str = include_str!("default_ala_lc_ru.toml");

#[derive(Deserialize)]
struct TableConfig {
    #[serde(default)]
    name: String,
    mappings: Mappings,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Mappings {
    #[serde(alias = "source")]
    cyr: Vec<String>,
    #[serde(alias = "target")]
    lat: Vec<String>,
}

/// Parse TOML text into a verified `Table`.
pub fn parse_table_toml(toml_str: &str) -> Result<Table, TableError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if config.mappings.cyr.is_empty() && config.mappings.lat.is_empty() {
        return Err(TableError::NoMappings);
    }

    Table::new(config.name, config.mappings.cyr, config.mappings.lat)
}
