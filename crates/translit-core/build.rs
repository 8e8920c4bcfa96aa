const TABLES: &[(&str, &str)] = &[(
    "src/table/default_ala_lc_ru.toml",
    include_str!("src/table/default_ala_lc_ru.toml"),
)];

fn main() {
    for (path, content) in TABLES {
        println!("cargo:rerun-if-changed={path}");
        // Shape and invariants are checked by `parse_table_toml`; this only
        // rejects a file that is not TOML at all.
        if let Err(e) = content.parse::<toml::Table>() {
            panic!("{path} contains invalid TOML: {e}");
        }
    }
}
