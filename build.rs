use std::fs;

fn main() {
    // The embedded default config ([paths] content/public/template and
    // [render] placeholders) must at least be valid TOML; its shape against
    // `Config` is checked by the config tests.
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={config_path}");

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => panic!("cannot read {config_path}: {e}"),
    };

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("{config_path} is not valid TOML: {e}"),
    };

    for section in ["paths", "render"] {
        if !table.get(section).is_some_and(toml::Value::is_table) {
            panic!("{config_path} is missing the [{section}] table");
        }
    }
}
