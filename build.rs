use std::fs;

const CONFIG_PATH: &str = "src/default_config.toml";
const SAMPLE_PATH: &str = "src/sample.md";
const FORMATS: [&str; 2] = ["tree", "json"];

fn main() {
    println!("cargo:rerun-if-changed={}", CONFIG_PATH);
    println!("cargo:rerun-if-changed={}", SAMPLE_PATH);

    let content = fs::read_to_string(CONFIG_PATH).expect("Failed to read default_config.toml");
    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    // The compiled-in defaults must name a format the inspector can print.
    let format = table
        .get("output")
        .and_then(|output| output.get("format"))
        .and_then(|format| format.as_str());
    if let Some(format) = format {
        if !FORMATS.contains(&format) {
            panic!("default_config.toml: unknown output format {:?}", format);
        }
    }

    let sample = fs::read_to_string(SAMPLE_PATH).expect("Failed to read sample.md");
    if sample.trim().is_empty() {
        panic!("sample.md must not be empty");
    }
}
