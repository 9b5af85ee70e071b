mod block;
mod config;
mod error;
mod inline;
mod parser;
mod render;
mod sample;
mod sections;
mod session;

pub use block::{Block, Document, MAX_HEADING_LEVEL, Run, RunKind};
pub use config::{Config, InputConfig, OutputConfig, OutputFormat};
pub use error::{CliError, ConfigError};
pub use inline::tokenize;
pub use parser::classify_section;
pub use render::{document_to_tree, render};
pub use sample::SAMPLE;
pub use sections::split_into_sections;
pub use session::{ViewMode, ViewState};

/// Parse source text into a document of headings, paragraphs and code blocks.
///
/// Never fails: malformed markup degrades to paragraph text.
pub fn parse(source: &str) -> Document {
    parser::parse(source)
}

/// Parse source text and render it with the given output settings.
pub fn parse_and_render(source: &str, config: &OutputConfig) -> Result<String, serde_json::Error> {
    let document = parse(source);
    render::render(&document, config)
}
