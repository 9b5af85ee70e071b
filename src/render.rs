use crate::block::{Block, Document, Run, RunKind};
use crate::config::{OutputConfig, OutputFormat};

const INDENT: &str = "  ";

/// Render a document as an indented outline, one line per block and run.
pub fn document_to_tree(document: &Document) -> String {
    let mut out = String::new();
    for block in document {
        emit_block(block, &mut out);
    }
    out
}

/// Render a document in the configured output format.
pub fn render(document: &Document, config: &OutputConfig) -> Result<String, serde_json::Error> {
    match config.format {
        OutputFormat::Tree => Ok(document_to_tree(document)),
        OutputFormat::Json => {
            let mut json = if config.pretty {
                serde_json::to_string_pretty(document)?
            } else {
                serde_json::to_string(document)?
            };
            json.push('\n');
            Ok(json)
        }
    }
}

fn emit_block(block: &Block, out: &mut String) {
    match block {
        Block::Heading { level, runs } => {
            out.push_str(&format!("heading[{level}]\n"));
            runs_to_tree(runs, out);
        }
        Block::Paragraph { runs } => {
            out.push_str("paragraph\n");
            runs_to_tree(runs, out);
        }
        Block::CodeBlock { text } => {
            out.push_str(&format!("code-block {text:?}\n"));
        }
    }
}

fn runs_to_tree(runs: &[Run], out: &mut String) {
    for run in runs {
        out.push_str(INDENT);
        out.push_str(kind_label(run.kind));
        out.push_str(&format!(" {:?}\n", run.text));
    }
}

fn kind_label(kind: RunKind) -> &'static str {
    match kind {
        RunKind::Normal => "normal",
        RunKind::Bold => "bold",
        RunKind::Italic => "italic",
        RunKind::BoldItalic => "bold-italic",
        RunKind::InlineCode => "code",
    }
}
