use crate::block::{Block, Document};
use crate::inline::tokenize;
use crate::sections::split_into_sections;

const CODE_INDENT: &str = "    ";

/// Parse source text into a document of blocks.
pub fn parse(source: &str) -> Document {
    let sections = split_into_sections(source);
    let section_count = sections.len();
    let blocks: Vec<Block> = sections
        .iter()
        .filter_map(|section| classify_section(section))
        .collect();

    log::debug!(
        "parsed {} bytes into {} sections and {} blocks",
        source.len(),
        section_count,
        blocks.len()
    );

    Document::new(blocks)
}

/// Decide what a single section is.
///
/// Headings are checked first, then indented code blocks, and anything else
/// with visible content is a paragraph. Blank sections produce nothing.
pub fn classify_section(section: &str) -> Option<Block> {
    let trimmed = section.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(heading) = heading(trimmed) {
        return Some(heading);
    }

    if section.starts_with(CODE_INDENT) || section.starts_with('\t') {
        let mut text = section.to_string();
        text.push('\n');
        return Some(Block::CodeBlock { text });
    }

    Some(Block::Paragraph {
        runs: tokenize(trimmed),
    })
}

fn heading(trimmed: &str) -> Option<Block> {
    if !trimmed.starts_with('#') {
        return None;
    }
    let content = trimmed.trim_start_matches('#');
    let marker_count = trimmed.len() - content.len();
    Some(Block::heading(marker_count, tokenize(content.trim_start())))
}
