use serde::Serialize;

/// Highest heading level; deeper markers collapse into it.
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Style of an inline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunKind {
    Normal,
    Bold,
    Italic,
    BoldItalic,
    InlineCode,
}

impl RunKind {
    /// The source delimiter that produces this kind of run.
    pub fn delimiter(self) -> &'static str {
        match self {
            RunKind::Normal => "",
            RunKind::Bold => "**",
            RunKind::Italic => "*",
            RunKind::BoldItalic => "***",
            RunKind::InlineCode => "```",
        }
    }
}

/// A contiguous span of text within a heading or paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    pub kind: RunKind,
    pub text: String,
}

impl Run {
    pub fn new(kind: RunKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn normal(text: impl Into<String>) -> Self {
        Self::new(RunKind::Normal, text)
    }
}

/// Block-level elements parsed from a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Heading { level: u8, runs: Vec<Run> },
    Paragraph { runs: Vec<Run> },
    CodeBlock { text: String },
}

impl Block {
    /// Build a heading, clamping the marker count into `1..=MAX_HEADING_LEVEL`.
    pub fn heading(marker_count: usize, runs: Vec<Run>) -> Self {
        let level = marker_count.clamp(1, MAX_HEADING_LEVEL as usize) as u8;
        Block::Heading { level, runs }
    }

    /// Inline runs of the block. Code blocks have none.
    pub fn runs(&self) -> &[Run] {
        match self {
            Block::Heading { runs, .. } | Block::Paragraph { runs } => runs,
            Block::CodeBlock { .. } => &[],
        }
    }
}

/// The parsed document: blocks in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Text a reader may copy, in document order: every code block and
    /// every inline code run.
    pub fn copyable_snippets(&self) -> impl Iterator<Item = &str> + '_ {
        self.blocks.iter().flat_map(|block| {
            let code = match block {
                Block::CodeBlock { text } => Some(text.as_str()),
                _ => None,
            };
            code.into_iter().chain(
                block
                    .runs()
                    .iter()
                    .filter(|run| run.kind == RunKind::InlineCode)
                    .map(|run| run.text.as_str()),
            )
        })
    }
}

impl IntoIterator for Document {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_level_is_clamped() {
        assert_eq!(
            Block::heading(9, vec![]),
            Block::Heading {
                level: 6,
                runs: vec![]
            }
        );
        assert_eq!(
            Block::heading(0, vec![]),
            Block::Heading {
                level: 1,
                runs: vec![]
            }
        );
    }

    #[test]
    fn code_block_has_no_runs() {
        let block = Block::CodeBlock {
            text: "x\n".to_string(),
        };
        assert!(block.runs().is_empty());
    }

    #[test]
    fn snippets_in_document_order() {
        let doc = Document::new(vec![
            Block::Paragraph {
                runs: vec![
                    Run::normal("see "),
                    Run::new(RunKind::InlineCode, "a()"),
                    Run::new(RunKind::Bold, "b"),
                ],
            },
            Block::CodeBlock {
                text: "    c\n".to_string(),
            },
            Block::heading(2, vec![Run::new(RunKind::InlineCode, "d")]),
        ]);
        let snippets: Vec<&str> = doc.copyable_snippets().collect();
        assert_eq!(snippets, vec!["a()", "    c\n", "d"]);
    }

    #[test]
    fn delimiters_rebuild_closed_runs() {
        let runs = crate::tokenize("**a** *b* ***c*** ```d```");
        let rebuilt: String = runs
            .iter()
            .map(|run| format!("{0}{1}{0}", run.kind.delimiter(), run.text))
            .collect();
        assert_eq!(rebuilt, "**a** *b* ***c*** ```d```");
    }

    #[test]
    fn serializes_tagged() {
        let block = Block::heading(2, vec![Run::new(RunKind::BoldItalic, "x")]);
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(
            json,
            r#"{"type":"heading","level":2,"runs":[{"kind":"bold_italic","text":"x"}]}"#
        );
    }
}
