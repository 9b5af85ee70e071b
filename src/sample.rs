/// Starter document covering every block and run kind.
pub static SAMPLE: &str = include_str!("sample.md");

#[cfg(test)]
mod tests {
    use super::SAMPLE;
    use crate::block::{Block, RunKind};
    use crate::parse;

    #[test]
    fn sample_covers_every_kind() {
        let document = parse(SAMPLE);
        let kinds: Vec<RunKind> = document
            .iter()
            .flat_map(|block| block.runs().iter().map(|run| run.kind))
            .collect();
        for kind in [
            RunKind::Normal,
            RunKind::Bold,
            RunKind::Italic,
            RunKind::BoldItalic,
            RunKind::InlineCode,
        ] {
            assert!(kinds.contains(&kind), "sample has no {kind:?} run");
        }
        assert!(document.iter().any(|block| matches!(block, Block::CodeBlock { .. })));
    }
}
