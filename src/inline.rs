use crate::block::{Run, RunKind};

/// Delimiters in precedence order. `**` and `*` are prefixes of `***`, so the
/// longer markers must win ties at the same offset.
const DELIMITERS: [(&str, RunKind); 4] = [
    ("***", RunKind::BoldItalic),
    ("**", RunKind::Bold),
    ("*", RunKind::Italic),
    ("```", RunKind::InlineCode),
];

/// Split heading or paragraph text into styled runs.
///
/// The scan is greedy: the leftmost delimiter opens a run which closes at the
/// next occurrence of the same delimiter, or at end of text when there is
/// none. Runs never nest, and delimiter characters are not kept.
pub fn tokenize(text: &str) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some((open, delimiter, kind)) = next_delimiter(text, pos) else {
            runs.push(Run::normal(&text[pos..]));
            break;
        };

        if open > pos {
            runs.push(Run::normal(&text[pos..open]));
        }

        let mut start = open + delimiter.len();
        // The line break right after an opening fence is not part of the code.
        if kind == RunKind::InlineCode && text[start..].starts_with('\n') {
            start += 1;
        }

        let close = text[start..]
            .find(delimiter)
            .map_or(text.len(), |offset| start + offset);
        if close > start {
            runs.push(Run::new(kind, &text[start..close]));
        }

        pos = close + delimiter.len();
    }

    runs
}

/// Earliest delimiter at or after `from`; ties go to the higher precedence.
fn next_delimiter(text: &str, from: usize) -> Option<(usize, &'static str, RunKind)> {
    let rest = &text[from..];
    DELIMITERS
        .iter()
        .filter_map(|&(delimiter, kind)| {
            rest.find(delimiter).map(|offset| (from + offset, delimiter, kind))
        })
        .min_by_key(|&(position, ..)| position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn run(kind: RunKind, text: &str) -> Run {
        Run::new(kind, text)
    }

    #[test]
    fn plain_text() {
        assert_eq!(tokenize("hello world"), vec![Run::normal("hello world")]);
    }

    #[test]
    fn empty_text() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn bold_italic_wins_over_bold() {
        assert_eq!(tokenize("***x***"), vec![run(RunKind::BoldItalic, "x")]);
    }

    #[test]
    fn mixed_styles() {
        assert_eq!(
            tokenize("**a** *b*"),
            vec![
                run(RunKind::Bold, "a"),
                Run::normal(" "),
                run(RunKind::Italic, "b"),
            ]
        );
    }

    #[rstest]
    #[case("*a", vec![run(RunKind::Italic, "a")])]
    #[case("x **bold", vec![Run::normal("x "), run(RunKind::Bold, "bold")])]
    #[case("```code", vec![run(RunKind::InlineCode, "code")])]
    fn unterminated_runs_to_end(#[case] input: &str, #[case] expected: Vec<Run>) {
        assert_eq!(tokenize(input), expected);
    }

    #[rstest]
    #[case("**")]
    #[case("``````")]
    #[case("*")]
    fn empty_spans_emit_nothing(#[case] input: &str) {
        assert!(tokenize(input).is_empty());
    }

    #[test]
    fn four_asterisks_read_as_bold_italic_opener() {
        assert_eq!(tokenize("****"), vec![run(RunKind::BoldItalic, "*")]);
    }

    #[test]
    fn fence_skips_first_newline_only() {
        assert_eq!(
            tokenize("```\n\nlet x = 1;\n```"),
            vec![run(RunKind::InlineCode, "\nlet x = 1;\n")]
        );
    }

    #[test]
    fn inline_code_between_text() {
        assert_eq!(
            tokenize("call ```f()``` now"),
            vec![
                Run::normal("call "),
                run(RunKind::InlineCode, "f()"),
                Run::normal(" now"),
            ]
        );
    }

    #[test]
    fn leftmost_delimiter_wins_regardless_of_kind() {
        // Delimiters inside an open run of another kind are not protected.
        assert_eq!(tokenize("```a*b```"), vec![run(RunKind::InlineCode, "a*b")]);
        assert_eq!(
            tokenize("x*```y```*"),
            vec![Run::normal("x"), run(RunKind::Italic, "```y```")]
        );
    }

    #[test]
    fn mismatched_close_reads_as_shorter_delimiter() {
        // `**a*` opens bold and never finds another `**`.
        assert_eq!(tokenize("**a*"), vec![run(RunKind::Bold, "a*")]);
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(
            tokenize("héllo *wörld* ✓"),
            vec![
                Run::normal("héllo "),
                run(RunKind::Italic, "wörld"),
                Run::normal(" ✓"),
            ]
        );
    }
}
