/// Marker that opens and closes a fenced region.
pub const FENCE: &str = "```";

const BLANK_LINE: &str = "\n\n";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Split a document into sections separated by blank lines.
///
/// A leading byte-order mark and all carriage returns are dropped first.
/// Blank lines between a pair of triple-backtick markers (or after an
/// unterminated opening marker) do not separate sections. Empty and whitespace-only sections are kept; deciding
/// what they mean is the classifier's job.
pub fn split_into_sections(text: &str) -> Vec<String> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let text = text.replace('\r', "");
    let mut sections = Vec::new();
    let mut current = String::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(offset) = text[pos..].find(FENCE) else {
            push_plain(&text[pos..], &mut current, &mut sections);
            break;
        };

        let open = pos + offset;
        push_plain(&text[pos..open], &mut current, &mut sections);

        // The fenced region keeps both markers and every blank line inside.
        let body = open + FENCE.len();
        let close = text[body..]
            .find(FENCE)
            .map_or(text.len(), |o| body + o + FENCE.len());
        current.push_str(&text[open..close]);
        pos = close;
    }

    sections.push(current);
    sections
}

/// Append unfenced text, starting a new section at every blank line.
fn push_plain(plain: &str, current: &mut String, sections: &mut Vec<String>) {
    let mut pieces = plain.split(BLANK_LINE);
    if let Some(first) = pieces.next() {
        current.push_str(first);
    }
    for piece in pieces {
        sections.push(std::mem::take(current));
        current.push_str(piece);
    }
}
