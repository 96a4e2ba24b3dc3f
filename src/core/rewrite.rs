//! Source rewriting: swap the extracted text for its lookup call.

use super::extract::CallStyle;

const QUOTES: [char; 3] = ['"', '\'', '`'];

/// Replace the first occurrence of `text` in `content` with `replacement`.
///
/// For [`CallStyle::Script`] a matching pair of quotes directly around the text
/// is consumed as well, turning `"Hello"` into `this.$t("key")` rather than
/// `"this.$t("key")"`. Returns `None` when `text` does not occur.
pub fn rewrite_source(
    content: &str,
    text: &str,
    replacement: &str,
    style: CallStyle,
) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    let start = content.find(text)?;
    let end = start + text.len();

    let (start, end) = match style {
        CallStyle::Script => widen_to_quotes(content, start, end),
        CallStyle::Template => (start, end),
    };

    let mut result = String::with_capacity(content.len() + replacement.len());
    result.push_str(&content[..start]);
    result.push_str(replacement);
    result.push_str(&content[end..]);
    Some(result)
}

fn widen_to_quotes(content: &str, start: usize, end: usize) -> (usize, usize) {
    let before = content[..start].chars().next_back();
    let after = content[end..].chars().next();
    match (before, after) {
        (Some(open), Some(close)) if open == close && QUOTES.contains(&open) => {
            (start - open.len_utf8(), end + close.len_utf8())
        }
        _ => (start, end),
    }
}
