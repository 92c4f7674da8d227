//! Line wrapping for challenge text.

/// Wrapped lines plus the character count of the longest one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextLayout {
    /// Trimmed lines in display order.
    pub lines: Vec<String>,
    /// Longest line length, in characters.
    pub longest: usize,
}

/// Break `text` into lines for a `width`-column layout.
///
/// Tabs become two spaces. A line ends at an explicit newline, or at the first space reached
/// once the line already holds `width` characters or more; words are never split. Whitespace
/// at the start of a line is skipped, so only an explicit newline can yield an empty line.
/// Lines are trimmed. Text without a break point comes back as a single trimmed line.
pub fn break_lines(text: &str, width: usize) -> TextLayout {
    let text = text.replace('\t', "  ");
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for ch in text.chars() {
        if current.is_empty() && ch != '\n' && ch.is_whitespace() {
            continue;
        }
        let at_space = ch == ' ' && current_len >= width;
        if ch == '\n' || at_space {
            lines.push(current.trim().to_string());
            current.clear();
            current_len = 0;
            continue;
        }
        current.push(ch);
        current_len += 1;
    }

    let rest = current.trim();
    if !rest.is_empty() || lines.is_empty() {
        lines.push(rest.to_string());
    }

    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    TextLayout { lines, longest }
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
