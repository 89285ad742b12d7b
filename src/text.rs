//! Grapheme-aware helpers for the custom prompt field
//!
//! Terminal cells are measured in display width, edits happen per grapheme
//! cluster, so a backspace never splits an emoji or a combining sequence.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Calculate the display width of a string
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Remove the last grapheme cluster in place
pub fn pop_grapheme(s: &mut String) -> bool {
    match s.grapheme_indices(true).next_back() {
        Some((idx, _)) => {
            s.truncate(idx);
            true
        }
        None => false,
    }
}

/// Truncate a string to fit within a maximum display width
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for grapheme in s.graphemes(true) {
        let grapheme_width = grapheme.width();
        if current_width + grapheme_width > max_width {
            break;
        }
        result.push_str(grapheme);
        current_width += grapheme_width;
    }

    result
}

/// Keep the trailing part of a string that fits in `max_width` cells
///
/// Used for the text field while editing, where the cursor sits at the end.
pub fn tail_to_width(s: &str, max_width: usize) -> &str {
    let mut current_width = 0;
    let mut start = s.len();

    for (idx, grapheme) in s.grapheme_indices(true).rev() {
        let grapheme_width = grapheme.width();
        if current_width + grapheme_width > max_width {
            break;
        }
        current_width += grapheme_width;
        start = idx;
    }

    &s[start..]
}

/// Greedy word wrap by display width
pub fn wrap_to_width(s: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in s.split_whitespace() {
        let needed = if current.is_empty() {
            display_width(word)
        } else {
            display_width(&current) + 1 + display_width(word)
        };

        if needed > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
