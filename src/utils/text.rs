//! Text wrapping and truncation utilities
//!
//! All widths are counted in `char`s, so multi-byte text never splits inside
//! a code point.

/// Truncate a string to a maximum length, appending "..." if truncated.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

/// Wrap text at word boundaries, keeping the caller's line breaks.
///
/// Each returned line is at most `width` characters. Words longer than
/// `width` are broken mid-word. Blank input lines are kept as empty strings
/// so paragraph spacing survives.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            // Break words that cannot fit on any line
            while word.len() > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let current_len = current.chars().count();
            if current_len == 0 {
                current = word.into_iter().collect();
            } else if current_len + 1 + word.len() <= width {
                current.push(' ');
                current.extend(word);
            } else {
                lines.push(std::mem::replace(&mut current, word.into_iter().collect()));
            }
        }
        lines.push(current);
    }
    lines
}
