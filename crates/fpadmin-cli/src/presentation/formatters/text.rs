pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Columns a string occupies in a terminal. CJK and other wide characters
/// count as two.
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Left-align `text` in a field `width` columns wide.
pub fn pad(text: &str, width: usize) -> String {
    let used = display_width(text);
    let mut out = String::with_capacity(text.len() + width.saturating_sub(used));
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

fn char_width(c: char) -> usize {
    match c as u32 {
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6 => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("株式会社みらいライフ設計", 6), "株式会...");
    }

    #[test]
    fn test_wide_characters_take_two_columns() {
        assert_eq!(display_width("U001"), 4);
        assert_eq!(display_width("青木 花子"), 9);
        assert_eq!(pad("青木", 6), "青木  ");
        assert_eq!(pad("toolong", 3), "toolong");
    }
}
