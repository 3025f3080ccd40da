//! Shared text formatting helpers for rendered views.

/// Truncate string to `max_len` characters with unicode ellipsis (`…`).
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

/// Truncate or right-pad to exactly `width` characters.
pub fn fit(s: &str, width: usize) -> String {
    let t = truncate(s, width);
    let len = t.chars().count();
    format!("{}{}", t, " ".repeat(width.saturating_sub(len)))
}

/// Normalize text for single-line display with space collapsing.
/// Replaces newlines and tabs with spaces and drops carriage returns.
pub fn normalize_for_display(s: &str) -> String {
    let s = s.replace('\n', " ").replace('\r', "").replace('\t', " ");
    let mut result = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch == ' ' {
            if !prev_space {
                result.push(ch);
            }
            prev_space = true;
        } else {
            result.push(ch);
            prev_space = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 6), "hello…");
        assert_eq!(truncate("héllo wörld", 4), "hél…");
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 4), "abc…");
    }

    #[test]
    fn test_normalize_for_display() {
        assert_eq!(normalize_for_display("a\n\tb\r\n c"), "a b c");
    }
}
