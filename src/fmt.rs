//! Shared formatting utilities for console output

use console::Emoji;

/// Chart emoji for the score header
pub const CHART: Emoji = Emoji("📊", "~");

/// Microscope emoji for analysis/inspection
pub const MICROSCOPE: Emoji = Emoji("🔍", ">>");

/// Lightbulb emoji for recommendations
pub const LIGHTBULB: Emoji = Emoji("💡", "*");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Globe emoji for external-URL analysis
pub const GLOBE: Emoji = Emoji("🌐", "@");

/// Truncate string with ellipsis if exceeds max length
///
/// # Examples
///
/// ```
/// use seo_audit::fmt::truncate_str;
///
/// assert_eq!(truncate_str("short", 10), "short");
/// assert_eq!(truncate_str("very_long_page_path.html", 12), "very_long...");
/// ```
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        // Back off to a char boundary so multi-byte input can't split a char
        let cut = max_len.saturating_sub(3);
        let end = (0..=cut)
            .rev()
            .find(|&i| s.is_char_boundary(i))
            .unwrap_or(0);
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str_short_string_returns_unchanged() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("test", 4), "test");
    }

    #[test]
    fn test_truncate_str_long_string_adds_ellipsis() {
        assert_eq!(truncate_str("very_long_page_path.html", 12), "very_long...");
        assert_eq!(truncate_str("abcdefghij", 8), "abcde...");
    }

    #[test]
    fn test_truncate_str_tiny_max_len_handles_edge_case() {
        assert_eq!(truncate_str("test", 2), "...");
        assert_eq!(truncate_str("a", 1), "a");
    }

    #[test]
    fn test_truncate_str_multibyte_respects_char_boundaries() {
        // "é" is two bytes; the cut point of 7 falls mid-char
        assert_eq!(truncate_str(&"é".repeat(40), 10), "ééé...");
        assert_eq!(truncate_str("über-lange-seite.html", 8), "über...");
        assert_eq!(truncate_str("日本語のページ.html", 12), "日本語...");
    }
}
