//! Widget implementations for the four views and the chrome around them

mod create_form;
mod date_prompt;
mod deliveries;
mod footer;
mod header;
mod monitor;
mod summary;
mod toast;

pub use create_form::CreateFormView;
pub use date_prompt::DatePromptView;
pub use deliveries::DeliveriesView;
pub use footer::FooterBar;
pub use header::HeaderBar;
pub use monitor::MonitorView;
pub use summary::SummaryView;
pub use toast::ToastOverlay;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to a display width, ending with an ellipsis when cut.
pub(crate) fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Truncate then right-pad with spaces to exactly `width` columns.
pub(crate) fn pad(text: &str, width: usize) -> String {
    let truncated = truncate(text, width);
    let used = truncated.width();
    format!("{}{}", truncated, " ".repeat(width.saturating_sub(used)))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("abc", 5), "abc");
    }

    #[test]
    fn test_truncate_long_text_gets_ellipsis() {
        assert_eq!(truncate("abcdefgh", 5), "abcd…");
    }

    #[test]
    fn test_truncate_wide_chars_respect_width() {
        // Each CJK char is two columns wide.
        let truncated = truncate("日本語テスト", 5);
        assert!(truncated.ends_with('…'));
        assert!(UnicodeWidthStr::width(truncated.as_str()) <= 5);
    }

    #[test]
    fn test_pad_fills_to_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abc…");
    }
}
