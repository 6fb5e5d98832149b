//! Input cleanup applied before a URL is split into components.

use std::borrow::Cow;

/// Characters removed from anywhere in the input before splitting.
const UNSAFE_CHARS: [char; 3] = ['\t', '\r', '\n'];

/// Strips leading C0 control characters and spaces, then removes every tab,
/// CR and LF.
///
/// Borrows the input when nothing needs removing.
pub fn strip_unsafe_chars(url: &str) -> Cow<'_, str> {
    let trimmed = url.trim_start_matches(|c: char| c <= '\u{1f}' || c == ' ');
    if trimmed.contains(&UNSAFE_CHARS[..]) {
        Cow::Owned(trimmed.chars().filter(|c| !UNSAFE_CHARS.contains(c)).collect())
    } else {
        Cow::Borrowed(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_input_is_borrowed() {
        assert!(matches!(
            strip_unsafe_chars("http://example.com"),
            Cow::Borrowed("http://example.com")
        ));
    }

    #[test]
    fn trims_leading_controls_and_spaces() {
        assert_eq!(strip_unsafe_chars("  \x00\x1fhttp://a.com"), "http://a.com");
    }

    #[test]
    fn keeps_trailing_spaces() {
        assert_eq!(strip_unsafe_chars("http://a.com  "), "http://a.com  ");
    }

    #[test]
    fn removes_embedded_tabs_and_newlines() {
        assert_eq!(strip_unsafe_chars("http://ex\tam\r\nple.com"), "http://example.com");
    }
}
