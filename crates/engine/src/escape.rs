// crates/engine/src/escape.rs
//! Minimal HTML entity escaping.
//!
//! Only the five reserved characters are replaced. The transform is byte
//! based so non-UTF-8 content passes through untouched.

use std::borrow::Cow;

const fn entity(b: u8) -> Option<&'static [u8]> {
    match b {
        b'&' => Some(b"&amp;"),
        b'\'' => Some(b"&#39;"),
        b'<' => Some(b"&lt;"),
        b'>' => Some(b"&gt;"),
        b'"' => Some(b"&#34;"),
        _ => None,
    }
}

/// Escape `&`, `'`, `<`, `>` and `"` in `input`.
///
/// Single pass: an `&` introduced by an entity is never escaped again.
/// Returns the input borrowed when nothing needs escaping.
#[must_use]
pub fn escape_html(input: &[u8]) -> Cow<'_, [u8]> {
    let Some(first) = input.iter().position(|&b| entity(b).is_some()) else {
        return Cow::Borrowed(input);
    };

    let mut out = Vec::with_capacity(input.len() + input.len() / 8 + 8);
    out.extend_from_slice(&input[..first]);
    for &b in &input[first..] {
        match entity(b) {
            Some(replacement) => out.extend_from_slice(replacement),
            None => out.push(b),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape_html_str(input: &str) -> String {
        String::from_utf8(escape_html(input.as_bytes()).into_owned()).unwrap()
    }

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(
            escape_html_str(r#"<p class="x">O'Reilly & Sons</p>"#),
            "&lt;p class=&#34;x&#34;&gt;O&#39;Reilly &amp; Sons&lt;/p&gt;"
        );
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape_html(b"hello world"), Cow::Borrowed(_)));
        assert!(matches!(escape_html(b""), Cow::Borrowed(_)));
    }

    #[test]
    fn output_has_no_reserved_characters_left() {
        let escaped = escape_html_str("&&<<>>''\"\"");
        for c in ['<', '>', '\'', '"'] {
            assert!(!escaped.contains(c), "found {c} in {escaped}");
        }
        assert_eq!(escaped.matches('&').count(), 10);
        assert_eq!(escaped.matches("&amp;").count(), 2);
    }

    #[test]
    fn escaping_twice_reescapes_ampersands() {
        let once = escape_html_str("<a>");
        assert_eq!(once, "&lt;a&gt;");
        assert_eq!(escape_html_str(&once), "&amp;lt;a&amp;gt;");
    }

    #[test]
    fn non_utf8_bytes_pass_through() {
        let input = [0xff, b'<', 0xfe];
        assert_eq!(escape_html(&input).as_ref(), &[0xff, b'&', b'l', b't', b';', 0xfe]);
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(escape_html_str("日本語 & <テスト>"), "日本語 &amp; &lt;テスト&gt;");
    }
}
