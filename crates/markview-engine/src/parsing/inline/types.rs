use serde::Serialize;

/// A contiguous run of inline-formatted text.
///
/// Spans own their text rather than pointing into the source: the
/// delimiters are stripped during tokenization, so the tree is lossy by
/// construction. Colors and fonts are picked by the presentation layer
/// from these flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Visible text with markup delimiters removed.
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    /// Backtick-delimited code, rendered in a monospace face.
    pub inline_code: bool,
    /// Target URL of a `[text](url)` link.
    pub link_target: Option<String>,
    /// Address of a bare email, used as the tap target.
    pub email_target: Option<String>,
}

impl Span {
    /// Creates an unformatted span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Returns true for spans rendered with the hyperlink color and underline.
    #[must_use]
    pub fn is_hyperlink(&self) -> bool {
        self.link_target.is_some() || self.email_target.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_span_has_no_formatting() {
        let span = Span::plain("hello");
        assert_eq!(span.text, "hello");
        assert!(!span.bold && !span.italic && !span.strikethrough && !span.inline_code);
        assert!(!span.is_hyperlink());
    }

    #[test]
    fn email_and_link_spans_are_hyperlinks() {
        let link = Span {
            link_target: Some("https://example.com".into()),
            ..Span::plain("site")
        };
        let email = Span {
            email_target: Some("a@b.com".into()),
            ..Span::plain("a@b.com")
        };
        assert!(link.is_hyperlink());
        assert!(email.is_hyperlink());
    }
}
