/// Single-level block quote line.
///
/// Nested quotes (`>>`) are not modeled: everything after the first `>`
/// is quote text.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn matches(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Quote text with the prefix and surrounding whitespace removed.
    pub fn text(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(str::trim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix() {
        assert_eq!(BlockQuote::text("> hello"), Some("hello"));
        assert_eq!(BlockQuote::text(">tight"), Some("tight"));
    }

    #[test]
    fn nested_prefix_is_text() {
        assert_eq!(BlockQuote::text(">> nested"), Some("> nested"));
    }

    #[test]
    fn no_quote() {
        assert!(!BlockQuote::matches("hello > world"));
        assert_eq!(BlockQuote::text("hello"), None);
    }
}
