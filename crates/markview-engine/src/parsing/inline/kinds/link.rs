/// Inline link `[text](url)`.
pub struct Link;

impl Link {
    pub const OPEN: char = '[';
    pub const MIDDLE: &'static str = "](";
    pub const CLOSE_TEXT: char = ']';
    pub const OPEN_TARGET: char = '(';
    pub const CLOSE_TARGET: char = ')';

    /// Splits a link token into `(text, target)`.
    ///
    /// The text runs to the first `]`, the target from the first `(` to the
    /// first `)` after it.
    pub fn parse(part: &str) -> Option<(&str, &str)> {
        if !part.starts_with(Self::OPEN) || !part.contains(Self::MIDDLE) {
            return None;
        }
        let text_end = part.find(Self::CLOSE_TEXT)?;
        let target_start = part.find(Self::OPEN_TARGET)? + 1;
        let target_end = target_start + part[target_start..].find(Self::CLOSE_TARGET)?;
        Some((&part[1..text_end], &part[target_start..target_end]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_text_and_target() {
        assert_eq!(
            Link::parse("[docs](https://example.com/docs)"),
            Some(("docs", "https://example.com/docs"))
        );
    }

    #[test]
    fn empty_text_is_allowed() {
        assert_eq!(Link::parse("[](x)"), Some(("", "x")));
    }

    #[test]
    fn missing_target_close_is_not_a_link() {
        assert_eq!(Link::parse("[docs](https://example.com"), None);
    }

    #[test]
    fn plain_brackets_are_not_a_link() {
        assert_eq!(Link::parse("[note]"), None);
    }
}
