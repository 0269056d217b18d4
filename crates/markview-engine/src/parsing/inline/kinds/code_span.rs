use super::wrapped_in;

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw: their content is not tokenized further.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';
    pub const DELIM: &'static str = "`";

    /// Returns the code text if `part` is a backtick-delimited token.
    pub fn inner(part: &str) -> Option<&str> {
        wrapped_in(part, Self::DELIM).then(|| part.trim_matches(Self::TICK))
    }
}
