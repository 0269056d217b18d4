use super::wrapped_in;

/// Bold markers. `**` content is tokenized again so nested emphasis
/// survives; `__` content is taken as flat text.
pub struct Strong;

impl Strong {
    pub const STARS: &'static str = "**";
    pub const UNDERSCORES: &'static str = "__";

    /// Inner text of a `**bold**` token, ready for a nested tokenizer pass.
    pub fn stars_inner(part: &str) -> Option<&str> {
        wrapped_in(part, Self::STARS).then(|| part.trim_matches(['*', ' ']))
    }

    /// Inner text of a `__bold__` token.
    pub fn underscores_inner(part: &str) -> Option<&str> {
        wrapped_in(part, Self::UNDERSCORES).then(|| part.trim_matches(['_', ' ']))
    }
}

/// Italic markers.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: &'static str = "*";
    pub const UNDERSCORE: &'static str = "_";

    pub fn underscore_inner(part: &str) -> Option<&str> {
        wrapped_in(part, Self::UNDERSCORE).then(|| part.trim_matches(['_', ' ']))
    }

    pub fn star_inner(part: &str) -> Option<&str> {
        wrapped_in(part, Self::STAR).then(|| part.trim_matches('*'))
    }
}

pub struct Strikethrough;

impl Strikethrough {
    pub const TILDES: &'static str = "~~";

    pub fn inner(part: &str) -> Option<&str> {
        wrapped_in(part, Self::TILDES).then(|| part.trim_matches('~'))
    }
}
