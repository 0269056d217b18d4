//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` ` `` - monospace span, no nested formatting
//! - **`Strong`**: `**` (recursive) and `__` (flat)
//! - **`Emphasis`**: `_` and `*`
//! - **`Strikethrough`**: `~~`
//! - **`Link`**: `[text](url)`
//! - **`Email`**: bare addresses such as `a@b.com`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in tokenizer code.
//! The tokenizer calls these types; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod email;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use email::Email;
pub use emphasis::{Emphasis, Strikethrough, Strong};
pub use link::Link;

/// Returns true if `part` starts and ends with `delim` and is long enough
/// for both delimiters to be distinct.
pub(crate) fn wrapped_in(part: &str, delim: &str) -> bool {
    part.len() >= delim.len() * 2 && part.starts_with(delim) && part.ends_with(delim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_requires_both_ends() {
        assert!(wrapped_in("**x**", "**"));
        assert!(!wrapped_in("**x", "**"));
        assert!(!wrapped_in("x**", "**"));
    }

    #[test]
    fn wrapped_rejects_overlapping_delimiters() {
        assert!(!wrapped_in("*", "*"));
        assert!(!wrapped_in("***", "**"));
        assert!(wrapped_in("****", "**"));
    }
}
