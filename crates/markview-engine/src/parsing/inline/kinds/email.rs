use std::sync::OnceLock;

use regex::Regex;

/// Bare email address detection.
pub struct Email;

impl Email {
    /// Address pattern shared by the split pattern and [`Email::find`].
    pub const PATTERN: &'static str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

    /// The first address anywhere in `part`, including inside other markup.
    pub fn find(part: &str) -> Option<&str> {
        static ADDRESS: OnceLock<Regex> = OnceLock::new();
        let re = ADDRESS.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid email regex"));
        re.find(part).map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("a@b.com", Some("a@b.com"))]
    #[case("first.last+tag@mail.example.org", Some("first.last+tag@mail.example.org"))]
    #[case("mail a@b.com now", Some("a@b.com"))]
    #[case("`a@b.com`", Some("a@b.com"))]
    #[case("[mail](mailto:a@b.com)", Some("a@b.com"))]
    #[case("user@localhost", None)]
    #[case("no address", None)]
    fn finds_address(#[case] part: &str, #[case] expected: Option<&str>) {
        assert_eq!(Email::find(part), expected);
    }
}
