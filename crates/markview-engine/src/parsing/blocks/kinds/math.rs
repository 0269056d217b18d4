use std::sync::OnceLock;

use regex::Regex;

/// Display math `$$formula$$`. The whole formula must sit on one line.
pub struct MathBlock;

impl MathBlock {
    pub fn formula(line: &str) -> Option<&str> {
        static BLOCK: OnceLock<Regex> = OnceLock::new();
        let re = BLOCK.get_or_init(|| Regex::new(r"(?s)\$\$(.*?)\$\$").expect("Invalid math regex"));
        re.captures(line.trim_start())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Inline math `text $formula$ text`. Only the first formula on a line is
/// recognised; anything after it stays in `after` verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathInline<'a> {
    pub before: &'a str,
    pub formula: &'a str,
    pub after: &'a str,
}

impl<'a> MathInline<'a> {
    pub fn split(line: &'a str) -> Option<Self> {
        static INLINE: OnceLock<Regex> = OnceLock::new();
        let re = INLINE.get_or_init(|| Regex::new(r"\$(.*?)\$").expect("Invalid math regex"));

        let line = line.trim_start();
        let caps = re.captures(line)?;
        let whole = caps.get(0)?;
        Some(Self {
            before: &line[..whole.start()],
            formula: caps.get(1)?.as_str(),
            after: &line[whole.end()..],
        })
    }
}
