/// Standalone image line `![alt](reference)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLine<'a> {
    pub alt: &'a str,
    pub reference: &'a str,
}

impl<'a> ImageLine<'a> {
    pub const PREFIX: &'static str = "![";

    /// Parses an image line. The reference runs from the first `(` to the
    /// next `)`; a line without both is not an image.
    pub fn parse(line: &'a str) -> Option<Self> {
        if !line.starts_with(Self::PREFIX) {
            return None;
        }
        let open = line.find('(')?;
        let close = open + 1 + line[open + 1..].find(')')?;
        let alt_end = line[..open].rfind(']').unwrap_or(open);
        Some(Self {
            alt: line
                .get(Self::PREFIX.len()..alt_end)
                .unwrap_or_default()
                .trim(),
            reference: line[open + 1..close].trim(),
        })
    }
}
