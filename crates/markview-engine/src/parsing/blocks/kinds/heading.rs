/// ATX heading (`# Title` .. `###### Title`).
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level if `line` is 1-6 `#` followed by a space.
    pub fn level(line: &str) -> Option<u8> {
        let hashes = line.chars().take_while(|&c| c == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL {
            return None;
        }
        if line[hashes..].starts_with(' ') {
            u8::try_from(hashes).ok()
        } else {
            None
        }
    }

    /// Heading text with the marker and surrounding whitespace removed.
    pub fn text(line: &str, level: u8) -> &str {
        line.get(usize::from(level) + 1..).unwrap_or_default().trim()
    }
}
