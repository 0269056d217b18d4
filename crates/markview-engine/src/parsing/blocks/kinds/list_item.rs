use std::sync::OnceLock;

use regex::Regex;

/// List item markers: bullets, ordered indices and task checkboxes.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [&'static str; 3] = ["- ", "* ", "+ "];
    pub const TASK_OPEN: &'static str = "- [ ]";
    pub const TASK_DONE: &'static str = "- [x]";

    /// Returns `Some(checked)` for `- [ ]` / `- [x]` lines (`X` also counts
    /// as checked).
    pub fn task(line: &str) -> Option<bool> {
        let head = line.get(..Self::TASK_OPEN.len())?;
        if head.eq_ignore_ascii_case(Self::TASK_DONE) {
            Some(true)
        } else if head == Self::TASK_OPEN {
            Some(false)
        } else {
            None
        }
    }

    /// Task text after the checkbox.
    pub fn task_text(line: &str) -> &str {
        line.get(Self::TASK_OPEN.len()..).unwrap_or_default().trim()
    }

    pub fn bullet(line: &str) -> bool {
        Self::BULLETS.iter().any(|b| line.starts_with(b))
    }

    /// Bullet text after the marker.
    pub fn bullet_text(line: &str) -> &str {
        line.get(2..).unwrap_or_default().trim()
    }

    /// Returns the index and text of an `N. text` line.
    ///
    /// An index that does not fit a `u32` is not an ordered item; the line
    /// falls through to later classifications.
    pub fn ordered(line: &str) -> Option<(u32, &str)> {
        static ORDERED: OnceLock<Regex> = OnceLock::new();
        let re = ORDERED.get_or_init(|| Regex::new(r"^(\d+)\. ").expect("Invalid list regex"));

        let caps = re.captures(line)?;
        let index = caps[1].parse::<u32>().ok()?;
        let prefix_len = caps.get(0)?.end();
        Some((index, line[prefix_len..].trim()))
    }
}
