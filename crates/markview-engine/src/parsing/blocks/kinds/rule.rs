/// Horizontal rule: three or more of the same `-`, `*` or `_`, spaces ignored.
pub struct Rule;

impl Rule {
    pub const MARKERS: [char; 3] = ['-', '*', '_'];
    pub const MIN_LEN: usize = 3;

    pub fn matches(line: &str) -> bool {
        let mut chars = line.chars().filter(|&c| c != ' ');
        let Some(first) = chars.next() else {
            return false;
        };
        if !Self::MARKERS.contains(&first) {
            return false;
        }
        let mut len = 1;
        for c in chars {
            if c != first {
                return false;
            }
            len += 1;
        }
        len >= Self::MIN_LEN
    }
}
