/// What a fence line looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    /// Open and close fence on the same line (```` ```code``` ````).
    pub single_line: bool,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TICK: char = '`';
    /// Backticks needed on one line for it to hold both fences.
    pub const SINGLE_LINE_TICKS: usize = 6;

    pub fn sig(line: &str) -> Option<FenceSig> {
        let t = line.trim();
        if !t.starts_with(Self::BACKTICKS) {
            return None;
        }
        let ticks = t.chars().filter(|&c| c == Self::TICK).count();
        Some(FenceSig {
            single_line: ticks >= Self::SINGLE_LINE_TICKS && t.ends_with(Self::BACKTICKS),
        })
    }

    /// Info string of an opening fence, e.g. `rust` for ```` ```rust ````.
    pub fn language(line: &str) -> Option<String> {
        let info = line.trim().trim_start_matches(Self::TICK).trim();
        (!info.is_empty()).then(|| info.to_string())
    }

    /// Content of a single-line fence with backticks and spaces stripped.
    pub fn single_line_content(line: &str) -> &str {
        line.trim_matches([Self::TICK, ' '])
    }

    /// Re-indents a code line relative to the opening fence.
    ///
    /// If the line is indented at least as far as the fence, exactly the
    /// fence's indentation is removed; otherwise the line is fully trimmed.
    /// Returns `None` only if the indentation cannot be stripped, in which
    /// case the caller falls back to the trimmed line.
    pub fn normalize_indent(line: &str, opening: &str) -> Option<String> {
        let indent = leading_whitespace(line);
        let base = leading_whitespace(opening);
        if indent < base {
            return Some(line.trim().to_string());
        }
        if base == 0 {
            return Some(line.to_string());
        }
        let (offset, _) = line.char_indices().nth(base)?;
        Some(line[offset..].to_string())
    }
}

/// Counts leading whitespace characters, ideographic space included.
fn leading_whitespace(s: &str) -> usize {
    s.chars().take_while(|c| c.is_whitespace()).count()
}
