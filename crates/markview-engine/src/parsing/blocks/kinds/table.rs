use crate::parsing::blocks::types::Align;

/// Pipe table rows and alignment indicators.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';
    pub const ALIGN_MARK: char = ':';

    /// If `lines[i]` contains a pipe, returns the index of the last line of
    /// the contiguous run of pipe-bearing lines starting at `i`.
    pub fn run_end(lines: &[&str], i: usize) -> Option<usize> {
        if !lines.get(i)?.contains(Self::PIPE) {
            return None;
        }
        let run = lines[i + 1..]
            .iter()
            .take_while(|l| l.contains(Self::PIPE))
            .count();
        Some(i + run)
    }

    /// Splits a row into trimmed cell texts.
    ///
    /// One leading and one trailing pipe are treated as the row frame, so
    /// `|A|B|` and `A|B` both give two cells. Interior empty segments are
    /// kept as empty cells.
    pub fn split_cells(line: &str) -> Vec<&str> {
        let line = line.trim();
        let line = line.strip_prefix(Self::PIPE).unwrap_or(line);
        let line = line.strip_suffix(Self::PIPE).unwrap_or(line);
        line.split(Self::PIPE).map(str::trim).collect()
    }

    /// Alignment of one column from its indicator cell (`:---:`, `---:`, ...).
    pub fn alignment(indicator: &str) -> Align {
        let leading = indicator.starts_with(Self::ALIGN_MARK);
        let trailing = indicator.ends_with(Self::ALIGN_MARK);
        match (leading, trailing) {
            (true, true) => Align::Center,
            (false, true) => Align::End,
            _ => Align::Start,
        }
    }
}
