use crate::parsing::inline::tokenize;

use super::{
    kinds::TableRow,
    types::{Align, Block, Cell},
};

/// Builds a [`Block::Table`] from a contiguous run of pipe lines.
///
/// `lines[start]` is the header, `lines[start + 1]` the alignment row and
/// the lines after it up to and including `end` are body rows. Nothing past
/// `end` is read.
pub struct TableBuilder;

impl TableBuilder {
    pub fn build(lines: &[&str], start: usize, end: usize) -> Block {
        let row = |i: usize| {
            lines
                .get(i)
                .filter(|_| i <= end)
                .map(|l| TableRow::split_cells(l))
                .unwrap_or_default()
        };

        let header_cells = row(start);
        let indicators = row(start + 1);

        let alignment = if indicators.len() == header_cells.len() {
            indicators.iter().map(|i| TableRow::alignment(i)).collect()
        } else {
            vec![Align::Start; header_cells.len()]
        };

        let rows = (start + 2..=end)
            .map(|i| row(i).into_iter().map(cell).collect())
            .collect();

        Block::Table {
            header: header_cells.into_iter().map(cell).collect(),
            alignment,
            rows,
        }
    }
}

fn cell(text: &str) -> Cell {
    Cell {
        spans: tokenize(text),
    }
}
