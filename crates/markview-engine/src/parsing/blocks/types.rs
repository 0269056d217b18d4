use serde::Serialize;

use crate::{images::ImageSource, parsing::inline::Span};

/// What kind of marker a list item was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListKind {
    /// `- `, `* ` or `+ `.
    Bullet,
    /// `N. ` with its parsed index.
    Ordered(u32),
    /// `- [ ]` / `- [x]` with the checkbox state.
    Task(bool),
}

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

/// One `|`-delimited table cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub spans: Vec<Span>,
}

impl Cell {
    /// Concatenated span text, markup removed.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A top-level structural unit of the document.
///
/// Blocks carry no layout; a presentation layer maps each variant to its
/// own visual primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Block {
    Heading {
        /// 1..=6
        level: u8,
        spans: Vec<Span>,
    },
    Paragraph {
        spans: Vec<Span>,
    },
    /// Consecutive list items form one logical list.
    ListItem {
        kind: ListKind,
        spans: Vec<Span>,
    },
    CodeBlock {
        /// Code lines, indentation-normalized against the opening fence.
        lines: Vec<String>,
        /// False for a single-line ```` ```code``` ```` block.
        fenced: bool,
        language: Option<String>,
    },
    BlockQuote {
        spans: Vec<Span>,
        /// The previous line was also a quote; render without a gap.
        continues_previous: bool,
    },
    Table {
        header: Vec<Cell>,
        alignment: Vec<Align>,
        /// Rows keep their own cell count, which may differ from the header.
        rows: Vec<Vec<Cell>>,
    },
    Rule,
    MathBlock {
        formula: String,
    },
    MathInline {
        before: String,
        formula: String,
        after: String,
    },
    Image {
        alt: String,
        reference: String,
        /// Filled in once the image resolver delivers this node.
        #[serde(skip)]
        resolved: Option<ImageSource>,
    },
    /// Separates a paragraph from a list run that ended right before it.
    BlankRow,
}

impl Block {
    /// Inline spans of text-bearing blocks; empty for the rest.
    pub fn spans(&self) -> &[Span] {
        match self {
            Block::Heading { spans, .. }
            | Block::Paragraph { spans }
            | Block::ListItem { spans, .. }
            | Block::BlockQuote { spans, .. } => spans,
            _ => &[],
        }
    }

    /// Concatenated span text, markup removed.
    pub fn text(&self) -> String {
        self.spans().iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_list_item(&self) -> bool {
        matches!(self, Block::ListItem { .. })
    }

    /// Short name of the variant, used in listings and logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "Heading",
            Block::Paragraph { .. } => "Paragraph",
            Block::ListItem { .. } => "ListItem",
            Block::CodeBlock { .. } => "CodeBlock",
            Block::BlockQuote { .. } => "BlockQuote",
            Block::Table { .. } => "Table",
            Block::Rule => "Rule",
            Block::MathBlock { .. } => "MathBlock",
            Block::MathInline { .. } => "MathInline",
            Block::Image { .. } => "Image",
            Block::BlankRow => "BlankRow",
        }
    }

    /// Alignment of column `col` of a table, `Start` for anything else or
    /// for columns past the alignment row.
    pub fn column_alignment(&self, col: usize) -> Align {
        match self {
            Block::Table { alignment, .. } => alignment.get(col).copied().unwrap_or_default(),
            _ => Align::Start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_joins_spans() {
        let block = Block::Paragraph {
            spans: vec![Span::plain("a "), Span::plain("b")],
        };
        assert_eq!(block.text(), "a b");
    }

    #[test]
    fn non_text_blocks_have_no_spans() {
        assert!(Block::Rule.spans().is_empty());
        assert!(Block::BlankRow.text().is_empty());
    }

    #[test]
    fn column_alignment_defaults_past_the_end() {
        let table = Block::Table {
            header: vec![Cell::default()],
            alignment: vec![Align::End],
            rows: vec![],
        };
        assert_eq!(table.column_alignment(0), Align::End);
        assert_eq!(table.column_alignment(3), Align::Start);
    }
}
