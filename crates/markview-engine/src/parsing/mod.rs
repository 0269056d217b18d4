pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use std::{ops::Range, sync::OnceLock};

use regex::Regex;
use serde::Serialize;

use crate::images::ImageUpdate;

use blocks::{Block, BlockBuilder, Cell};
use inline::Span;

/// The render tree: blocks in source order, which is also render order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// An activatable span, as found by [`Document::link_targets`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTarget {
    pub block_index: usize,
    pub text: String,
    pub target: String,
    pub is_email: bool,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Index ranges of maximal list-item runs. Each range is one logical list.
    pub fn list_runs(&self) -> Vec<Range<usize>> {
        let mut runs = vec![];
        let mut start = None;
        for (i, block) in self.blocks.iter().enumerate() {
            match (block.is_list_item(), start) {
                (true, None) => start = Some(i),
                (false, Some(s)) => {
                    runs.push(s..i);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push(s..self.blocks.len());
        }
        runs
    }

    /// Every link and email span in the document, including table cells.
    pub fn link_targets(&self) -> Vec<LinkTarget> {
        let mut out = vec![];
        for (block_index, block) in self.blocks.iter().enumerate() {
            let mut collect = |spans: &[Span]| {
                for span in spans {
                    let (target, is_email) = match (&span.link_target, &span.email_target) {
                        (Some(t), _) => (t, false),
                        (None, Some(t)) => (t, true),
                        (None, None) => continue,
                    };
                    out.push(LinkTarget {
                        block_index,
                        text: span.text.clone(),
                        target: target.clone(),
                        is_email,
                    });
                }
            };
            match block {
                Block::Table { header, rows, .. } => {
                    header
                        .iter()
                        .chain(rows.iter().flatten())
                        .for_each(|c: &Cell| collect(&c.spans));
                }
                other => collect(other.spans()),
            }
        }
        out
    }

    /// `(block_index, reference)` for every image node.
    pub fn image_references(&self) -> Vec<(usize, &str)> {
        self.blocks
            .iter()
            .enumerate()
            .filter_map(|(i, b)| match b {
                Block::Image { reference, .. } => Some((i, reference.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Stores a resolved source on its image node. Returns false when the
    /// index no longer names an image, e.g. after the document was replaced.
    pub fn apply_image(&mut self, update: ImageUpdate) -> bool {
        match self.blocks.get_mut(update.block_index) {
            Some(Block::Image { resolved, .. }) => {
                *resolved = Some(update.source);
                true
            }
            _ => {
                log::debug!(
                    "Dropping image update for block {}: not an image",
                    update.block_index
                );
                false
            }
        }
    }
}

fn line_break() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\r\n?|\n").expect("Invalid line break regex"))
}

/// Splits on `\n`, `\r\n` or a lone `\r` and drops whitespace-only lines.
pub fn content_lines(text: &str) -> Vec<&str> {
    line_break()
        .split(text)
        .filter(|l| !l.trim().is_empty())
        .collect()
}

/// Parses Markdown text into a [`Document`]. Total over its input: there
/// is no error case, and blank input yields an empty document.
pub fn parse_document(text: &str) -> Document {
    let lines = content_lines(text);
    let mut builder = BlockBuilder::new();

    let mut i = 0;
    while i < lines.len() {
        i = builder.push(&lines, i);
    }

    Document {
        blocks: builder.finish(),
    }
}
