use crate::parsing::inline::tokenize;

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::CodeFence,
    table::TableBuilder,
    types::{Block, ListKind},
};

/// State carried from one line to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblerState {
    Normal,
    /// Inside a multi-line fence. `opening` is the raw fence line, whose
    /// leading whitespace every code line is normalized against.
    InCodeBlock {
        opening: String,
        language: Option<String>,
        lines: Vec<String>,
    },
    /// The previous line was a list item of this kind.
    InList(ListKind),
    /// The previous line was a block quote.
    InBlockQuoteRun,
}

/// Single-pass block assembler.
///
/// Feeds on non-blank lines in order and emits [`Block`]s. Runs (lists,
/// quotes) are not wrapped in container nodes: consecutive emission is the
/// grouping, and the state only decides how the next line relates to it.
pub struct BlockBuilder {
    classifier: MarkdownLineClassifier,
    state: AssemblerState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            state: AssemblerState::Normal,
            out: vec![],
        }
    }

    pub fn state(&self) -> &AssemblerState {
        &self.state
    }

    /// Consumes `lines[i]` and returns the index of the next unconsumed
    /// line. A table consumes its whole run, so the result may jump ahead.
    pub fn push(&mut self, lines: &[&str], i: usize) -> usize {
        if self.in_code_block() {
            self.consume_code_line(lines[i]);
            return i + 1;
        }

        let previous = std::mem::replace(&mut self.state, AssemblerState::Normal);

        match self.classifier.classify(lines, i) {
            LineClass::Heading { level, text } => self.out.push(Block::Heading {
                level,
                spans: tokenize(text),
            }),
            LineClass::Image(image) => self.out.push(Block::Image {
                alt: image.alt.to_string(),
                reference: image.reference.to_string(),
                resolved: None,
            }),
            LineClass::BlockQuote { text } => {
                self.out.push(Block::BlockQuote {
                    spans: tokenize(text),
                    continues_previous: previous == AssemblerState::InBlockQuoteRun,
                });
                self.state = AssemblerState::InBlockQuoteRun;
            }
            LineClass::ListItem { kind, text } => {
                self.out.push(Block::ListItem {
                    kind,
                    spans: tokenize(text),
                });
                self.state = AssemblerState::InList(kind);
            }
            LineClass::CodeFence(sig) if sig.single_line => {
                let content = CodeFence::single_line_content(lines[i]);
                self.out.push(Block::CodeBlock {
                    lines: if content.is_empty() {
                        vec![]
                    } else {
                        vec![content.to_string()]
                    },
                    fenced: false,
                    language: None,
                });
            }
            LineClass::CodeFence(_) => {
                self.state = AssemblerState::InCodeBlock {
                    opening: lines[i].to_string(),
                    language: CodeFence::language(lines[i]),
                    lines: vec![],
                };
            }
            LineClass::Rule => self.out.push(Block::Rule),
            LineClass::MathBlock { formula } => self.out.push(Block::MathBlock {
                formula: formula.to_string(),
            }),
            LineClass::MathInline(math) => self.out.push(Block::MathInline {
                before: math.before.to_string(),
                formula: math.formula.to_string(),
                after: math.after.to_string(),
            }),
            LineClass::Table { end } => {
                self.out.push(TableBuilder::build(lines, i, end));
                return end + 1;
            }
            LineClass::Text(text) => {
                if matches!(previous, AssemblerState::InList(_)) {
                    self.out.push(Block::BlankRow);
                }
                self.out.push(Block::Paragraph {
                    spans: tokenize(text),
                });
            }
        }

        i + 1
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush: an unterminated fence keeps what it collected.
        self.flush_code_block();
        self.out
    }

    fn in_code_block(&self) -> bool {
        matches!(self.state, AssemblerState::InCodeBlock { .. })
    }

    fn consume_code_line(&mut self, line: &str) {
        let AssemblerState::InCodeBlock { opening, lines, .. } = &mut self.state else {
            return;
        };

        let normalized = CodeFence::normalize_indent(line, opening).unwrap_or_else(|| {
            log::warn!("Could not normalize code line indentation, using trimmed line: {line:?}");
            line.trim().to_string()
        });

        if CodeFence::sig(&normalized).is_none() {
            lines.push(normalized);
            return;
        }
        self.flush_code_block();
    }

    fn flush_code_block(&mut self) {
        let prev = std::mem::replace(&mut self.state, AssemblerState::Normal);
        if let AssemblerState::InCodeBlock {
            language, lines, ..
        } = prev
        {
            self.out.push(Block::CodeBlock {
                lines,
                fenced: true,
                language,
            });
        } else {
            self.state = prev; // put back non-code state
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn run(lines: &[&str]) -> (Vec<Block>, AssemblerState) {
        let mut builder = BlockBuilder::new();
        let mut i = 0;
        while i < lines.len() {
            i = builder.push(lines, i);
        }
        let state = builder.state().clone();
        (builder.finish(), state)
    }

    #[test]
    fn list_item_enters_list_state() {
        let (_, state) = run(&["- a"]);
        assert_eq!(state, AssemblerState::InList(ListKind::Bullet));
    }

    #[test]
    fn heading_leaves_list_state_without_blank_row() {
        let (blocks, state) = run(&["- a", "# h"]);
        assert_eq!(state, AssemblerState::Normal);
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn paragraph_after_list_gets_blank_row() {
        let (blocks, _) = run(&["1. a", "text"]);
        assert_eq!(blocks[1], Block::BlankRow);
        assert_eq!(blocks[2].text(), "text");
    }

    #[test]
    fn open_fence_collects_lines() {
        let mut builder = BlockBuilder::new();
        builder.push(&["```rust"], 0);
        builder.push(&["let x = 1;"], 0);
        assert_eq!(
            builder.state(),
            &AssemblerState::InCodeBlock {
                opening: "```rust".into(),
                language: Some("rust".into()),
                lines: vec!["let x = 1;".into()],
            }
        );
    }

    #[test]
    fn closing_fence_is_not_content() {
        let (blocks, state) = run(&["```", "a", "```"]);
        assert_eq!(state, AssemblerState::Normal);
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                lines: vec!["a".into()],
                fenced: true,
                language: None,
            }]
        );
    }

    #[test]
    fn unterminated_fence_is_flushed() {
        let (blocks, _) = run(&["```", "a", "b"]);
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                lines: vec!["a".into(), "b".into()],
                fenced: true,
                language: None,
            }]
        );
    }

    #[test]
    fn markdown_inside_fence_is_raw() {
        let (blocks, _) = run(&["```", "# not a heading", "- not a list", "```"]);
        assert_eq!(blocks.len(), 1);
        let Block::CodeBlock { lines, .. } = &blocks[0] else {
            panic!("expected code block");
        };
        assert_eq!(lines, &vec!["# not a heading".to_string(), "- not a list".to_string()]);
    }

    #[test]
    fn single_line_fence() {
        let (blocks, _) = run(&["```echo hi```"]);
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                lines: vec!["echo hi".into()],
                fenced: false,
                language: None,
            }]
        );
    }

    #[test]
    fn table_consumes_its_run() {
        let mut builder = BlockBuilder::new();
        let lines = ["|A|", "|-|", "|1|", "after"];
        assert_eq!(builder.push(&lines, 0), 3);
        assert_eq!(builder.push(&lines, 3), 4);
        let blocks = builder.finish();
        assert!(matches!(blocks[0], Block::Table { .. }));
        assert_eq!(blocks[1].text(), "after");
    }

    #[test]
    fn quote_run_flags_continuation() {
        let (blocks, _) = run(&["> one", "> two", "text", "> three"]);
        let flags: Vec<_> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::BlockQuote {
                    continues_previous, ..
                } => Some(*continues_previous),
                _ => None,
            })
            .collect();
        assert_eq!(flags, vec![false, true, false]);
    }
}
