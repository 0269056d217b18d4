use super::{
    kinds::{
        BlockQuote, CodeFence, FenceSig, Heading, ImageLine, ListMarker, MathBlock, MathInline,
        Rule, TableRow,
    },
    types::ListKind,
};

/// Syntactic category of a single trimmed line plus its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    Heading { level: u8, text: &'a str },
    Image(ImageLine<'a>),
    BlockQuote { text: &'a str },
    ListItem { kind: ListKind, text: &'a str },
    CodeFence(FenceSig),
    Rule,
    MathBlock { formula: &'a str },
    MathInline(MathInline<'a>),
    /// Pipe-table run from the current line to `end` (inclusive).
    Table { end: usize },
    Text(&'a str),
}

/// Classifies lines for the block assembler.
///
/// Classification never fails: a line no predicate accepts, or one whose
/// payload is malformed, is plain text.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies `lines[i]`, trimmed, in fixed precedence order:
    ///
    /// heading > image > block quote > task > bullet > ordered > code fence
    /// > rule > math block > math inline > table > text.
    ///
    /// Task items are checked before bullets so `- [ ] x` is a task. Only
    /// the table check looks past line `i`.
    pub fn classify<'a>(&self, lines: &[&'a str], i: usize) -> LineClass<'a> {
        let line = lines[i].trim();

        if let Some(level) = Heading::level(line) {
            return LineClass::Heading {
                level,
                text: Heading::text(line, level),
            };
        }
        if let Some(image) = ImageLine::parse(line) {
            return LineClass::Image(image);
        }
        if line.starts_with(ImageLine::PREFIX) {
            log::warn!("Image line without a (reference), treating as text: {line:?}");
        }
        if let Some(text) = BlockQuote::text(line) {
            return LineClass::BlockQuote { text };
        }
        if let Some(checked) = ListMarker::task(line) {
            return LineClass::ListItem {
                kind: ListKind::Task(checked),
                text: ListMarker::task_text(line),
            };
        }
        if ListMarker::bullet(line) {
            return LineClass::ListItem {
                kind: ListKind::Bullet,
                text: ListMarker::bullet_text(line),
            };
        }
        if let Some((index, text)) = ListMarker::ordered(line) {
            return LineClass::ListItem {
                kind: ListKind::Ordered(index),
                text,
            };
        }
        if let Some(sig) = CodeFence::sig(line) {
            return LineClass::CodeFence(sig);
        }
        if Rule::matches(line) {
            return LineClass::Rule;
        }
        if let Some(formula) = MathBlock::formula(line) {
            return LineClass::MathBlock { formula };
        }
        if let Some(math) = MathInline::split(line) {
            return LineClass::MathInline(math);
        }
        if let Some(end) = TableRow::run_end(lines, i) {
            return LineClass::Table { end };
        }
        LineClass::Text(line)
    }
}
