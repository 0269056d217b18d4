use markview_config::StyleConfig;
use markview_engine::{Block, Cell, Document};

/// One line per block: kind, then its content. With `styles`, the color
/// and size a renderer would use are appended.
pub fn render(doc: &Document, styles: Option<&StyleConfig>) -> Vec<String> {
    doc.blocks
        .iter()
        .map(|block| {
            let line = format!("{:<10} {}", block.kind_name(), describe(block));
            match styles {
                Some(styles) => {
                    let style = styles.text_style_for(block);
                    format!("{line}  [{} {}pt]", style.color, style.font_size)
                }
                None => line,
            }
        })
        .collect()
}

fn describe(block: &Block) -> String {
    match block {
        Block::Heading { level, .. } => format!("h{level} {}", block.text()),
        Block::ListItem { kind, .. } => format!("{kind:?} {}", block.text()),
        Block::CodeBlock {
            lines, language, ..
        } => format!(
            "{} {}",
            language.as_deref().unwrap_or("-"),
            lines.join(" \u{23CE} ")
        ),
        Block::BlockQuote {
            continues_previous, ..
        } => {
            let marker = if *continues_previous { "+" } else { ">" };
            format!("{marker} {}", block.text())
        }
        Block::Table { header, rows, .. } => {
            format!("{} ({} rows)", cells(header), rows.len())
        }
        Block::MathBlock { formula } => format!("$${formula}$$"),
        Block::MathInline {
            before,
            formula,
            after,
        } => format!("{before}${formula}${after}"),
        Block::Image {
            alt,
            reference,
            resolved,
        } => {
            let state = resolved.as_ref().map_or("unresolved", |s| s.kind_name());
            format!("{alt} <{reference}> {state}")
        }
        Block::Paragraph { .. } | Block::Rule | Block::BlankRow => block.text(),
    }
}

fn cells(row: &[Cell]) -> String {
    row.iter().map(Cell::text).collect::<Vec<_>>().join(" | ")
}
