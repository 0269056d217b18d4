use markview_engine::{Block, Span};
use serde::{Deserialize, Serialize};

use crate::Color;

/// Color and size of one heading level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingStyle {
    pub color: Color,
    pub font_size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableHeaderStyle {
    pub font_size: f64,
    pub text_color: Color,
    pub background_color: Color,
    pub font_face: Option<String>,
}

impl Default for TableHeaderStyle {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            text_color: Color::BLACK,
            background_color: Color::LIGHT_GRAY,
            font_face: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableRowStyle {
    pub font_face: Option<String>,
    pub text_color: Color,
    pub font_size: f64,
}

impl Default for TableRowStyle {
    fn default() -> Self {
        Self {
            font_face: None,
            text_color: Color::BLACK,
            font_size: 12.0,
        }
    }
}

/// Body text: paragraphs, list items and anything without its own style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyStyle {
    pub color: Color,
    pub font_size: f64,
    pub font_face: Option<String>,
}

impl Default for BodyStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            font_size: 12.0,
            font_face: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeBlockStyle {
    pub background_color: Color,
    pub border_color: Color,
    pub text_color: Color,
    pub font_size: f64,
    pub font_face: String,
}

impl Default for CodeBlockStyle {
    fn default() -> Self {
        Self {
            background_color: Color::LIGHT_GRAY,
            border_color: Color::BLUE_VIOLET,
            text_color: Color::BLUE_VIOLET,
            font_size: 12.0,
            font_face: "Consolas".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockQuoteStyle {
    pub background_color: Color,
    pub border_color: Color,
    pub text_color: Color,
    pub font_face: String,
}

impl Default for BlockQuoteStyle {
    fn default() -> Self {
        Self {
            background_color: Color::LIGHT_GRAY,
            border_color: Color::BLUE_VIOLET,
            text_color: Color::BLUE_VIOLET,
            font_face: "Consolas".to_string(),
        }
    }
}

/// Presentation parameters per block category. The parser never reads
/// these; a renderer asks [`StyleConfig::text_style_for`] per block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub h1: HeadingStyle,
    pub h2: HeadingStyle,
    pub h3: HeadingStyle,
    pub table_header: TableHeaderStyle,
    pub table_row: TableRowStyle,
    pub text: BodyStyle,
    pub line_color: Color,
    pub code_block: CodeBlockStyle,
    pub block_quote: BlockQuoteStyle,
    pub hyperlink_color: Color,
    pub list_indent: f64,
    pub paragraph_spacing: f64,
    pub line_height_multiplier: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            h1: HeadingStyle {
                color: Color::BLACK,
                font_size: 24.0,
            },
            h2: HeadingStyle {
                color: Color::DARK_GRAY,
                font_size: 20.0,
            },
            h3: HeadingStyle {
                color: Color::GRAY,
                font_size: 18.0,
            },
            table_header: TableHeaderStyle::default(),
            table_row: TableRowStyle::default(),
            text: BodyStyle::default(),
            line_color: Color::LIGHT_GRAY,
            code_block: CodeBlockStyle::default(),
            block_quote: BlockQuoteStyle::default(),
            hyperlink_color: Color::BLUE_VIOLET,
            list_indent: 0.0,
            paragraph_spacing: 3.0,
            line_height_multiplier: 1.0,
        }
    }
}

/// Resolved text attributes for one block or span.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub font_size: f64,
    pub font_face: Option<String>,
}

impl StyleConfig {
    /// Text attributes for the body of `block`. Headings below level 3
    /// and blocks without a category of their own use the text style.
    pub fn text_style_for(&self, block: &Block) -> TextStyle {
        let body = TextStyle {
            color: self.text.color,
            font_size: self.text.font_size,
            font_face: self.text.font_face.clone(),
        };

        match block {
            Block::Heading { level, .. } => match self.heading(*level) {
                Some(h) => TextStyle {
                    color: h.color,
                    font_size: h.font_size,
                    ..body
                },
                None => body,
            },
            Block::CodeBlock { .. } => TextStyle {
                color: self.code_block.text_color,
                font_size: self.code_block.font_size,
                font_face: Some(self.code_block.font_face.clone()),
            },
            Block::BlockQuote { .. } => TextStyle {
                color: self.block_quote.text_color,
                font_face: Some(self.block_quote.font_face.clone()),
                ..body
            },
            Block::Table { .. } => TextStyle {
                color: self.table_row.text_color,
                font_size: self.table_row.font_size,
                font_face: self.table_row.font_face.clone(),
            },
            Block::Rule => TextStyle {
                color: self.line_color,
                ..body
            },
            _ => body,
        }
    }

    /// Text attributes for a table's header cells.
    pub fn table_header_style(&self) -> TextStyle {
        TextStyle {
            color: self.table_header.text_color,
            font_size: self.table_header.font_size,
            font_face: self.table_header.font_face.clone(),
        }
    }

    /// `base` adjusted for one span: hyperlinks take the hyperlink color,
    /// inline code takes the code font. Size is never changed per span.
    pub fn span_style(&self, base: &TextStyle, span: &Span) -> TextStyle {
        let mut style = base.clone();
        if span.is_hyperlink() {
            style.color = self.hyperlink_color;
        }
        if span.inline_code {
            style.font_face = Some(self.code_block.font_face.clone());
        }
        style
    }

    fn heading(&self, level: u8) -> Option<&HeadingStyle> {
        match level {
            1 => Some(&self.h1),
            2 => Some(&self.h2),
            3 => Some(&self.h3),
            _ => None,
        }
    }
}
