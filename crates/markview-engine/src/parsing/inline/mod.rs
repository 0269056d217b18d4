//! # Inline Tokenizing
//!
//! Splits a single line of text into typed, possibly nested [`Span`]s.
//!
//! ## Architecture
//!
//! Inline tokenizing is separate from block assembly and is invoked per
//! line for every inline-bearing block (headings, paragraphs, list items,
//! block quotes, table cells).
//!
//! One alternation pattern splits the line into matched delimiter pairs
//! and the text between them; each token is then classified by the
//! [`kinds`] types in a fixed precedence order.
//!
//! ## Modules
//!
//! - **`types`**: the `Span` struct with its formatting flags
//! - **`kinds`**: inline types with owned delimiters (CodeSpan, Strong, Link, Email, ...)
//! - **`parser`**: `tokenize()` main entry point
//!
//! ## Nesting
//!
//! `**bold**` is the only recursive construct: its content is tokenized
//! again and the bold flag is OR-ed onto each child span.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::Span;
