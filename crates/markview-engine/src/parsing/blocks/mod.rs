//! # Block Parsing
//!
//! Line-oriented block assembly over the non-blank lines of a document.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each trimmed line is assigned exactly
//!    one `LineClass` by a fixed precedence chain. Only tables look ahead.
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` carries an
//!    `AssemblerState` between lines and emits `Block`s in source order
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `ListKind`, `Align`, `Cell`)
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence, TableRow, ...)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` for each line
//! - **`table`**: `TableBuilder` turns a pipe-line run into a `Block::Table`
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Each input line contributes to exactly one block
//! - Lists and quote runs are flat: grouping is by adjacency

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod table;
pub mod types;

pub use builder::{AssemblerState, BlockBuilder};
pub use classify::{LineClass, MarkdownLineClassifier};
pub use table::TableBuilder;
pub use types::{Align, Block, Cell, ListKind};
