pub mod images;
pub mod parsing;

// Re-export key types for easier usage
pub use images::{
    HttpFetcher, ImageError, ImageFetcher, ImageLoader, ImageResolver, ImageSource, ImageUpdate,
};
pub use parsing::{
    Document, LinkTarget, parse_document,
    blocks::{Align, Block, Cell, ListKind},
    inline::{Span, tokenize},
};
