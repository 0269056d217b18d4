//! Block kinds, each owning the syntax knowledge for its line predicate.
//!
//! The classifier composes these predicates in precedence order; nothing
//! outside this module hardcodes `#`, `>` or a fence string.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod image;
pub mod list_item;
pub mod math;
pub mod rule;
pub mod table;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceSig};
pub use heading::Heading;
pub use image::ImageLine;
pub use list_item::ListMarker;
pub use math::{MathBlock, MathInline};
pub use rule::Rule;
pub use table::TableRow;
