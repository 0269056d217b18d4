//! # Image Resolution
//!
//! Asynchronous resolution of image references to loadable sources.
//!
//! ## Modules
//!
//! - **`resolver`**: `ImageResolver`, the base64 / URI / local-path decision
//! - **`cache`**: per-reference request coalescing for remote fetches
//! - **`fetch`**: the `ImageFetcher` transport trait and its `reqwest` implementation
//! - **`svg`**: comment stripping and PNG rasterization of SVG documents
//! - **`loader`**: spawns one resolution task per image node of a `Document`
//!
//! Parsing never waits on images: a `Document` is complete with every
//! `Block::Image` unresolved, and sources are filled in as they arrive.

pub mod cache;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod resolver;
pub mod source;
pub mod svg;

pub use cache::{ImageCache, ImageCacheStats};
pub use error::ImageError;
pub use fetch::{HttpFetcher, ImageFetcher};
pub use loader::ImageLoader;
pub use resolver::{DEFAULT_PLACEHOLDER, ImageResolver};
pub use source::{ImageSource, ImageUpdate};
