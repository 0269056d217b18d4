use std::path::PathBuf;

use thiserror::Error;

/// Failure resolving one image reference. Scoped to that image: the
/// document it came from is unaffected.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Fetching {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Invalid base64 image data in {reference}: {source}")]
    Base64 {
        reference: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("Could not read SVG markup from {reference}: {message}")]
    SvgMarkup { reference: String, message: String },

    #[error("Could not parse SVG {reference}: {source}")]
    SvgParse {
        reference: String,
        #[source]
        source: resvg::usvg::Error,
    },

    #[error("SVG {reference} has an empty canvas")]
    EmptyCanvas { reference: String },

    #[error("Could not encode {reference} as PNG: {message}")]
    Encode { reference: String, message: String },

    #[error("Image file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Could not read image file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
