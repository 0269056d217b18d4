use std::path::PathBuf;

use bytes::Bytes;

/// A resolved image, ready to hand to a decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Encoded image bytes (PNG, JPEG, ...). Rasterized SVGs arrive as PNG.
    Bytes(Bytes),
    /// A local file the renderer opens itself.
    File(PathBuf),
}

impl ImageSource {
    /// True for a successful resolution that produced no data.
    pub fn is_empty(&self) -> bool {
        match self {
            ImageSource::Bytes(bytes) => bytes.is_empty(),
            ImageSource::File(path) => path.as_os_str().is_empty(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ImageSource::Bytes(_) => "bytes",
            ImageSource::File(_) => "file",
        }
    }
}

/// A resolved source for the image node at `block_index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpdate {
    pub block_index: usize,
    pub source: ImageSource,
}
