use std::sync::Arc;

use tokio::sync::mpsc;

use crate::parsing::Document;

use super::{ImageResolver, ImageUpdate};

/// Background resolution of every image node in a document.
pub struct ImageLoader;

impl ImageLoader {
    /// Starts one task per image node and returns the channel their
    /// results arrive on, in completion order. The channel closes once
    /// every task has reported.
    ///
    /// Failed resolutions are delivered as the placeholder. The document
    /// itself is not touched: its owner applies each update with
    /// [`Document::apply_image`]. Must be called inside a Tokio runtime.
    pub fn spawn(resolver: Arc<ImageResolver>, doc: &Document) -> mpsc::UnboundedReceiver<ImageUpdate> {
        let (tx, rx) = mpsc::unbounded_channel();

        for (block_index, reference) in doc.image_references() {
            let resolver = Arc::clone(&resolver);
            let reference = reference.to_string();
            let tx = tx.clone();

            tokio::spawn(async move {
                let source = resolver
                    .load(&reference)
                    .await
                    .unwrap_or_else(|_| resolver.placeholder().clone());
                if tx.send(ImageUpdate { block_index, source }).is_err() {
                    log::debug!("Image {reference} resolved after its document was dropped");
                }
            });
        }

        rx
    }
}
