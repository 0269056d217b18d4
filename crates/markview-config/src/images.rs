use std::path::PathBuf;

use markview_engine::{ImageError, ImageResolver, ImageSource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Shown in place of images that resolve to nothing or fail.
    pub placeholder: PathBuf,
    /// Sent with every remote image request.
    pub user_agent: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            placeholder: PathBuf::from(markview_engine::images::DEFAULT_PLACEHOLDER),
            user_agent: concat!("markview/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ImageConfig {
    /// An HTTP-backed resolver using these settings.
    pub fn resolver(&self) -> Result<ImageResolver, ImageError> {
        Ok(ImageResolver::http(&self.user_agent)?
            .with_placeholder(ImageSource::File(self.placeholder.clone())))
    }
}
