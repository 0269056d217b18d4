use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use bytes::Bytes;
use reqwest::Url;

use super::{
    ImageError, ImageSource,
    cache::ImageCache,
    fetch::{HttpFetcher, ImageFetcher},
    svg,
};

/// Shown for images that resolve to nothing.
pub const DEFAULT_PLACEHOLDER: &str = "icon.png";

/// Turns image references into loadable sources.
///
/// Resolution order:
/// 1. A reference that is valid base64 is decoded in place. Not cached.
/// 2. An absolute URI is fetched through the [`ImageFetcher`] and cached
///    under the literal reference. Paths ending in `.svg` are rasterized to
///    PNG first. `data:` and `file:` URIs are handled locally instead.
/// 3. Anything else is a local file path, checked for existence. Not cached.
pub struct ImageResolver {
    fetcher: Arc<dyn ImageFetcher>,
    cache: ImageCache,
    placeholder: ImageSource,
    base_dir: Option<PathBuf>,
}

impl ImageResolver {
    pub fn new(fetcher: Arc<dyn ImageFetcher>) -> Self {
        Self {
            fetcher,
            cache: ImageCache::new(),
            placeholder: ImageSource::File(PathBuf::from(DEFAULT_PLACEHOLDER)),
            base_dir: None,
        }
    }

    /// A resolver fetching over HTTP(S) with the given user agent.
    pub fn http(user_agent: &str) -> Result<Self, ImageError> {
        Ok(Self::new(Arc::new(HttpFetcher::new(user_agent)?)))
    }

    pub fn with_placeholder(mut self, placeholder: ImageSource) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Relative local paths are looked up under `dir`, typically the
    /// directory of the Markdown file.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn placeholder(&self) -> &ImageSource {
        &self.placeholder
    }

    pub fn cache(&self) -> &ImageCache {
        &self.cache
    }

    /// Resolves `reference`. An empty but successful result is returned
    /// as-is; see [`ImageResolver::load`] for placeholder substitution.
    pub async fn resolve(&self, reference: &str) -> Result<ImageSource, ImageError> {
        if let Some(bytes) = decode_base64(reference) {
            return Ok(ImageSource::Bytes(bytes));
        }

        match absolute_url(reference) {
            Some(url) if url.scheme() == "data" => decode_data_uri(reference).map(ImageSource::Bytes),
            Some(url) if url.scheme() == "file" => {
                let path = url.to_file_path().map_err(|()| ImageError::NotFound {
                    path: PathBuf::from(reference),
                })?;
                local_file(path).await
            }
            Some(url) => self.remote(reference, url).await,
            None => local_file(self.local_path(reference)).await,
        }
    }

    /// Resolves `reference`, substituting the placeholder for an empty
    /// result. Errors are logged and passed on to the caller.
    pub async fn load(&self, reference: &str) -> Result<ImageSource, ImageError> {
        match self.resolve(reference).await {
            Ok(source) if source.is_empty() => {
                log::debug!("Image {reference} resolved to nothing, using placeholder");
                Ok(self.placeholder.clone())
            }
            Ok(source) => Ok(source),
            Err(e) => {
                log::warn!("Failed to resolve image {reference}: {e}");
                Err(e)
            }
        }
    }

    async fn remote(&self, reference: &str, url: Url) -> Result<ImageSource, ImageError> {
        self.cache
            .get_or_try_insert_with(reference, || async move {
                let bytes = self.fetcher.fetch(&url).await?;
                if bytes.is_empty() || !is_svg(&url) {
                    return Ok(ImageSource::Bytes(bytes));
                }
                let png = svg::rasterize(reference, &bytes)?;
                Ok(ImageSource::Bytes(Bytes::from(png)))
            })
            .await
    }

    fn local_path(&self, reference: &str) -> PathBuf {
        let path = Path::new(reference);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Decodes `reference` if it is well-formed standard base64 (whitespace
/// ignored). File names and URLs fail this on `.` or `:`.
fn decode_base64(reference: &str) -> Option<Bytes> {
    let compact: String = reference
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    if compact.is_empty() {
        return None;
    }
    STANDARD.decode(compact).ok().map(Bytes::from)
}

/// Parses an absolute URI. Single-letter schemes are Windows drive
/// letters (`C:\img.png`), which are local paths.
fn absolute_url(reference: &str) -> Option<Url> {
    let url = Url::parse(reference).ok()?;
    (url.scheme().len() > 1).then_some(url)
}

fn is_svg(url: &Url) -> bool {
    url.path().to_ascii_lowercase().ends_with(".svg")
}

/// `data:<mime>[;base64],<payload>`
fn decode_data_uri(reference: &str) -> Result<Bytes, ImageError> {
    let (header, payload) = reference.split_once(',').unwrap_or((reference, ""));
    if header.ends_with(";base64") {
        STANDARD
            .decode(payload.trim())
            .map(Bytes::from)
            .map_err(|source| ImageError::Base64 {
                reference: reference.to_string(),
                source,
            })
    } else {
        Ok(Bytes::copy_from_slice(payload.as_bytes()))
    }
}

async fn local_file(path: PathBuf) -> Result<ImageSource, ImageError> {
    match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => Ok(ImageSource::File(path)),
        Ok(_) => Err(ImageError::NotFound { path }),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ImageError::NotFound { path }),
        Err(source) => Err(ImageError::Io { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("aGVsbG8=", Some(&b"hello"[..]))]
    #[case("aGVs bG8=", Some(&b"hello"[..]))]
    #[case("image.png", None)]
    #[case("https://example.com/a.png", None)]
    #[case("", None)]
    fn base64_detection(#[case] reference: &str, #[case] expected: Option<&[u8]>) {
        assert_eq!(decode_base64(reference).as_deref(), expected);
    }

    #[rstest]
    #[case("https://example.com/a.png", true)]
    #[case("ftp://host/a.png", true)]
    #[case(r"C:\images\a.png", false)]
    #[case("images/a.png", false)]
    #[case("/abs/a.png", false)]
    fn absolute_uri_detection(#[case] reference: &str, #[case] expected: bool) {
        assert_eq!(absolute_url(reference).is_some(), expected);
    }

    #[rstest]
    #[case("https://example.com/logo.SVG", true)]
    #[case("https://example.com/logo.svg?v=2", true)]
    #[case("https://example.com/logo.png", false)]
    fn svg_detection_ignores_case_and_query(#[case] url: &str, #[case] expected: bool) {
        assert_eq!(is_svg(&Url::parse(url).unwrap()), expected);
    }

    #[test]
    fn data_uri_payloads() {
        assert_eq!(
            decode_data_uri("data:image/png;base64,aGVsbG8=").unwrap(),
            Bytes::from_static(b"hello")
        );
        assert_eq!(
            decode_data_uri("data:text/plain,hi").unwrap(),
            Bytes::from_static(b"hi")
        );
        let err = decode_data_uri("data:image/png;base64,!!!").unwrap_err();
        assert!(matches!(
            &err,
            ImageError::Base64 { reference, .. } if reference == "data:image/png;base64,!!!"
        ));
        assert!(err.to_string().contains("data:image/png;base64,!!!"));
    }

    #[test]
    fn relative_paths_join_base_dir() {
        struct NoFetch;
        #[async_trait::async_trait]
        impl ImageFetcher for NoFetch {
            async fn fetch(&self, url: &Url) -> Result<Bytes, ImageError> {
                panic!("unexpected fetch of {url}");
            }
        }

        let resolver = ImageResolver::new(Arc::new(NoFetch)).with_base_dir("/docs");
        assert_eq!(resolver.local_path("img/a.png"), PathBuf::from("/docs/img/a.png"));
        assert_eq!(resolver.local_path("/abs/a.png"), PathBuf::from("/abs/a.png"));
    }
}
