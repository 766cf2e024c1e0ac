use encoding_rs::Encoding;
use regex::Regex;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Legacy page directories are plain identifiers; anything else could escape
/// the root once joined into a path.
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Failed to compile slug regex"));

const PAGE_FILE: &str = "page.tsx";

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("invalid slug: {0:?}")]
    InvalidSlug(String),

    #[error("page file not found")]
    NotFound,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("charset error: {0}")]
    Decode(String),
}

/// Read-only view over the legacy pages tree (`<root>/<slug>/page.tsx`).
#[derive(Debug, Clone)]
pub struct LegacyPageStore {
    root: PathBuf,
}

impl LegacyPageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn page_path(&self, slug: &str) -> Result<PathBuf, SourceError> {
        if !SLUG_REGEX.is_match(slug) {
            return Err(SourceError::InvalidSlug(slug.to_string()));
        }
        Ok(self.root.join(slug).join(PAGE_FILE))
    }

    /// Reads and decodes the source of one legacy page.
    pub async fn read(&self, slug: &str) -> Result<String, SourceError> {
        let path = self.page_path(slug)?;
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(SourceError::NotFound),
            Err(e) => return Err(e.into()),
        };
        decode_source(&bytes)
    }
}

/// Decodes page source to UTF-8.
///
/// A BOM wins, then strict UTF-8; anything else goes through charset
/// detection since some legacy files were saved by Windows editors.
pub fn decode_source(bytes: &[u8]) -> Result<String, SourceError> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return decode_with(encoding, &bytes[bom_len..]);
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.to_string());
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, true);
    let detected = detector.guess(None, true);
    decode_with(detected, bytes)
}

fn decode_with(encoding: &'static Encoding, bytes: &[u8]) -> Result<String, SourceError> {
    let (decoded, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(SourceError::Decode(format!(
            "Failed to decode page source with encoding: {}",
            encoding.name()
        )));
    }
    Ok(decoded.into_owned())
}
