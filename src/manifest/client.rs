//! Manifest retrieval
//!
//! The catalog collaborator sits behind the [`ManifestClient`] trait so the
//! sync pipeline can be driven against a fake in tests. The real client
//! fetches the manifest document over HTTP or reads it from a local file.

use std::io::Read;
use std::path::PathBuf;

use super::Manifest;
use crate::config::Config;
use crate::error::{GkfetchError, Result};

/// Produces the bundle catalog for a run
pub trait ManifestClient {
    /// Fetch the manifest; any failure is fatal to the run
    fn fetch(&self) -> Result<Manifest>;
}

/// Where the manifest document is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    /// Fetched over HTTP(S)
    Url(String),
    /// Read from a local file (offline mirrors and tests)
    Path(PathBuf),
}

impl ManifestSource {
    /// Classify a manifest source string
    ///
    /// `http://` and `https://` are URLs; `file://` prefixes are stripped
    /// to a local path; anything else is a local path as-is.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.starts_with("http://") || input.starts_with("https://") {
            return Self::Url(input.to_string());
        }
        if let Some(path) = input.strip_prefix("file://") {
            return Self::Path(PathBuf::from(path));
        }
        Self::Path(PathBuf::from(input))
    }
}

impl std::fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Manifest client backed by a URL or local file source
pub struct RemoteManifestClient {
    source: ManifestSource,
}

impl RemoteManifestClient {
    pub fn new(source: ManifestSource) -> Self {
        Self { source }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(ManifestSource::parse(&config.manifest))
    }

    fn fetch_failed(&self, reason: &dyn std::fmt::Display) -> GkfetchError {
        GkfetchError::ManifestFetchFailed {
            origin: self.source.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl ManifestClient for RemoteManifestClient {
    fn fetch(&self) -> Result<Manifest> {
        let document = match &self.source {
            ManifestSource::Url(url) => {
                let response = ureq::get(url.as_str())
                    .call()
                    .map_err(|e| self.fetch_failed(&e))?;
                let mut text = String::new();
                response
                    .into_body()
                    .into_reader()
                    .read_to_string(&mut text)
                    .map_err(|e| self.fetch_failed(&e))?;
                text
            }
            ManifestSource::Path(path) => {
                std::fs::read_to_string(path).map_err(|e| self.fetch_failed(&e))?
            }
        };

        Manifest::from_json(&document)
    }
}
