//! Bundle entries and their download operation

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::config::BUNDLE_EXT;
use crate::error::{GkfetchError, Result};

/// Copy buffer for streaming downloads
const DOWNLOAD_BUF_SIZE: usize = 1024 * 1024;

/// Where a bundle's bytes live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleLocation {
    /// Remote bundle fetched over HTTP
    Url(String),
    /// Local file, copied into place (offline mirrors and tests)
    Path(PathBuf),
}

impl std::fmt::Display for BundleLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A downloadable handle for one named bundle from the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleEntry {
    /// Bundle name, unique within the manifest
    pub name: String,
    /// Source of the bundle bytes
    pub location: BundleLocation,
    /// Declared payload size in bytes, display only
    pub size: Option<u64>,
    /// Declared md5 digest, display only; never verified
    pub md5: Option<String>,
    /// Asset category used for sub-categorized downloads
    pub category: Option<String>,
}

impl BundleEntry {
    /// File name of the downloaded archive: `<name>.unity3d`
    pub fn file_name(&self) -> String {
        format!("{}.{BUNDLE_EXT}", self.name)
    }

    /// Download this bundle into `dest_dir`, returning the written path
    ///
    /// With `categorize` set and a category declared, the archive lands in
    /// `<dest_dir>/<category>/` instead. A failed transfer may leave a
    /// partial file behind; presence checks on a later run will treat it
    /// as complete.
    pub fn download(&self, dest_dir: &Path, categorize: bool) -> Result<PathBuf> {
        let target_dir = match (&self.category, categorize) {
            (Some(category), true) => dest_dir.join(category),
            _ => dest_dir.to_path_buf(),
        };

        std::fs::create_dir_all(&target_dir).map_err(|e| self.failed(&e))?;
        let target = target_dir.join(self.file_name());

        match &self.location {
            BundleLocation::Url(url) => self.fetch_url(url, &target)?,
            BundleLocation::Path(path) => {
                std::fs::copy(path, &target).map_err(|e| self.failed(&e))?;
            }
        }

        Ok(target)
    }

    fn fetch_url(&self, url: &str, target: &Path) -> Result<()> {
        let response = ureq::get(url).call().map_err(|e| self.failed(&e))?;
        let mut reader = response.into_body().into_reader();
        let mut file = File::create(target).map_err(|e| self.failed(&e))?;

        let mut buffer = vec![0u8; DOWNLOAD_BUF_SIZE];
        loop {
            let bytes_read = reader.read(&mut buffer).map_err(|e| self.failed(&e))?;
            if bytes_read == 0 {
                break;
            }
            file.write_all(&buffer[..bytes_read])
                .map_err(|e| self.failed(&e))?;
        }

        Ok(())
    }

    fn failed(&self, reason: &dyn std::fmt::Display) -> GkfetchError {
        GkfetchError::DownloadFailed {
            name: self.name.clone(),
            reason: reason.to_string(),
        }
    }
}
