//! External bundle extraction
//!
//! Extraction is delegated to a pre-built AssetStudioModCLI executable,
//! invoked once per bundle. The subprocess inherits stdout/stderr, so the
//! tool's own output passes through untouched. A non-zero exit is fatal to
//! the whole run; there is no retry and no cleanup of partial output.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::Config;
use crate::error::{GkfetchError, Result};

/// Unpacks a downloaded bundle archive into a directory
pub trait Extractor {
    /// Extract `input` into `output`, failing on non-zero exit
    fn extract(&self, input: &Path, output: &Path) -> Result<()>;
}

/// [`Extractor`] backed by the AssetStudioModCLI executable
pub struct AssetStudioExtractor {
    tool: PathBuf,
    unity_version: String,
    naming: String,
}

impl AssetStudioExtractor {
    pub fn new(tool: PathBuf, unity_version: String, naming: String) -> Self {
        Self {
            tool,
            unity_version,
            naming,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.extractor_path.clone(),
            config.unity_version.clone(),
            config.naming.clone(),
        )
    }
}

impl Extractor for AssetStudioExtractor {
    fn extract(&self, input: &Path, output: &Path) -> Result<()> {
        let tool = expand_home(&self.tool);

        let status = Command::new(&tool)
            .arg(input)
            .arg("-o")
            .arg(output)
            .arg("--unity-version")
            .arg(&self.unity_version)
            .arg("-f")
            .arg(&self.naming)
            .status()
            .map_err(|e| GkfetchError::ExtractorSpawnFailed {
                tool: tool.display().to_string(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(GkfetchError::ExtractionFailed {
                bundle: bundle_label(input),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}

/// Expand a leading `~` to the user's home directory
pub fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

/// Bundle name for error messages, derived from the archive file name
fn bundle_label(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string())
}
