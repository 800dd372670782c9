//! Tool configuration
//!
//! The fixed literals of the pipeline (extractor location, asset directory,
//! target Unity version, output naming convention, bundle list) live in a
//! single [`Config`] value that is passed into the sync pipeline. Defaults
//! can be overridden from a YAML file (`--config <path>`, or `gkfetch.yaml`
//! in the working directory when present); none of them are CLI flags.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GkfetchError, Result};

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "gkfetch.yaml";

/// File extension of downloaded bundle archives
pub const BUNDLE_EXT: &str = "unity3d";

/// Pipeline configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path to the AssetStudioModCLI executable; `~/` is expanded at invocation time
    pub extractor_path: PathBuf,

    /// Root directory for downloaded and extracted bundle artifacts
    pub asset_dir: PathBuf,

    /// Manifest source: an http(s) URL or a local file path
    pub manifest: String,

    /// Unity version string passed to the extractor via `--unity-version`
    pub unity_version: String,

    /// Output naming convention passed to the extractor via `-f`
    pub naming: String,

    /// Bundle names to sync, processed in this order
    pub bundles: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extractor_path: PathBuf::from(
                "~/Applications/AssetStudioModCLI_net6_linux64/AssetStudioModCLI",
            ),
            asset_dir: PathBuf::from("assets/"),
            manifest: "https://object.asset.game-gakuen-idolmaster.jp/manifest.json".to_string(),
            unity_version: "2022.3.21f1".to_string(),
            naming: "assetName_pathID".to_string(),
            bundles: vec![
                "mdl_chr_ttmr-casl-0000_body".to_string(),
                "mdl_chr_ttmr-base-0000_face".to_string(),
                "mdl_chr_ttmr-base-0000_hair".to_string(),
            ],
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => GkfetchError::ConfigNotFound {
                    path: path.display().to_string(),
                },
                _ => GkfetchError::IoError {
                    message: format!("Failed to read {}: {}", path.display(), e),
                },
            })?;

        serde_yaml::from_str(&content).map_err(|e| GkfetchError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Resolve the effective configuration for a run
    ///
    /// An explicit `--config` path must exist. Without one, `gkfetch.yaml`
    /// in the working directory is used when present, else built-in defaults.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(&path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Expected path of a downloaded bundle archive: `<asset_dir>/<name>.unity3d`
    pub fn bundle_file(&self, name: &str) -> PathBuf {
        self.asset_dir.join(format!("{name}.{BUNDLE_EXT}"))
    }

    /// Expected path of an extracted bundle directory: `<asset_dir>/<name>`
    pub fn bundle_dir(&self, name: &str) -> PathBuf {
        self.asset_dir.join(name)
    }
}
