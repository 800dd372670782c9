//! Error types and handling for gkfetch
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for gkfetch operations
#[derive(Error, Diagnostic, Debug)]
pub enum GkfetchError {
    // Manifest errors
    #[error("Failed to fetch manifest from '{origin}': {reason}")]
    #[diagnostic(
        code(gkfetch::manifest::fetch_failed),
        help("Check network access and the 'manifest' source in your configuration")
    )]
    ManifestFetchFailed { origin: String, reason: String },

    #[error("Failed to parse manifest: {reason}")]
    #[diagnostic(code(gkfetch::manifest::parse_failed))]
    ManifestParseFailed { reason: String },

    #[error("Bundle '{name}' not found in manifest")]
    #[diagnostic(
        code(gkfetch::manifest::bundle_not_found),
        help("Run 'gkfetch search <pattern>' to browse the catalog for valid names")
    )]
    BundleNotFound { name: String },

    // Download errors
    #[error("Failed to download bundle '{name}': {reason}")]
    #[diagnostic(
        code(gkfetch::download::failed),
        help("Check network access and free disk space; a partial file may have been left behind")
    )]
    DownloadFailed { name: String, reason: String },

    // Extraction errors
    #[error("Failed to run extractor '{tool}': {reason}")]
    #[diagnostic(
        code(gkfetch::extract::spawn_failed),
        help("Check that 'extractor_path' in your configuration points at AssetStudioModCLI")
    )]
    ExtractorSpawnFailed { tool: String, reason: String },

    #[error("Extraction of bundle '{bundle}' failed: extractor exited with {status}")]
    #[diagnostic(code(gkfetch::extract::nonzero_exit))]
    ExtractionFailed { bundle: String, status: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(gkfetch::config::not_found),
        help("Pass --config with an existing file, or create gkfetch.yaml in the working directory")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(gkfetch::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // Search errors
    #[error("Invalid search pattern: {pattern}")]
    #[diagnostic(
        code(gkfetch::search::invalid_pattern),
        help("Patterns are globs, e.g. 'mdl_chr_*' or '*ttmr*'")
    )]
    InvalidPattern { pattern: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(gkfetch::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for GkfetchError {
    fn from(err: std::io::Error) -> Self {
        GkfetchError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for GkfetchError {
    fn from(err: serde_yaml::Error) -> Self {
        GkfetchError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for GkfetchError {
    fn from(err: serde_json::Error) -> Self {
        GkfetchError::ManifestParseFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, GkfetchError>;
