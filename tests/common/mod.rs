//! Common test utilities for gkfetch integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A test workspace for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Path to the asset directory used by [`write_config`](Self::write_config)
    pub fn asset_dir(&self) -> PathBuf {
        self.path.join("assets")
    }

    /// Write a manifest whose bundles point at local payload files
    ///
    /// Creates one payload file per name and returns the manifest path.
    pub fn write_manifest(&self, names: &[&str]) -> PathBuf {
        let payload_dir = self.path.join("payloads");
        std::fs::create_dir_all(&payload_dir).expect("Failed to create payload directory");

        let bundles: Vec<serde_json::Value> = names
            .iter()
            .map(|name| {
                let payload = payload_dir.join(format!("{name}.bin"));
                std::fs::write(&payload, format!("payload of {name}"))
                    .expect("Failed to write payload");
                serde_json::json!({
                    "name": name,
                    "path": payload,
                    "size": 64,
                })
            })
            .collect();

        let manifest_path = self.path.join("manifest.json");
        let document = serde_json::json!({ "revision": 1, "bundles": bundles });
        std::fs::write(
            &manifest_path,
            serde_json::to_string_pretty(&document).expect("Failed to serialize manifest"),
        )
        .expect("Failed to write manifest");
        manifest_path
    }

    /// Write a gkfetch.yaml pointing at this workspace and return its path
    pub fn write_config(
        &self,
        manifest: &Path,
        extractor: &Path,
        bundles: &[&str],
    ) -> PathBuf {
        let mut yaml = format!(
            "extractor_path: {}\nasset_dir: {}\nmanifest: {}\n",
            extractor.display(),
            self.asset_dir().display(),
            manifest.display(),
        );
        if bundles.is_empty() {
            yaml.push_str("bundles: []\n");
        } else {
            yaml.push_str("bundles:\n");
            for name in bundles {
                yaml.push_str(&format!("  - {name}\n"));
            }
        }

        let config_path = self.path.join("gkfetch.yaml");
        std::fs::write(&config_path, yaml).expect("Failed to write config");
        config_path
    }

    /// Stub extractor script: logs the input path and creates the output dir
    #[cfg(unix)]
    pub fn write_stub_extractor(&self) -> PathBuf {
        self.write_extractor_script(&format!(
            "echo \"$1\" >> {}\nmkdir -p \"$3\"\nexit 0",
            self.path.join("extract.log").display()
        ))
    }

    /// Stub extractor that exits non-zero for one bundle, succeeds otherwise
    #[cfg(unix)]
    pub fn write_failing_extractor(&self, fail_on: &str) -> PathBuf {
        self.write_extractor_script(&format!(
            "case \"$1\" in *{fail_on}*) exit 1 ;; esac\nmkdir -p \"$3\"\nexit 0"
        ))
    }

    #[cfg(unix)]
    fn write_extractor_script(&self, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = self.path.join("stub-extractor");
        std::fs::write(&script, format!("#!/bin/sh\n{body}\n"))
            .expect("Failed to write extractor script");
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod extractor script");
        script
    }

    /// Lines logged by the stub extractor, one per invocation
    pub fn extract_log(&self) -> Vec<String> {
        match std::fs::read_to_string(self.path.join("extract.log")) {
            Ok(content) => content.lines().map(String::from).collect(),
            Err(_) => Vec::new(),
        }
    }
}
