//! Bundle manifest: the catalog of remotely available asset bundles
//!
//! A manifest maps bundle names to downloadable [`BundleEntry`] handles.
//! It is obtained once per run through a [`ManifestClient`] and consulted
//! by name lookup ([`Manifest::resolve`]) or glob search
//! ([`Manifest::matching`]).

mod client;
mod entry;

pub use client::{ManifestClient, ManifestSource, RemoteManifestClient};
pub use entry::{BundleEntry, BundleLocation};

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{GkfetchError, Result};

/// In-memory catalog mapping bundle names to downloadable handles
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    revision: Option<u64>,
    entries: BTreeMap<String, BundleEntry>,
}

/// Manifest document as serialized: a revision plus a flat bundle list
#[derive(Deserialize)]
struct RawManifest {
    revision: Option<u64>,
    #[serde(default)]
    bundles: Vec<RawEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    name: String,
    url: Option<String>,
    path: Option<PathBuf>,
    size: Option<u64>,
    md5: Option<String>,
    category: Option<String>,
}

impl Manifest {
    /// Build a manifest from entries; duplicate names are rejected
    pub fn from_entries(
        revision: Option<u64>,
        entries: impl IntoIterator<Item = BundleEntry>,
    ) -> Result<Self> {
        let mut map = BTreeMap::new();
        for entry in entries {
            let name = entry.name.clone();
            if map.insert(name.clone(), entry).is_some() {
                return Err(GkfetchError::ManifestParseFailed {
                    reason: format!("duplicate bundle name '{name}'"),
                });
            }
        }
        Ok(Self {
            revision,
            entries: map,
        })
    }

    /// Parse a manifest from its JSON document form
    pub fn from_json(data: &str) -> Result<Self> {
        let raw: RawManifest = serde_json::from_str(data)?;
        let entries = raw
            .bundles
            .into_iter()
            .map(raw_entry_into_bundle)
            .collect::<Result<Vec<_>>>()?;
        Self::from_entries(raw.revision, entries)
    }

    /// Resolve a bundle name to its downloadable handle
    pub fn resolve(&self, name: &str) -> Result<&BundleEntry> {
        self.entries
            .get(name)
            .ok_or_else(|| GkfetchError::BundleNotFound {
                name: name.to_string(),
            })
    }

    /// All entries, ordered by name
    pub fn entries(&self) -> impl Iterator<Item = &BundleEntry> {
        self.entries.values()
    }

    /// Entries whose names match a glob pattern, ordered by name
    pub fn matching(&self, pattern: &str) -> Result<Vec<&BundleEntry>> {
        let glob = Glob::new(pattern).map_err(|_| GkfetchError::InvalidPattern {
            pattern: pattern.to_string(),
        })?;

        Ok(self
            .entries
            .values()
            .filter(|entry| {
                glob.matched(&CandidatePath::from(entry.name.as_str()))
                    .is_some()
            })
            .collect())
    }

    /// Manifest revision, when the document declares one
    pub fn revision(&self) -> Option<u64> {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn raw_entry_into_bundle(raw: RawEntry) -> Result<BundleEntry> {
    let location = match (raw.url, raw.path) {
        (Some(url), None) => BundleLocation::Url(url),
        (None, Some(path)) => BundleLocation::Path(path),
        _ => {
            return Err(GkfetchError::ManifestParseFailed {
                reason: format!(
                    "bundle '{}' must declare exactly one of 'url' or 'path'",
                    raw.name
                ),
            });
        }
    };

    Ok(BundleEntry {
        name: raw.name,
        location,
        size: raw.size,
        md5: raw.md5,
        category: raw.category,
    })
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    const MANIFEST_JSON: &str = r#"{
        "revision": 42,
        "bundles": [
            {
                "name": "mdl_chr_ttmr-casl-0000_body",
                "url": "https://assets.example/mdl_chr_ttmr-casl-0000_body.unity3d",
                "size": 4194304,
                "md5": "0123456789abcdef0123456789abcdef",
                "category": "mdl"
            },
            {
                "name": "mdl_chr_ttmr-base-0000_face",
                "url": "https://assets.example/mdl_chr_ttmr-base-0000_face.unity3d"
            },
            {
                "name": "img_chr_ttmr_full",
                "path": "mirror/img_chr_ttmr_full.unity3d"
            }
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let manifest = Manifest::from_json(MANIFEST_JSON).expect("parse");
        assert_eq!(manifest.revision(), Some(42));
        assert_eq!(manifest.len(), 3);
    }

    #[test]
    fn test_resolve_known_name() {
        let manifest = Manifest::from_json(MANIFEST_JSON).expect("parse");
        let entry = manifest
            .resolve("mdl_chr_ttmr-casl-0000_body")
            .expect("resolve");
        assert_eq!(entry.size, Some(4_194_304));
        assert_eq!(entry.category.as_deref(), Some("mdl"));
        assert!(matches!(entry.location, BundleLocation::Url(_)));
    }

    #[test]
    fn test_resolve_unknown_name() {
        let manifest = Manifest::from_json(MANIFEST_JSON).expect("parse");
        let result = manifest.resolve("mdl_chr_hski-casl-0000_body");
        assert!(matches!(result, Err(GkfetchError::BundleNotFound { .. })));
    }

    #[test]
    fn test_entries_ordered_by_name() {
        let manifest = Manifest::from_json(MANIFEST_JSON).expect("parse");
        let names: Vec<&str> = manifest.entries().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "img_chr_ttmr_full",
                "mdl_chr_ttmr-base-0000_face",
                "mdl_chr_ttmr-casl-0000_body",
            ]
        );
    }

    #[test]
    fn test_matching_glob() {
        let manifest = Manifest::from_json(MANIFEST_JSON).expect("parse");
        let matches = manifest.matching("mdl_chr_ttmr*").expect("glob");
        assert_eq!(matches.len(), 2);

        let matches = manifest.matching("*ttmr*").expect("glob");
        assert_eq!(matches.len(), 3);

        let matches = manifest.matching("vo_*").expect("glob");
        assert!(matches.is_empty());
    }

    #[test]
    fn test_matching_invalid_pattern() {
        let manifest = Manifest::from_json(MANIFEST_JSON).expect("parse");
        let result = manifest.matching("mdl[");
        assert!(matches!(result, Err(GkfetchError::InvalidPattern { .. })));
    }

    #[test]
    fn test_entry_requires_exactly_one_location() {
        let both = r#"{"bundles": [{"name": "x", "url": "https://a", "path": "b"}]}"#;
        assert!(matches!(
            Manifest::from_json(both),
            Err(GkfetchError::ManifestParseFailed { .. })
        ));

        let neither = r#"{"bundles": [{"name": "x"}]}"#;
        assert!(matches!(
            Manifest::from_json(neither),
            Err(GkfetchError::ManifestParseFailed { .. })
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let dup = r#"{"bundles": [
            {"name": "x", "url": "https://a"},
            {"name": "x", "url": "https://b"}
        ]}"#;
        assert!(matches!(
            Manifest::from_json(dup),
            Err(GkfetchError::ManifestParseFailed { .. })
        ));
    }

    #[test]
    fn test_invalid_json() {
        let result = Manifest::from_json("not json");
        assert!(matches!(
            result,
            Err(GkfetchError::ManifestParseFailed { .. })
        ));
    }
}
