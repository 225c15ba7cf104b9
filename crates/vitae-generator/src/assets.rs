//! Static asset copying with optional fingerprinting.
//!
//! Everything under the static directory is copied into the output. With
//! fingerprinting on, stylesheets, scripts, fonts and images get a content
//! hash in their file name and the mapping is recorded in an [`AssetManifest`].

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Asset processing errors.
#[derive(Debug, Error)]
pub enum AssetError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory walk failed.
    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Invalid asset path.
    #[error("invalid asset path: {0}")]
    InvalidPath(PathBuf),

    /// Manifest serialization failed.
    #[error("failed to serialize asset manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Result type for asset operations.
pub type Result<T> = std::result::Result<T, AssetError>;

/// Extensions that get fingerprinted.
const FINGERPRINT_EXTENSIONS: &[&str] = &[
    "css", "js", "woff", "woff2", "png", "jpg", "jpeg", "gif", "svg", "webp", "avif",
];

/// File name of the manifest written next to the copied assets.
pub const MANIFEST_FILE: &str = "asset-manifest.json";

/// Map from site-relative source path to site-relative output path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetManifest {
    assets: BTreeMap<String, String>,
}

impl AssetManifest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, original: impl Into<String>, output: impl Into<String>) {
        self.assets.insert(original.into(), output.into());
    }

    #[must_use]
    pub fn get(&self, original: &str) -> Option<&str> {
        self.assets.get(original).map(String::as_str)
    }

    /// Rewrite a document reference to its fingerprinted path.
    ///
    /// References outside the manifest, such as external URLs, come back as-is.
    #[must_use]
    pub fn resolve<'a>(&'a self, reference: &'a str) -> &'a str {
        self.get(reference).unwrap_or(reference)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Serialize the manifest as pretty JSON, keys sorted.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.assets)?)
    }
}

/// Copies static files into the output directory.
#[derive(Debug)]
pub struct AssetProcessor {
    fingerprint: bool,
}

impl AssetProcessor {
    #[must_use]
    pub fn new(fingerprint: bool) -> Self {
        Self { fingerprint }
    }

    /// Copy every non-hidden file from `source_dir` into `dest_dir`.
    ///
    /// A missing source directory is not an error; the manifest is empty.
    pub fn process(&self, source_dir: &Path, dest_dir: &Path) -> Result<AssetManifest> {
        let mut manifest = AssetManifest::new();

        if !source_dir.is_dir() {
            debug!(path = %source_dir.display(), "no static directory, skipping assets");
            return Ok(manifest);
        }

        info!(
            source = %source_dir.display(),
            dest = %dest_dir.display(),
            "processing assets"
        );

        let walker = WalkDir::new(source_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.path()));

        for entry in walker {
            let entry = entry.map_err(|source| AssetError::Walk {
                path: source_dir.to_path_buf(),
                source,
            })?;
            if entry.file_type().is_file() {
                self.process_file(source_dir, entry.path(), dest_dir, &mut manifest)?;
            }
        }

        info!(count = manifest.len(), "assets processed");
        Ok(manifest)
    }

    fn process_file(
        &self,
        base_dir: &Path,
        file_path: &Path,
        dest_base: &Path,
        manifest: &mut AssetManifest,
    ) -> Result<()> {
        let relative = file_path
            .strip_prefix(base_dir)
            .map_err(|_| AssetError::InvalidPath(file_path.to_path_buf()))?;

        let dest_relative = if self.fingerprint && should_fingerprint(file_path) {
            let bytes = fs::read(file_path)?;
            let stem = file_path.file_stem().unwrap_or_default().to_string_lossy();
            let ext = file_path.extension().unwrap_or_default().to_string_lossy();
            let parent = relative.parent().unwrap_or(Path::new(""));
            parent.join(format!("{stem}.{}.{ext}", content_hash(&bytes)))
        } else {
            relative.to_path_buf()
        };

        let dest_path = dest_base.join(&dest_relative);
        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(file_path, &dest_path)?;

        manifest.add(site_path(relative), site_path(&dest_relative));

        debug!(
            src = %file_path.display(),
            dest = %dest_path.display(),
            "copied asset"
        );

        Ok(())
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|n| n.to_string_lossy().starts_with('.'))
}

fn should_fingerprint(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| FINGERPRINT_EXTENSIONS.contains(&ext.as_str()))
}

/// "/"-rooted URL path for a relative file path.
fn site_path(relative: &Path) -> String {
    format!("/{}", relative.display()).replace('\\', "/")
}

/// First 8 hex digits of the FNV-1a hash of `bytes`.
fn content_hash(bytes: &[u8]) -> String {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    format!("{hash:016x}")[..8].to_string()
}
