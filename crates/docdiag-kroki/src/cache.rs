//! Content-addressed image cache on disk.
//!
//! Each rendered diagram is stored as `{dir}/{fingerprint}.svg`. The file's
//! existence is the cache entry: there is no index, no expiry and no
//! eviction. Entries are written once and reused by every later build.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::Builder;

use crate::client::RenderClient;
use crate::consts::IMAGE_FORMAT;
use crate::error::TransformError;
use crate::fingerprint::Fingerprint;

const TEMP_PREFIX: &str = ".docdiag-";

/// Outcome of [`RenderCache::ensure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheHit {
    /// Location of the rendered image.
    pub path: PathBuf,
    /// Whether the image already existed (no render was performed).
    pub reused: bool,
}

/// Image cache rooted at a directory.
#[derive(Debug, Clone)]
pub struct RenderCache {
    dir: PathBuf,
}

impl RenderCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Expected image path for a fingerprint.
    pub fn path_for(&self, fingerprint: &Fingerprint) -> PathBuf {
        self.dir.join(format!("{fingerprint}.{IMAGE_FORMAT}"))
    }

    /// Make sure the image for `fingerprint` exists, rendering it if needed.
    ///
    /// An existing file is returned without contacting the render client.
    /// Otherwise the diagram is rendered and written; a failed render leaves
    /// nothing behind at the image path.
    pub fn ensure<C: RenderClient + ?Sized>(
        &self,
        fingerprint: &Fingerprint,
        source: &str,
        kind: &str,
        client: &C,
    ) -> Result<CacheHit, TransformError> {
        let path = self.path_for(fingerprint);

        if path.exists() {
            tracing::debug!(path = %path.display(), "Reusing image file");
            return Ok(CacheHit { path, reused: true });
        }

        let svg = client
            .render(kind, source)
            .map_err(|source| TransformError::Render {
                kind: kind.to_owned(),
                source,
            })?;
        self.persist(&path, &svg)?;

        tracing::info!(kind, path = %path.display(), "Rendered diagram");
        Ok(CacheHit {
            path,
            reused: false,
        })
    }

    /// Write `contents` to `path` through a temporary file in the same directory.
    ///
    /// The rename makes the final file appear complete or not at all. The
    /// temporary file gets the same mode as a plain `fs::write`.
    fn persist(&self, path: &Path, contents: &str) -> Result<(), TransformError> {
        fs::create_dir_all(&self.dir).map_err(TransformError::io(&self.dir))?;

        let mut builder = Builder::new();
        builder.prefix(TEMP_PREFIX);
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        let mut tmp = builder
            .tempfile_in(&self.dir)
            .map_err(TransformError::io(&self.dir))?;
        tmp.write_all(contents.as_bytes())
            .map_err(TransformError::io(tmp.path()))?;
        tmp.persist(path)
            .map_err(|e| TransformError::io(path)(e.error))?;
        Ok(())
    }
}
