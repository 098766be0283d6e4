//! Transform errors.

use std::path::PathBuf;

use docdiag_config::ConfigError;
use docdiag_tree::NodePath;

use crate::client::RenderError;

/// Error that aborts the transform of a document.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// The diagram options failed validation.
    #[error("Invalid diagram options: {0}")]
    Config(#[from] ConfigError),
    /// A required meta attribute is missing and cannot be inferred.
    #[error("Mandatory variable is not defined: {name} (code block language '{lang}')")]
    MissingAttribute { name: &'static str, lang: String },
    /// Kroki failed to render a diagram.
    #[error("Unable to get image text from kroki ({kind}), reason: {source}")]
    Render {
        kind: String,
        #[source]
        source: RenderError,
    },
    /// Reading or writing the image directory failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A collected node handle no longer resolves in the tree.
    #[error("code block at {0:?} no longer exists in the document tree")]
    MissingNode(NodePath),
}

impl TransformError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
