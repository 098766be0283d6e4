//! Per-document context supplied by the host pipeline.

use std::path::{Component, Path, PathBuf};

/// Location of the document being transformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentContext {
    /// Path of the source document. Relative paths are taken against `cwd`.
    pub file_path: PathBuf,
    /// Working/output root of the build.
    pub cwd: PathBuf,
}

impl DocumentContext {
    pub fn new(file_path: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            cwd: cwd.into(),
        }
    }

    /// Relative path from the document's directory to the build root.
    ///
    /// Uses `/` separators. Empty when the document lives directly in `cwd`.
    ///
    /// # Examples
    ///
    /// ```
    /// use docdiag_tree::DocumentContext;
    ///
    /// let ctx = DocumentContext::new("/site/docs/guide/intro.md", "/site");
    /// assert_eq!(ctx.relative_prefix(), "../..");
    ///
    /// let ctx = DocumentContext::new("index.md", "/site");
    /// assert_eq!(ctx.relative_prefix(), "");
    /// ```
    pub fn relative_prefix(&self) -> String {
        let document = self.cwd.join(&self.file_path);
        let document_dir = document.parent().unwrap_or(Path::new(""));
        relative_path(document_dir, &self.cwd)
    }
}

/// Lexical relative path between two directories, `/`-separated.
fn relative_path(from: &Path, to: &Path) -> String {
    let from_segs = normalized(from);
    let to_segs = normalized(to);

    let common = from_segs
        .iter()
        .zip(&to_segs)
        .take_while(|(a, b)| a == b)
        .count();

    let ups = std::iter::repeat_n("..".to_owned(), from_segs.len() - common);
    let downs = to_segs[common..].iter().cloned();
    ups.chain(downs).collect::<Vec<_>>().join("/")
}

/// Path components with `.` dropped and `..` folded into their parent.
fn normalized(path: &Path) -> Vec<String> {
    let mut segs: Vec<String> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if segs.last().is_some_and(|s| s != ".." && s != "/") {
                    segs.pop();
                } else {
                    segs.push("..".to_owned());
                }
            }
            Component::RootDir => segs.push("/".to_owned()),
            Component::Prefix(prefix) => {
                segs.push(prefix.as_os_str().to_string_lossy().into_owned());
            }
            Component::Normal(name) => segs.push(name.to_string_lossy().into_owned()),
        }
    }
    segs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_prefix_nested_document() {
        let ctx = DocumentContext::new("/site/docs/guide/intro.md", "/site");
        assert_eq!(ctx.relative_prefix(), "../..");
    }

    #[test]
    fn test_relative_prefix_document_in_root() {
        let ctx = DocumentContext::new("/site/index.md", "/site");
        assert_eq!(ctx.relative_prefix(), "");
    }

    #[test]
    fn test_relative_prefix_relative_document() {
        let ctx = DocumentContext::new("docs/intro.md", "/site");
        assert_eq!(ctx.relative_prefix(), "..");
    }

    #[test]
    fn test_relative_prefix_document_outside_root() {
        let ctx = DocumentContext::new("/shared/notes/a.md", "/site/build");
        assert_eq!(ctx.relative_prefix(), "../../site/build");
    }

    #[test]
    fn test_relative_prefix_dot_segments() {
        let ctx = DocumentContext::new("./docs/../docs/guide/./a.md", "/site");
        assert_eq!(ctx.relative_prefix(), "../..");
    }

    #[test]
    fn test_relative_path_same_directory() {
        assert_eq!(relative_path(Path::new("/a/b"), Path::new("/a/b")), "");
    }

    #[test]
    fn test_relative_path_siblings() {
        assert_eq!(relative_path(Path::new("/a/b"), Path::new("/a/c")), "../c");
    }
}
