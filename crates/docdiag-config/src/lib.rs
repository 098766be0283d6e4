//! Configuration for docdiag diagram rendering.
//!
//! Hosts normally build [`DiagramOptions`] in code. Options can also be read
//! from TOML, either as a bare table or from a `[diagrams]` section:
//!
//! ```toml
//! [diagrams]
//! kroki_base = "https://kroki.io"
//! img_dir = "static/img/kroki"
//! img_ref_dir = "img/kroki"
//! lang = "kroki"
//! ```
//!
//! No environment variable expansion is performed; every value is taken
//! verbatim.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Section name searched for when loading options from a TOML document.
const SECTION_NAME: &str = "diagrams";

/// Settings for the diagram transform.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiagramOptions {
    /// Base URL of the Kroki service (e.g., `https://kroki.io`).
    pub kroki_base: String,
    /// Directory rendered images are written to.
    ///
    /// Absolute paths are used as-is; relative paths are resolved against the
    /// working directory at render time.
    pub img_dir: PathBuf,
    /// Directory segment used in generated image URLs.
    pub img_ref_dir: String,
    /// Code fence language that always triggers rendering.
    ///
    /// Blocks using this language must name the diagram type with
    /// `imgType="..."` unless the language is itself a supported diagram type.
    pub lang: String,
}

impl DiagramOptions {
    /// Create options from the four required settings.
    pub fn new(
        kroki_base: impl Into<String>,
        img_dir: impl Into<PathBuf>,
        img_ref_dir: impl Into<String>,
        lang: impl Into<String>,
    ) -> Self {
        Self {
            kroki_base: kroki_base.into(),
            img_dir: img_dir.into(),
            img_ref_dir: img_ref_dir.into(),
            lang: lang.into(),
        }
    }

    /// Parse and validate options from a TOML string.
    ///
    /// Reads the `[diagrams]` table when present, otherwise the whole document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut table: toml::Table = toml::from_str(content)?;
        let value = match table.remove(SECTION_NAME) {
            Some(section @ toml::Value::Table(_)) => section,
            Some(_) => {
                return Err(ConfigError::Validation(format!(
                    "[{SECTION_NAME}] must be a table"
                )));
            }
            None => toml::Value::Table(table),
        };
        let options: Self = value.try_into()?;
        options.validate()?;
        Ok(options)
    }

    /// Load and validate options from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate option values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a field is empty or `kroki_base`
    /// is not an http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.kroki_base, "kroki_base")?;
        require_http_url(&self.kroki_base, "kroki_base")?;
        require_non_empty(&self.img_dir.to_string_lossy(), "img_dir")?;
        require_non_empty(&self.img_ref_dir, "img_ref_dir")?;
        require_non_empty(&self.lang, "lang")?;
        Ok(())
    }

    /// Kroki base URL without trailing slashes.
    pub fn kroki_base(&self) -> &str {
        self.kroki_base.trim_end_matches('/')
    }

    /// Image output directory resolved against `cwd` when relative.
    pub fn resolved_img_dir(&self, cwd: &Path) -> PathBuf {
        if self.img_dir.is_absolute() {
            self.img_dir.clone()
        } else {
            cwd.join(&self.img_dir)
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> DiagramOptions {
        DiagramOptions::new("https://kroki.io", "static/img", "img", "kroki")
    }

    #[test]
    fn test_new_sets_all_fields() {
        let options = sample();
        assert_eq!(options.kroki_base, "https://kroki.io");
        assert_eq!(options.img_dir, PathBuf::from("static/img"));
        assert_eq!(options.img_ref_dir, "img");
        assert_eq!(options.lang, "kroki");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_parse_diagrams_section() {
        let toml = r#"
[site]
title = "ignored"

[diagrams]
kroki_base = "http://localhost:8000"
img_dir = "/var/www/img"
img_ref_dir = "img"
lang = "kroki"
"#;
        let options = DiagramOptions::from_toml_str(toml).unwrap();
        assert_eq!(
            options,
            DiagramOptions::new("http://localhost:8000", "/var/www/img", "img", "kroki")
        );
    }

    #[test]
    fn test_parse_bare_table() {
        let toml = r#"
kroki_base = "https://kroki.io"
img_dir = "static/img"
img_ref_dir = "img"
lang = "kroki"
"#;
        let options = DiagramOptions::from_toml_str(toml).unwrap();
        assert_eq!(options, sample());
    }

    #[test]
    fn test_parse_missing_field() {
        let toml = r#"
[diagrams]
kroki_base = "https://kroki.io"
img_dir = "static/img"
lang = "kroki"
"#;
        let err = DiagramOptions::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("img_ref_dir"));
    }

    #[test]
    fn test_parse_section_not_table() {
        let err = DiagramOptions::from_toml_str(r#"diagrams = "kroki""#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let options = DiagramOptions::new("kroki.io", "img", "img", "kroki");
        let err = options.validate().unwrap_err();
        assert!(
            err.to_string()
                .contains("kroki_base must start with http:// or https://")
        );
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let cases = [
            (DiagramOptions::new("", "img", "img", "kroki"), "kroki_base"),
            (
                DiagramOptions::new("https://kroki.io", "", "img", "kroki"),
                "img_dir",
            ),
            (
                DiagramOptions::new("https://kroki.io", "img", "", "kroki"),
                "img_ref_dir",
            ),
            (DiagramOptions::new("https://kroki.io", "img", "img", ""), "lang"),
        ];

        for (options, field) in cases {
            let err = options.validate().unwrap_err();
            assert_eq!(err.to_string(), format!("Configuration error: {field} cannot be empty"));
        }
    }

    #[test]
    fn test_kroki_base_trims_trailing_slash() {
        let options = DiagramOptions::new("https://kroki.io//", "img", "img", "kroki");
        assert_eq!(options.kroki_base(), "https://kroki.io");
    }

    #[test]
    fn test_resolved_img_dir_relative() {
        let options = sample();
        assert_eq!(
            options.resolved_img_dir(Path::new("/project")),
            PathBuf::from("/project/static/img")
        );
    }

    #[test]
    fn test_resolved_img_dir_absolute() {
        let options = DiagramOptions::new("https://kroki.io", "/srv/img", "img", "kroki");
        assert_eq!(
            options.resolved_img_dir(Path::new("/project")),
            PathBuf::from("/srv/img")
        );
    }

    #[test]
    fn test_load_not_found() {
        let err = DiagramOptions::load(Path::new("/nonexistent/docdiag.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("docdiag.toml");
        std::fs::write(
            &path,
            "[diagrams]\nkroki_base = \"https://kroki.io\"\nimg_dir = \"static/img\"\nimg_ref_dir = \"img\"\nlang = \"kroki\"\n",
        )
        .unwrap();

        let options = DiagramOptions::load(&path).unwrap();
        assert_eq!(options, sample());
    }
}
