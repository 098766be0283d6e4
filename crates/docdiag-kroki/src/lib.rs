//! Kroki diagram rendering for docdiag document trees.
//!
//! This crate replaces diagram code blocks with references to rendered SVG
//! images:
//! - Blocks in a supported diagram language (`mermaid`, `plantuml`, ...) or in
//!   the configured native language are collected in document order
//! - Each block's source is fingerprinted; images live at `{img_dir}/{fingerprint}.svg`
//! - Missing images are rendered one at a time via the Kroki service
//! - Each code node becomes a paragraph holding an image reference
//!
//! # Architecture
//!
//! - [`Fingerprint`]: content hash used as cache key and file name
//! - [`extract_param`]: `key="value"` lookup in code fence meta strings
//! - [`DiagramLanguage`]: supported diagram languages
//! - [`RenderClient`] / [`KrokiClient`]: single-request HTTP rendering
//! - [`RenderCache`]: write-once image files on disk
//! - [`collect`] and [`rewrite`]: the two passes over the tree
//! - [`KrokiTransform`] / [`transform`]: entry points for a host pipeline
//!
//! # Example
//!
//! ```no_run
//! use docdiag_config::DiagramOptions;
//! use docdiag_tree::{DocumentContext, markdown};
//!
//! let options = DiagramOptions::new("https://kroki.io", "static/img/kroki", "img/kroki", "kroki");
//! let visit = docdiag_kroki::transform(options)?;
//!
//! let mut tree = markdown::parse("```plantuml\n@startuml\nA -> B\n@enduml\n```\n");
//! visit(&mut tree, &DocumentContext::new("docs/intro.md", "/site"))?;
//! println!("{}", markdown::render(&tree));
//! # Ok::<(), docdiag_kroki::TransformError>(())
//! ```

mod cache;
mod client;
mod collect;
mod consts;
mod error;
mod fingerprint;
mod language;
mod meta;
mod rewrite;
mod transform;

pub use cache::{CacheHit, RenderCache};
pub use client::{KrokiClient, RenderClient, RenderError};
pub use collect::{SourceBlock, collect};
pub use error::TransformError;
pub use fingerprint::Fingerprint;
pub use language::DiagramLanguage;
pub use meta::extract_param;
pub use rewrite::{ImageUrls, RewriteStats, rewrite};
pub use transform::{KrokiTransform, transform};
