//! Document transform entry points.

use docdiag_config::DiagramOptions;
use docdiag_tree::{DocumentContext, Node};

use crate::cache::RenderCache;
use crate::client::{KrokiClient, RenderClient};
use crate::collect::collect;
use crate::error::TransformError;
use crate::rewrite::{ImageUrls, RewriteStats, rewrite};

/// Replaces diagram code blocks with references to rendered images.
///
/// # Example
///
/// ```no_run
/// use docdiag_config::DiagramOptions;
/// use docdiag_kroki::KrokiTransform;
/// use docdiag_tree::{DocumentContext, markdown};
///
/// let options = DiagramOptions::new("https://kroki.io", "static/img/kroki", "img/kroki", "kroki");
/// let transform = KrokiTransform::new(options)?;
///
/// let mut tree = markdown::parse("```mermaid\ngraph TD; A-->B;\n```\n");
/// let ctx = DocumentContext::new("/site/docs/intro.md", "/site");
/// transform.transform(&mut tree, &ctx)?;
/// # Ok::<(), docdiag_kroki::TransformError>(())
/// ```
#[derive(Debug)]
pub struct KrokiTransform<C = KrokiClient> {
    options: DiagramOptions,
    client: C,
}

impl KrokiTransform {
    /// Create a transform rendering through the Kroki server in `options`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Config`] if the options fail validation.
    pub fn new(options: DiagramOptions) -> Result<Self, TransformError> {
        let client = KrokiClient::new(options.kroki_base());
        Self::with_client(options, client)
    }
}

impl<C: RenderClient> KrokiTransform<C> {
    /// Create a transform with a custom render client.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::Config`] if the options fail validation.
    pub fn with_client(options: DiagramOptions, client: C) -> Result<Self, TransformError> {
        options.validate()?;
        Ok(Self { options, client })
    }

    pub fn options(&self) -> &DiagramOptions {
        &self.options
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Transform one document.
    ///
    /// Diagram blocks are collected first, then rendered and rewritten one at
    /// a time in document order. A relative image directory is resolved
    /// against the process working directory at call time.
    ///
    /// # Errors
    ///
    /// Fails on the first block that cannot be resolved. Blocks before it
    /// stay rewritten; blocks after it are left untouched.
    pub fn transform(
        &self,
        tree: &mut Node,
        ctx: &DocumentContext,
    ) -> Result<RewriteStats, TransformError> {
        let img_dir = if self.options.img_dir.is_relative() {
            let cwd = std::env::current_dir().map_err(TransformError::io("."))?;
            self.options.resolved_img_dir(&cwd)
        } else {
            self.options.img_dir.clone()
        };
        self.transform_with_cache(tree, ctx, &RenderCache::new(img_dir))
    }

    /// Transform one document using an explicit image cache.
    pub fn transform_with_cache(
        &self,
        tree: &mut Node,
        ctx: &DocumentContext,
        cache: &RenderCache,
    ) -> Result<RewriteStats, TransformError> {
        let blocks = collect(tree, &self.options.lang)?;
        if blocks.is_empty() {
            return Ok(RewriteStats::default());
        }

        let rel_prefix = ctx.relative_prefix();
        let urls = ImageUrls {
            rel_prefix: &rel_prefix,
            img_ref_dir: &self.options.img_ref_dir,
        };
        let stats = rewrite(tree, blocks, cache, &self.client, urls)?;

        tracing::debug!(
            document = %ctx.file_path.display(),
            rendered = stats.rendered,
            reused = stats.reused,
            "Diagrams processed"
        );
        Ok(stats)
    }
}

/// Build the document visitor for a host pipeline.
///
/// The returned closure transforms one document per call and returns once
/// every diagram block has been rewritten or the first error occurred.
///
/// # Errors
///
/// Returns [`TransformError::Config`] if the options fail validation.
pub fn transform(
    options: DiagramOptions,
) -> Result<impl Fn(&mut Node, &DocumentContext) -> Result<(), TransformError>, TransformError> {
    let transform = KrokiTransform::new(options)?;
    Ok(move |tree: &mut Node, ctx: &DocumentContext| transform.transform(tree, ctx).map(|_| ()))
}
