//! Sequential replacement of diagram blocks with image references.

use docdiag_tree::{Image, Node};

use crate::cache::RenderCache;
use crate::client::RenderClient;
use crate::collect::SourceBlock;
use crate::consts::IMAGE_FORMAT;
use crate::error::TransformError;
use crate::fingerprint::Fingerprint;

/// Counts reported by [`rewrite`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RewriteStats {
    /// Blocks that required a Kroki render.
    pub rendered: usize,
    /// Blocks served from an existing image file.
    pub reused: usize,
}

/// Where rewritten image URLs point.
#[derive(Debug, Clone, Copy)]
pub struct ImageUrls<'a> {
    /// Relative path from the document to the build root.
    pub rel_prefix: &'a str,
    /// Public directory holding the images.
    pub img_ref_dir: &'a str,
}

impl ImageUrls<'_> {
    /// URL of the image for `fingerprint`.
    pub fn url_for(&self, fingerprint: &Fingerprint) -> String {
        format!(
            "{}/{}/{fingerprint}.{IMAGE_FORMAT}",
            self.rel_prefix, self.img_ref_dir
        )
    }
}

/// Resolve each block and turn its node into an image paragraph.
///
/// Blocks are handled one at a time in the order given. A node is rewritten
/// as soon as its own image is available, so when a block fails every
/// earlier block is already rewritten and no later block is touched.
pub fn rewrite<C: RenderClient + ?Sized>(
    tree: &mut Node,
    blocks: Vec<SourceBlock>,
    cache: &RenderCache,
    client: &C,
    urls: ImageUrls<'_>,
) -> Result<RewriteStats, TransformError> {
    let mut stats = RewriteStats::default();

    for block in blocks {
        let fingerprint = Fingerprint::of(&block.source);
        let hit = cache.ensure(&fingerprint, &block.source, &block.kind, client)?;
        if hit.reused {
            stats.reused += 1;
        } else {
            stats.rendered += 1;
        }

        let image = Image {
            url: urls.url_for(&fingerprint),
            title: block.title,
            alt: block.alt.unwrap_or_else(|| fingerprint.to_string()),
        };
        tree.get_mut(&block.node)
            .ok_or_else(|| TransformError::MissingNode(block.node.clone()))?
            .replace_with_image(image);
    }

    Ok(stats)
}
