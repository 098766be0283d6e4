//! Diagram block discovery.

use docdiag_tree::{Node, NodePath};

use crate::consts::{ALT_ATTR, TITLE_ATTR, TYPE_ATTR};
use crate::error::TransformError;
use crate::language::DiagramLanguage;
use crate::meta::extract_param;

/// A code block waiting to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBlock {
    /// Handle to the code node in the tree.
    pub node: NodePath,
    /// Kroki diagram type.
    pub kind: String,
    /// Alt text from `imgAlt`.
    pub alt: Option<String>,
    /// Title from `imgTitle`.
    pub title: Option<String>,
    /// Diagram source text.
    pub source: String,
}

/// Collect every diagram block in `tree`, in document order.
///
/// A code node is picked up when its language equals `native_lang` or is a
/// supported [`DiagramLanguage`]. Supported languages render with their own
/// endpoint; any other native-language block must carry `imgType="..."`.
/// The tree is only read.
///
/// # Errors
///
/// Returns [`TransformError::MissingAttribute`] for a native-language block
/// without `imgType`.
pub fn collect(tree: &Node, native_lang: &str) -> Result<Vec<SourceBlock>, TransformError> {
    let mut blocks = Vec::new();

    for (node, code) in tree.code_nodes() {
        let language = DiagramLanguage::parse(&code.lang);
        if language.is_none() && code.lang != native_lang {
            continue;
        }

        let kind = match language {
            Some(language) => language.kroki_endpoint(),
            None => extract_param(TYPE_ATTR, &code.meta).ok_or_else(|| {
                TransformError::MissingAttribute {
                    name: TYPE_ATTR,
                    lang: code.lang.clone(),
                }
            })?,
        };

        blocks.push(SourceBlock {
            node,
            kind: kind.to_owned(),
            alt: extract_param(ALT_ATTR, &code.meta).map(str::to_owned),
            title: extract_param(TITLE_ATTR, &code.meta).map(str::to_owned),
            source: code.value.clone(),
        });
    }

    Ok(blocks)
}
