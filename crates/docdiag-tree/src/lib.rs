//! Document tree for docdiag.
//!
//! The diagram transform works on a small typed tree instead of a full
//! markdown AST:
//! - [`Node`]: tagged node variants (code blocks, image paragraphs, passthrough text)
//! - [`NodePath`]: stable handle used to find a node again after traversal
//! - [`DocumentContext`]: where the document lives relative to the build root
//! - [`markdown`]: `pulldown-cmark` based parse/render adapter
//!
//! # Example
//!
//! ```
//! use docdiag_tree::{Image, markdown};
//!
//! let mut tree = markdown::parse("```mermaid\ngraph TD\n```\n");
//! let (path, _) = tree.code_nodes().remove(0);
//! tree.get_mut(&path).unwrap().replace_with_image(Image {
//!     url: "/img/diagram.svg".to_owned(),
//!     title: None,
//!     alt: "diagram".to_owned(),
//! });
//! assert_eq!(markdown::render(&tree), "![diagram](/img/diagram.svg)\n");
//! ```

mod context;
pub mod markdown;
mod node;

pub use context::DocumentContext;
pub use node::{Code, Image, Node, NodePath};
