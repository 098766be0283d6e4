//! Markdown adapter for the document tree.
//!
//! [`parse`] splits a markdown document into fenced code blocks and the
//! verbatim text around them. [`render`] writes a (possibly rewritten) tree
//! back to markdown. Untouched content round-trips byte for byte.

use std::fmt::Write;
use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::node::{Code, Image, Node};

/// Fenced code block being accumulated.
struct PendingFence {
    span: Range<usize>,
    info: String,
    value: String,
}

/// Parse markdown into a tree of code blocks and passthrough text.
///
/// # Example
///
/// ```
/// use docdiag_tree::{Node, markdown};
///
/// let tree = markdown::parse("Intro\n\n```mermaid\ngraph TD\n```\n");
/// let codes = tree.code_nodes();
/// assert_eq!(codes.len(), 1);
/// assert_eq!(codes[0].1.lang, "mermaid");
/// assert_eq!(codes[0].1.value, "graph TD");
/// ```
pub fn parse(source: &str) -> Node {
    let mut children = Vec::new();
    let mut cursor = 0;
    let mut pending: Option<PendingFence> = None;

    for (event, range) in Parser::new_ext(source, Options::empty()).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                pending = Some(PendingFence {
                    span: range,
                    info: info.into_string(),
                    value: String::new(),
                });
            }
            Event::Text(text) => {
                if let Some(fence) = pending.as_mut() {
                    fence.value.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                let Some(fence) = pending.take() else {
                    continue;
                };
                let span = trim_line_ending(source, fence.span);
                if span.start > cursor {
                    children.push(Node::Markdown(source[cursor..span.start].to_owned()));
                }
                let (lang, meta) = split_info(&fence.info);
                children.push(Node::Code(Code {
                    lang: lang.to_owned(),
                    meta: meta.to_owned(),
                    value: strip_final_line_ending(&fence.value).to_owned(),
                    raw: Some(source[span.clone()].to_owned()),
                }));
                cursor = span.end;
            }
            _ => {}
        }
    }

    if cursor < source.len() {
        children.push(Node::Markdown(source[cursor..].to_owned()));
    }
    Node::Root(children)
}

/// Render a tree back to markdown.
pub fn render(tree: &Node) -> String {
    let mut out = String::new();
    write_node(tree, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Root(children) | Node::Paragraph(children) => {
            for child in children {
                write_node(child, out);
            }
        }
        Node::Markdown(text) => out.push_str(text),
        Node::Code(code) => write_code(code, out),
        Node::Image(image) => write_image(image, out),
    }
}

fn write_code(code: &Code, out: &mut String) {
    if let Some(raw) = &code.raw {
        out.push_str(raw);
        return;
    }
    let fence = "`".repeat(longest_backtick_run(&code.value).max(2) + 1);
    out.push_str(&fence);
    out.push_str(&code.lang);
    if !code.meta.is_empty() {
        out.push(' ');
        out.push_str(&code.meta);
    }
    out.push('\n');
    if !code.value.is_empty() {
        out.push_str(&code.value);
        out.push('\n');
    }
    out.push_str(&fence);
}

fn write_image(image: &Image, out: &mut String) {
    let alt = image.alt.replace('[', "\\[").replace(']', "\\]");
    match &image.title {
        Some(title) => {
            let title = title.replace('"', "\\\"");
            let _ = write!(out, "![{alt}]({} \"{title}\")", image.url);
        }
        None => {
            let _ = write!(out, "![{alt}]({})", image.url);
        }
    }
}

/// Split a fence info string into language tag and meta string.
fn split_info(info: &str) -> (&str, &str) {
    let info = info.trim();
    match info.split_once(char::is_whitespace) {
        Some((lang, meta)) => (lang, meta.trim_start()),
        None => (info, ""),
    }
}

/// Shrink a block span so its trailing line ending stays in the following text.
fn trim_line_ending(source: &str, span: Range<usize>) -> Range<usize> {
    let text = &source[span.clone()];
    let kept = strip_final_line_ending(text).len();
    span.start..span.start + kept
}

fn strip_final_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

fn longest_backtick_run(text: &str) -> usize {
    text.split(|c| c != '`').map(str::len).max().unwrap_or(0)
}
