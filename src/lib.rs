mod block;
mod html;
mod inline;
mod parser;
mod render;

pub mod config;
pub mod site;

pub use block::{Block, BlockKind};
pub use html::HtmlNode;
pub use inline::{TextSpan, extract_images, extract_links, span_to_node, tokenize};
pub use render::block_to_node;

/// Split markdown text into classified blocks.
pub fn parse(markdown: &str) -> Vec<Block<'_>> {
    parser::parse(markdown)
}

/// Convert markdown to an HTML document tree rooted at a `<div>`.
pub fn markdown_to_html_tree(markdown: &str) -> HtmlNode {
    let blocks = parse(markdown);
    render::render_document(&blocks)
}

/// Convert markdown to a serialized HTML string.
pub fn markdown_to_html(markdown: &str) -> String {
    markdown_to_html_tree(markdown).to_html()
}
