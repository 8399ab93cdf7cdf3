use crate::block::{Block, BlockKind};
use crate::html::HtmlNode;
use crate::inline::{span_to_node, tokenize};

/// Render a block sequence as a document tree rooted at a `<div>`.
///
/// An empty sequence yields a root with zero children, which serializes
/// to `<div></div>`.
pub fn render_document(blocks: &[Block]) -> HtmlNode {
    let children = blocks.iter().map(block_to_node).collect();
    HtmlNode::parent("div", children)
}

/// Render one block as an HTML element.
pub fn block_to_node(block: &Block) -> HtmlNode {
    match block.kind {
        BlockKind::Heading => heading(block),
        BlockKind::Code => code(block),
        BlockKind::Quote => quote(block),
        BlockKind::UnorderedList => list(block, "ul", unordered_item),
        BlockKind::OrderedList => list(block, "ol", ordered_item),
        BlockKind::Paragraph => paragraph(block),
    }
}

fn inline_nodes(text: &str) -> Vec<HtmlNode> {
    tokenize(text).iter().map(span_to_node).collect()
}

fn heading(block: &Block) -> HtmlNode {
    let line = block.lines.first().copied().unwrap_or("");
    let level = line.chars().take_while(|c| *c == '#').count().min(6);
    let text = line.trim_start_matches('#').trim();
    HtmlNode::parent(&format!("h{level}"), inline_nodes(text))
}

fn code(block: &Block) -> HtmlNode {
    // First and last line are the fence markers; the body keeps its line
    // breaks and gains a trailing newline, with no inline tokenization.
    let body = if block.lines.len() > 1 {
        block.lines[1..block.lines.len() - 1].join("\n")
    } else {
        String::new()
    };
    let code = HtmlNode::leaf("code", format!("{body}\n"));
    HtmlNode::parent("pre", vec![code])
}

fn quote(block: &Block) -> HtmlNode {
    let text = block
        .lines
        .iter()
        .map(|line| {
            let line = line.strip_prefix('>').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join(" ");
    HtmlNode::parent("blockquote", inline_nodes(&text))
}

fn list(block: &Block, tag: &str, item_text: fn(&str) -> &str) -> HtmlNode {
    let items = block
        .lines
        .iter()
        .map(|line| HtmlNode::parent("li", inline_nodes(item_text(line))))
        .collect();
    HtmlNode::parent(tag, items)
}

fn unordered_item(line: &str) -> &str {
    line.strip_prefix("* ").unwrap_or(line).trim()
}

fn ordered_item(line: &str) -> &str {
    // Strips the whole leading run of digits, dots, and spaces, so item
    // text that itself starts with one of those loses characters
    // ("1. 2nd item" becomes "nd item").
    line.trim_start_matches(|c: char| c.is_ascii_digit() || c == '.' || c == ' ')
}

fn paragraph(block: &Block) -> HtmlNode {
    HtmlNode::parent("p", inline_nodes(&block.lines.join(" ")))
}
