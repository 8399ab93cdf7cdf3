use std::sync::OnceLock;

use regex::Regex;

use crate::block::{Block, BlockKind};

static ORDERED_RE: OnceLock<Regex> = OnceLock::new();

fn ordered_re() -> &'static Regex {
    ORDERED_RE.get_or_init(|| Regex::new(r"^\d+\.").expect("invalid ordered-list regex"))
}

/// Classify a block by its first line, first match wins.
fn classify(first_line: &str) -> BlockKind {
    if first_line.starts_with('#') {
        BlockKind::Heading
    } else if first_line.starts_with("```") {
        BlockKind::Code
    } else if first_line.starts_with('>') {
        BlockKind::Quote
    } else if first_line.starts_with("* ") {
        BlockKind::UnorderedList
    } else if ordered_re().is_match(first_line) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}

/// Split source text into classified blocks.
///
/// A whitespace-only line closes the current block. A line starting with
/// `#` closes the block right after being added, so consecutive heading
/// lines become one block each with no blank line needed between them.
/// A block opened by a non-heading line keeps a later `#` line it
/// swallowed this way; classification only ever looks at the first line.
pub fn parse(markdown: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut pending = Vec::new();

    for line in markdown.lines() {
        if line.trim().is_empty() {
            flush(&mut pending, &mut blocks);
            continue;
        }
        pending.push(line);
        if line.starts_with('#') {
            flush(&mut pending, &mut blocks);
        }
    }
    flush(&mut pending, &mut blocks);

    blocks
}

fn flush<'a>(pending: &mut Vec<&'a str>, blocks: &mut Vec<Block<'a>>) {
    if pending.is_empty() {
        return;
    }
    let lines = std::mem::take(pending);
    blocks.push(Block {
        kind: classify(lines[0]),
        lines,
    });
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_input_yields_no_blocks() {
        assert_eq!(parse(""), Vec::new());
        assert_eq!(parse("\n\n  \n"), Vec::new());
    }

    #[test]
    fn single_paragraph() {
        assert_eq!(
            parse("This is a single paragraph."),
            vec![Block {
                kind: BlockKind::Paragraph,
                lines: vec!["This is a single paragraph."],
            }]
        );
    }

    #[test]
    fn blank_line_separates_blocks() {
        let blocks = parse("first\n\nsecond");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lines, vec!["first"]);
        assert_eq!(blocks[1].lines, vec!["second"]);
    }

    #[test]
    fn multi_line_paragraph_stays_one_block() {
        let blocks = parse("one\ntwo\nthree");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn consecutive_headings_never_merge() {
        let blocks = parse("# Heading 1\n## Heading 2\n### Heading 3");
        assert_eq!(blocks.len(), 3);
        for block in &blocks {
            assert_eq!(block.kind, BlockKind::Heading);
        }
        assert_eq!(blocks[0].lines, vec!["# Heading 1"]);
        assert_eq!(blocks[1].lines, vec!["## Heading 2"]);
        assert_eq!(blocks[2].lines, vec!["### Heading 3"]);
    }

    #[test]
    fn heading_line_closes_an_open_paragraph_with_it() {
        // The `#` line is added to the open block before closing it, so it
        // ends up inside the paragraph rather than forming its own heading.
        let blocks = parse("some text\n# not a heading");
        assert_eq!(
            blocks,
            vec![Block {
                kind: BlockKind::Paragraph,
                lines: vec!["some text", "# not a heading"],
            }]
        );
    }

    #[test]
    fn fenced_code_stays_one_block() {
        let blocks = parse("```\nlet x = 1;\nlet y = 2;\n```");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Code);
        assert_eq!(blocks[0].lines.len(), 4);
    }

    #[test]
    fn classification_priority() {
        assert_eq!(classify("# h"), BlockKind::Heading);
        assert_eq!(classify("```rust"), BlockKind::Code);
        assert_eq!(classify("> quoted"), BlockKind::Quote);
        assert_eq!(classify("* item"), BlockKind::UnorderedList);
        assert_eq!(classify("1. item"), BlockKind::OrderedList);
        assert_eq!(classify("42. item"), BlockKind::OrderedList);
        assert_eq!(classify("plain text"), BlockKind::Paragraph);
    }

    #[test]
    fn near_miss_markers_fall_back_to_paragraph() {
        // No space after the star, no dot after the digits.
        assert_eq!(classify("*emphasis*"), BlockKind::Paragraph);
        assert_eq!(classify("1962 was a year"), BlockKind::Paragraph);
    }
}
