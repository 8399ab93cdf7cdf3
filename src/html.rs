/// HTML elements that never take content or a closing tag.
static VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// A node in the rendered HTML tree.
///
/// A `Leaf` carries literal text, optionally wrapped in a tag; an untagged
/// leaf serializes to its raw value. A `Parent` renders nothing of its own,
/// only its children inside its tag. Attributes are kept as an ordered list
/// of pairs so serialization is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum HtmlNode {
    Leaf {
        tag: Option<String>,
        value: String,
        attrs: Vec<(String, String)>,
    },
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Vec<(String, String)>,
    },
}

impl HtmlNode {
    /// Untagged leaf: raw text emitted as-is.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    /// Tagged leaf without attributes.
    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    /// Tagged leaf with attributes, kept in the order given.
    pub fn leaf_with_attrs(tag: &str, value: impl Into<String>, attrs: &[(&str, &str)]) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: value.into(),
            attrs: own_attrs(attrs),
        }
    }

    /// Parent element wrapping `children`. Zero children is valid and
    /// serializes to an empty tag pair.
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.to_string(),
            children,
            attrs: Vec::new(),
        }
    }

    /// The node's children; empty for leaves.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        }
    }

    /// Serialize the subtree to an HTML string.
    ///
    /// Text is emitted raw (no entity escaping anywhere in this pipeline)
    /// and elements are packed densely with no pretty-printing. Void
    /// elements emit a bare open tag with no `/>` and no closing tag.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.emit(&mut out);
        out
    }

    fn emit(&self, out: &mut String) {
        match self {
            HtmlNode::Leaf {
                tag: None, value, ..
            } => out.push_str(value),
            HtmlNode::Leaf {
                tag: Some(tag),
                value,
                attrs,
            } => {
                open_tag(tag, attrs, out);
                if VOID_ELEMENTS.contains(&tag.as_str()) {
                    return;
                }
                out.push_str(value);
                close_tag(tag, out);
            }
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                open_tag(tag, attrs, out);
                for child in children {
                    child.emit(out);
                }
                close_tag(tag, out);
            }
        }
    }
}

fn own_attrs(attrs: &[(&str, &str)]) -> Vec<(String, String)> {
    attrs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

fn open_tag(tag: &str, attrs: &[(String, String)], out: &mut String) {
    out.push('<');
    out.push_str(tag);
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_leaf_is_raw_text() {
        // No entity escaping anywhere in the pipeline
        assert_eq!(HtmlNode::text("a < b & c").to_html(), "a < b & c");
    }

    #[test]
    fn tagged_leaf() {
        assert_eq!(HtmlNode::leaf("p", "hello").to_html(), "<p>hello</p>");
    }

    #[test]
    fn empty_value_still_emits_closing_tag() {
        assert_eq!(HtmlNode::leaf("b", "").to_html(), "<b></b>");
    }

    #[test]
    fn attributes_render_in_insertion_order() {
        let node = HtmlNode::leaf_with_attrs("a", "click", &[("href", "u"), ("class", "ext")]);
        assert_eq!(node.to_html(), r#"<a href="u" class="ext">click</a>"#);
    }

    #[test]
    fn img_is_void() {
        let node = HtmlNode::leaf_with_attrs("img", "", &[("src", "u"), ("alt", "pic")]);
        assert_eq!(node.to_html(), r#"<img src="u" alt="pic">"#);
    }

    #[test]
    fn parent_concatenates_children() {
        let node = HtmlNode::parent(
            "ul",
            vec![
                HtmlNode::parent("li", vec![HtmlNode::text("one")]),
                HtmlNode::parent("li", vec![HtmlNode::text("two")]),
            ],
        );
        assert_eq!(node.to_html(), "<ul><li>one</li><li>two</li></ul>");
    }

    #[test]
    fn empty_parent_serializes_to_tag_pair() {
        assert_eq!(HtmlNode::parent("div", Vec::new()).to_html(), "<div></div>");
    }

    #[test]
    fn parent_attributes_render() {
        let node = HtmlNode::Parent {
            tag: "div".to_string(),
            children: vec![HtmlNode::text("x")],
            attrs: vec![("class".to_string(), "wrap".to_string())],
        };
        assert_eq!(node.to_html(), r#"<div class="wrap">x</div>"#);
    }

    #[test]
    fn nested_parents() {
        let node = HtmlNode::parent(
            "pre",
            vec![HtmlNode::leaf("code", "let x = 1;\n")],
        );
        assert_eq!(node.to_html(), "<pre><code>let x = 1;\n</code></pre>");
    }
}
