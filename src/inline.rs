use std::sync::OnceLock;

use regex::Regex;

use crate::html::HtmlNode;

/// Inline text spans produced by [`tokenize`].
///
/// Styling never nests: the payload of a styled span is literal text, and
/// later tokenizer passes leave already-styled spans untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum TextSpan {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

static IMAGE_RE: OnceLock<Regex> = OnceLock::new();
static LINK_RE: OnceLock<Regex> = OnceLock::new();

fn image_re() -> &'static Regex {
    IMAGE_RE.get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("invalid image regex"))
}

fn link_re() -> &'static Regex {
    LINK_RE.get_or_init(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("invalid link regex"))
}

/// Tokenize one run of text into typed spans.
///
/// Pass order is fixed: `**` bold, `*` italic, backtick code, then image
/// and link extraction. Each pass re-splits only spans still tagged
/// [`TextSpan::Plain`], so delimiters inside an already-styled span are
/// never re-interpreted.
pub fn tokenize(text: &str) -> Vec<TextSpan> {
    let spans = vec![TextSpan::Plain(text.to_string())];
    let spans = split_delimiter(spans, "**", TextSpan::Bold);
    let spans = split_delimiter(spans, "*", TextSpan::Italic);
    let spans = split_delimiter(spans, "`", TextSpan::Code);
    let spans = split_images(spans);
    split_links(spans)
}

/// Split `Plain` spans on `delimiter`, tagging odd-indexed pieces with
/// `styled`.
///
/// Empty pieces are kept, so balanced delimiters leave zero-length plain
/// spans at the edges, and an unbalanced delimiter mis-tags the tail
/// instead of failing.
fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    styled: fn(String) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::new();
    for span in spans {
        let TextSpan::Plain(text) = span else {
            out.push(span);
            continue;
        };
        for (i, piece) in text.split(delimiter).enumerate() {
            if i % 2 == 0 {
                out.push(TextSpan::Plain(piece.to_string()));
            } else {
                out.push(styled(piece.to_string()));
            }
        }
    }
    out
}

fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, image_re(), |alt, url| TextSpan::Image {
        alt: alt.to_string(),
        url: url.to_string(),
    })
}

fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_matches(spans, link_re(), |text, url| TextSpan::Link {
        text: text.to_string(),
        url: url.to_string(),
    })
}

/// Split `Plain` spans around every match of `re`, mapping the two capture
/// groups through `make`.
///
/// Unlike the delimiter passes, empty text between matches is dropped; a
/// span with no matches passes through unchanged, zero-length or not.
fn split_matches(
    spans: Vec<TextSpan>,
    re: &Regex,
    make: impl Fn(&str, &str) -> TextSpan,
) -> Vec<TextSpan> {
    let mut out = Vec::new();
    for span in spans {
        let TextSpan::Plain(text) = span else {
            out.push(span);
            continue;
        };

        let mut found = Vec::new();
        for caps in re.captures_iter(&text) {
            let (Some(whole), Some(first), Some(second)) =
                (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            found.push((whole.start(), whole.end(), make(first.as_str(), second.as_str())));
        }
        if found.is_empty() {
            out.push(TextSpan::Plain(text));
            continue;
        }

        let mut cursor = 0;
        for (start, end, span) in found {
            if start > cursor {
                out.push(TextSpan::Plain(text[cursor..start].to_string()));
            }
            out.push(span);
            cursor = end;
        }
        if cursor < text.len() {
            out.push(TextSpan::Plain(text[cursor..].to_string()));
        }
    }
    out
}

/// All `![alt](url)` occurrences in `text` as `(alt, url)` pairs.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    image_re()
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// All `[text](url)` occurrences in `text` as `(text, url)` pairs.
///
/// The pattern has no look-behind, so the trailing `[alt](url)` of image
/// syntax matches too; [`tokenize`] runs the image pass first, so this
/// never reaches rendered output.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    link_re()
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Render one span as an HTML node.
pub fn span_to_node(span: &TextSpan) -> HtmlNode {
    match span {
        TextSpan::Plain(text) => HtmlNode::text(text.clone()),
        TextSpan::Bold(text) => HtmlNode::leaf("b", text.clone()),
        TextSpan::Italic(text) => HtmlNode::leaf("i", text.clone()),
        TextSpan::Code(text) => HtmlNode::leaf("code", text.clone()),
        TextSpan::Link { text, url } => {
            HtmlNode::leaf_with_attrs("a", text.clone(), &[("href", url)])
        }
        TextSpan::Image { alt, url } => {
            HtmlNode::leaf_with_attrs("img", "", &[("src", url), ("alt", alt)])
        }
    }
}
