use std::fmt;

use crate::node::{Attributes, HtmlNode};

/// Inline text spans produced by the inline parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    Image { alt: String, url: String },
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Span::Plain(text.into())
    }

    /// Lower the span into a leaf node.
    pub fn to_node(&self) -> HtmlNode {
        match self {
            Span::Plain(text) => HtmlNode::text(text.as_str()),
            Span::Bold(text) => HtmlNode::leaf("b", text.as_str()),
            Span::Italic(text) => HtmlNode::leaf("i", text.as_str()),
            Span::Code(text) => HtmlNode::leaf("code", text.as_str()),
            Span::Link { text, url } => {
                HtmlNode::leaf_with("a", text.as_str(), Attributes::new().with("href", url))
            }
            Span::Image { alt, url } => HtmlNode::leaf_with(
                "img",
                "",
                Attributes::new().with("src", url).with("alt", alt),
            ),
        }
    }
}

impl From<Span> for HtmlNode {
    fn from(span: Span) -> Self {
        span.to_node()
    }
}

/// Paired inline delimiters, in the order they are split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Bold,
    Italic,
    Code,
}

impl Delimiter {
    pub fn as_str(self) -> &'static str {
        match self {
            Delimiter::Bold => "**",
            Delimiter::Italic => "*",
            Delimiter::Code => "`",
        }
    }

    /// Wrap text found between a pair of this delimiter.
    pub fn wrap(self, text: &str) -> Span {
        let text = text.to_string();
        match self {
            Delimiter::Bold => Span::Bold(text),
            Delimiter::Italic => Span::Italic(text),
            Delimiter::Code => Span::Code(text),
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowering() {
        let cases = [
            (Span::plain("text"), "text"),
            (Span::Bold("b".into()), "<b>b</b>"),
            (Span::Italic("i".into()), "<i>i</i>"),
            (Span::Code("c".into()), "<code>c</code>"),
            (
                Span::Link {
                    text: "boot dev".into(),
                    url: "https://www.boot.dev".into(),
                },
                "<a href=\"https://www.boot.dev\">boot dev</a>",
            ),
            (
                Span::Image {
                    alt: "logo".into(),
                    url: "/img.png".into(),
                },
                "<img src=\"/img.png\" alt=\"logo\"></img>",
            ),
        ];
        for (span, expected) in cases {
            assert_eq!(HtmlNode::from(span).to_html().unwrap(), expected);
        }
    }

    #[test]
    fn delimiter_display() {
        assert_eq!(Delimiter::Bold.to_string(), "**");
        assert_eq!(Delimiter::Code.wrap("x"), Span::Code("x".into()));
    }
}
