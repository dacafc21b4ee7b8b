use crate::error::{Error, Result};

/// HTML attributes, serialized in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key`, replacing an existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// ` key="value"` for every pair. Values are substituted literally.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.0 {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out
    }
}

/// Output tree element: a text leaf or a tagged container.
///
/// Tags and values are optional in the type so that malformed nodes can be
/// built; they are rejected when rendered, not when constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Attributes,
    },
    Parent {
        tag: Option<String>,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Untagged leaf, rendered as its value verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn leaf_with(
        tag: impl Into<String>,
        value: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes,
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children,
            attributes: Attributes::new(),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        }
    }

    /// Serialize the subtree to HTML text.
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        match self {
            HtmlNode::Leaf {
                tag,
                value,
                attributes,
            } => {
                let value = value.as_deref().ok_or(Error::MissingValue)?;
                match tag {
                    None => out.push_str(value),
                    Some(tag) => {
                        open_tag(tag, attributes, out);
                        out.push_str(value);
                        close_tag(tag, out);
                    }
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                attributes,
            } => {
                let tag = tag.as_deref().ok_or(Error::MissingTag)?;
                open_tag(tag, attributes, out);
                for child in children {
                    child.write_html(out)?;
                }
                close_tag(tag, out);
            }
        }
        Ok(())
    }
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&attributes.to_html());
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
