mod block;
mod config;
mod error;
mod html;
mod inline;
mod node;
mod site;
mod span;

pub use block::{Block, BlockKind, classify, segment};
pub use config::{Config, PathsConfig, RenderConfig};
pub use error::{Error, Result};
pub use html::{block_to_node, extract_title, markdown_to_node};
pub use inline::{extract_images, extract_links, parse_inline};
pub use node::{Attributes, HtmlNode};
pub use site::{
    DEFAULT_TEMPLATE, fill_template, generate_page, generate_pages_recursive, load_template,
};
pub use span::{Delimiter, Span};

/// Convert markdown text to an HTML fragment rooted at a `div`.
pub fn render(markdown: &str) -> Result<String> {
    markdown_to_node(markdown)?.to_html()
}
