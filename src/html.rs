use log::debug;

use crate::block::{Block, BlockKind, segment};
use crate::error::{Error, Result};
use crate::inline::parse_inline;
use crate::node::HtmlNode;

/// Marker appended to every quote line before inline parsing.
const QUOTE_LINE_BREAK: &str = "<br>";

/// Build the document tree: one `div` holding a subtree per block.
pub fn markdown_to_node(markdown: &str) -> Result<HtmlNode> {
    let blocks = segment(markdown);
    debug!("segmented {} blocks", blocks.len());

    let children = blocks
        .iter()
        .map(block_to_node)
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::parent("div", children))
}

/// Dispatch a block to the renderer for its kind.
pub fn block_to_node(block: &Block) -> Result<HtmlNode> {
    let kind = block.kind();
    debug!("rendering {kind} block");
    match kind {
        BlockKind::Paragraph => paragraph_to_node(block),
        BlockKind::Heading => heading_to_node(block),
        BlockKind::Code => code_to_node(block),
        BlockKind::Quote => quote_to_node(block),
        BlockKind::UnorderedList => unordered_list_to_node(block),
        BlockKind::OrderedList => ordered_list_to_node(block),
    }
}

fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(parse_inline(text)?.into_iter().map(HtmlNode::from).collect())
}

pub fn paragraph_to_node(block: &Block) -> Result<HtmlNode> {
    block.expect_kind(BlockKind::Paragraph)?;
    Ok(HtmlNode::parent("p", text_to_children(block.content())?))
}

pub fn heading_to_node(block: &Block) -> Result<HtmlNode> {
    let level = block.heading_level()?;
    let children = text_to_children(block.heading_text()?)?;
    Ok(HtmlNode::parent(format!("h{level}"), children))
}

pub fn code_to_node(block: &Block) -> Result<HtmlNode> {
    let code = block.code_text()?;
    Ok(HtmlNode::parent("pre", vec![HtmlNode::leaf("code", code)]))
}

pub fn quote_to_node(block: &Block) -> Result<HtmlNode> {
    let mut children = Vec::new();
    for line in block.quote_lines()? {
        children.extend(text_to_children(&format!("{line}{QUOTE_LINE_BREAK}"))?);
    }
    Ok(HtmlNode::parent("blockquote", children))
}

pub fn unordered_list_to_node(block: &Block) -> Result<HtmlNode> {
    let items = block.unordered_items()?;
    Ok(HtmlNode::parent("ul", list_items(&items)?))
}

pub fn ordered_list_to_node(block: &Block) -> Result<HtmlNode> {
    let items = block.ordered_items()?;
    Ok(HtmlNode::parent("ol", list_items(&items)?))
}

fn list_items(items: &[&str]) -> Result<Vec<HtmlNode>> {
    items
        .iter()
        .map(|item| Ok(HtmlNode::parent("li", text_to_children(item)?)))
        .collect()
}

/// Text of the last `# ` line in the document.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .filter_map(|line| line.strip_prefix("# "))
        .last()
        .map(str::to_string)
        .ok_or(Error::MissingTitle)
}
