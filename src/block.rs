use std::fmt;

use crate::error::{Error, Result};

const FENCE: &str = "```";
const MAX_HEADING_LEVEL: usize = 6;

/// Classification of a block of markdown source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl BlockKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading => "heading",
            BlockKind::Code => "code",
            BlockKind::Quote => "quote",
            BlockKind::UnorderedList => "unordered_list",
            BlockKind::OrderedList => "ordered_list",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A maximal run of non-blank source lines, each trimmed, joined by `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    content: String,
}

impl Block {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }

    pub fn kind(&self) -> BlockKind {
        classify(&self.content)
    }

    pub(crate) fn expect_kind(&self, expected: BlockKind) -> Result<()> {
        let actual = self.kind();
        if actual != expected {
            return Err(Error::WrongBlockKind { expected, actual });
        }
        Ok(())
    }

    /// Number of leading `#` characters.
    pub fn heading_level(&self) -> Result<u8> {
        self.expect_kind(BlockKind::Heading)?;
        let level = self
            .content
            .bytes()
            .take_while(|&b| b == b'#')
            .count()
            .min(MAX_HEADING_LEVEL);
        Ok(level as u8)
    }

    /// Heading text with `#` and spaces trimmed from both ends.
    pub fn heading_text(&self) -> Result<&str> {
        self.expect_kind(BlockKind::Heading)?;
        Ok(self.content.trim_matches(['#', ' ']))
    }

    /// Each quote line with its `>` marker and spacing trimmed.
    pub fn quote_lines(&self) -> Result<Vec<&str>> {
        self.expect_kind(BlockKind::Quote)?;
        Ok(self.lines().map(|line| line.trim_matches(['>', ' '])).collect())
    }

    /// Fenced content without the fences and surrounding whitespace.
    pub fn code_text(&self) -> Result<&str> {
        self.expect_kind(BlockKind::Code)?;
        let inner = if self.content.len() >= 2 * FENCE.len() {
            &self.content[FENCE.len()..self.content.len() - FENCE.len()]
        } else {
            ""
        };
        Ok(inner.trim())
    }

    /// Item text with the `* ` / `- ` marker removed.
    pub fn unordered_items(&self) -> Result<Vec<&str>> {
        self.expect_kind(BlockKind::UnorderedList)?;
        Ok(self.lines().map(|line| &line[2..]).collect())
    }

    /// Item text with number, `.` and spaces trimmed from both ends.
    pub fn ordered_items(&self) -> Result<Vec<&str>> {
        self.expect_kind(BlockKind::OrderedList)?;
        Ok(self
            .lines()
            .map(|line| line.trim_matches(|c: char| matches!(c, '1'..='9' | '.' | ' ')))
            .collect())
    }
}

/// Split a document into blocks on blank lines.
pub fn segment(markdown: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current = String::new();

    for line in markdown.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(Block::new(std::mem::take(&mut current)));
            }
            continue;
        }
        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
    }

    if !current.is_empty() {
        blocks.push(Block::new(current));
    }

    blocks
}

/// Classify block content. First match wins: heading, code, quote,
/// unordered list, ordered list, paragraph.
pub fn classify(content: &str) -> BlockKind {
    if is_heading(content) {
        return BlockKind::Heading;
    }

    if content.starts_with(FENCE) && content.ends_with(FENCE) {
        return BlockKind::Code;
    }

    let mut is_quote = true;
    let mut is_unordered = true;
    let mut is_ordered = true;

    for (i, line) in content.split('\n').enumerate() {
        if !line.starts_with('>') {
            is_quote = false;
        }
        if !line.starts_with("* ") && !line.starts_with("- ") {
            is_unordered = false;
        }
        if is_ordered && !line.starts_with(&format!("{}. ", i + 1)) {
            is_ordered = false;
        }
    }

    if is_quote {
        BlockKind::Quote
    } else if is_unordered {
        BlockKind::UnorderedList
    } else if is_ordered {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}

fn is_heading(content: &str) -> bool {
    let hashes = content.bytes().take_while(|&b| b == b'#').count();
    (1..=MAX_HEADING_LEVEL).contains(&hashes) && content[hashes..].starts_with(' ')
}
