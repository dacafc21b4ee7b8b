use std::sync::LazyLock;

use log::trace;
use regex::Regex;

use crate::error::{Error, Result};
use crate::span::{Delimiter, Span};

static IMAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("Invalid image regex"));

static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid link regex"));

/// Parse one run of block text into inline spans.
///
/// Images go first because their syntax contains a link, links before
/// emphasis so that `*` inside a URL is left alone, and bold before italic
/// so that `**` is never read as two `*`.
pub fn parse_inline(text: &str) -> Result<Vec<Span>> {
    let spans = vec![Span::plain(text)];
    let spans = split_images(spans);
    let spans = split_links(spans);
    let spans = split_delimiter(spans, Delimiter::Bold)?;
    let spans = split_delimiter(spans, Delimiter::Italic)?;
    let spans = split_delimiter(spans, Delimiter::Code)?;
    trace!("parsed {} inline spans", spans.len());
    Ok(spans)
}

/// `(alt, url)` for every `![alt](url)` in `text`, left to right.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    extract(&IMAGE_PATTERN, text)
}

/// `(label, url)` for every `[label](url)` in `text`, left to right.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    extract(&LINK_PATTERN, text)
}

fn extract(pattern: &Regex, text: &str) -> Vec<(String, String)> {
    pattern
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

pub fn split_images(spans: Vec<Span>) -> Vec<Span> {
    split_pattern(spans, &IMAGE_PATTERN, |alt, url| Span::Image {
        alt: alt.to_string(),
        url: url.to_string(),
    })
}

pub fn split_links(spans: Vec<Span>) -> Vec<Span> {
    split_pattern(spans, &LINK_PATTERN, |text, url| Span::Link {
        text: text.to_string(),
        url: url.to_string(),
    })
}

/// Cut every plain span around the matches of `pattern`. Text between
/// matches stays plain; empty text is dropped.
fn split_pattern(spans: Vec<Span>, pattern: &Regex, make: fn(&str, &str) -> Span) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            Span::Plain(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        if !pattern.is_match(&text) {
            out.push(Span::Plain(text));
            continue;
        }

        let mut rest = 0;
        for caps in pattern.captures_iter(&text) {
            let whole = caps.get(0).map_or(rest..rest, |m| m.range());
            if whole.start > rest {
                out.push(Span::plain(&text[rest..whole.start]));
            }
            out.push(make(&caps[1], &caps[2]));
            rest = whole.end;
        }
        if rest < text.len() {
            out.push(Span::plain(&text[rest..]));
        }
    }

    out
}

/// Split plain spans on `delimiter`. Text at odd positions becomes the
/// delimiter's span kind; an even number of parts means an unclosed pair.
pub fn split_delimiter(spans: Vec<Span>, delimiter: Delimiter) -> Result<Vec<Span>> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            Span::Plain(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let parts: Vec<&str> = text.split(delimiter.as_str()).collect();
        if parts.len() == 1 {
            out.push(Span::Plain(text));
            continue;
        }
        if parts.len() % 2 == 0 {
            return Err(Error::UnmatchedDelimiter { delimiter });
        }

        for (i, part) in parts.iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 1 {
                out.push(delimiter.wrap(part));
            } else {
                out.push(Span::plain(*part));
            }
        }
    }

    Ok(out)
}
