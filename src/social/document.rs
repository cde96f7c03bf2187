//! Structure of an Org Social feed document.
//!
//! A feed is an Org file with `#+KEYWORD:` header lines, followed by a
//! top-level `* Posts` heading whose level-2 children are the posts. Each
//! post may carry a `:PROPERTIES:` drawer; its `ID` is the post timestamp.
//!
//! Parsing is best-effort. Missing keywords, a missing posts section or a
//! truncated drawer produce empty values, never errors.

use std::collections::HashMap;
use std::str::SplitInclusive;

use once_cell::sync::Lazy;
use regex::Regex;

static KEYWORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[ \t]*#\+([A-Z_]+):(.*)$").unwrap());

/// Feed-global header keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedMetadata {
    pub title: Option<String>,
    pub nick: Option<String>,
    pub description: Option<String>,
    pub avatar: Option<String>,
}

/// Extract `#+TITLE:`, `#+NICK:`, `#+DESCRIPTION:` and `#+AVATAR:`.
///
/// Only the header (everything before the posts section) is searched, so
/// post bodies cannot override feed identity. The first non-empty value of
/// each keyword wins.
#[must_use]
pub fn parse_metadata(text: &str) -> FeedMetadata {
    let header = posts_heading(text).map_or(text, |(start, _)| &text[..start]);
    let mut metadata = FeedMetadata::default();

    for caps in KEYWORD_RE.captures_iter(header) {
        let value = caps[2].trim();
        if value.is_empty() {
            continue;
        }

        let slot = match caps[1].to_ascii_uppercase().as_str() {
            "TITLE" => &mut metadata.title,
            "NICK" => &mut metadata.nick,
            "DESCRIPTION" => &mut metadata.description,
            "AVATAR" => &mut metadata.avatar,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.to_string());
        }
    }

    metadata
}

/// Iterate over the raw post blocks of a feed, in document order.
///
/// Each item is the text between a `**` heading line and the next one (or
/// the end of the posts section), heading excluded. Yields nothing when the
/// document has no `* Posts` heading.
#[must_use]
pub fn post_blocks(text: &str) -> PostBlocks<'_> {
    match posts_heading(text) {
        Some((_, body_start)) => PostBlocks {
            text,
            lines: text[body_start..].split_inclusive('\n'),
            offset: body_start,
            block_start: None,
            finished: false,
        },
        None => PostBlocks {
            text,
            lines: "".split_inclusive('\n'),
            offset: 0,
            block_start: None,
            finished: true,
        },
    }
}

/// Lazy iterator returned by [`post_blocks`].
#[derive(Debug, Clone)]
pub struct PostBlocks<'a> {
    text: &'a str,
    lines: SplitInclusive<'a, char>,
    offset: usize,
    block_start: Option<usize>,
    finished: bool,
}

impl<'a> Iterator for PostBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.finished {
            return None;
        }
        let text = self.text;

        for line in self.lines.by_ref() {
            let line_start = self.offset;
            self.offset += line.len();

            match heading_level(line) {
                // Next top-level heading closes the posts section
                Some(1) => {
                    self.finished = true;
                    return self.block_start.take().map(|start| &text[start..line_start]);
                }
                Some(2) => {
                    if let Some(start) = self.block_start.replace(self.offset) {
                        return Some(&text[start..line_start]);
                    }
                }
                _ => {}
            }
        }

        self.finished = true;
        self.block_start.take().map(|start| &text[start..])
    }
}

/// A post block split into its property drawer and body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPost {
    /// Drawer properties, keys uppercased.
    properties: HashMap<String, String>,
    /// Body text after the drawer, trimmed.
    pub content: String,
}

impl RawPost {
    /// Non-empty value of a drawer property (key is case-insensitive).
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .get(&key.to_ascii_uppercase())
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// The post identifier, which is its timestamp.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.property("ID")
    }
}

/// Split one post block into properties and content.
///
/// Without a `:PROPERTIES:` line the whole block is content. A drawer that
/// never reaches `:END:` keeps the properties read so far and has no content.
#[must_use]
pub fn parse_post_block(block: &str) -> RawPost {
    let mut lines = block.lines();
    let mut post = RawPost::default();

    let mut preamble = Vec::new();
    let mut has_drawer = false;
    for line in lines.by_ref() {
        if line.trim().eq_ignore_ascii_case(":PROPERTIES:") {
            has_drawer = true;
            break;
        }
        preamble.push(line);
    }

    if !has_drawer {
        post.content = preamble.join("\n").trim().to_string();
        return post;
    }

    let mut closed = false;
    for line in lines.by_ref() {
        let line = line.trim();
        if line.eq_ignore_ascii_case(":END:") {
            closed = true;
            break;
        }
        if let Some((key, value)) = parse_property_line(line) {
            post.properties.entry(key).or_insert(value);
        }
    }

    if closed {
        post.content = lines.collect::<Vec<_>>().join("\n").trim().to_string();
    }

    post
}

/// Parse a drawer line of the form `:KEY: value`.
fn parse_property_line(line: &str) -> Option<(String, String)> {
    let rest = line.strip_prefix(':')?;
    let (key, value) = rest.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_ascii_uppercase(), value.trim().to_string()))
}

/// Level of an Org heading line (`*` count), or `None` for other lines.
fn heading_level(line: &str) -> Option<usize> {
    let line = line.trim_end_matches(['\r', '\n']);
    let stars = line.bytes().take_while(|&b| b == b'*').count();
    if stars == 0 {
        return None;
    }
    match line[stars..].chars().next() {
        None => Some(stars),
        Some(c) if c.is_whitespace() => Some(stars),
        _ => None,
    }
}

/// Byte offsets of the `* Posts` heading line: (line start, line end).
fn posts_heading(text: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let start = offset;
        offset += line.len();
        if heading_level(line) == Some(1) && line[1..].trim().eq_ignore_ascii_case("posts") {
            return Some((start, offset));
        }
    }
    None
}
