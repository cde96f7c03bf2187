//! Display formatting for post fields.

use chrono::{DateTime, FixedOffset};
use maud::html;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use url::Url;

static MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[org-social:([^\]]+)\]\[([^\]]+)\]\]").unwrap());
static LABELED_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\]]+)\]\[([^\]]+)\]\]").unwrap());
static BARE_LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[([^\]]+)\]\]").unwrap());
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Split a `TAGS` property on commas and whitespace.
///
/// Empty items are dropped and repeats removed, keeping first-seen order.
#[must_use]
pub fn split_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(|c: char| c == ',' || c.is_whitespace()) {
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Resolve an avatar reference against the feed URL.
///
/// Absolute URLs pass through; relative ones are joined onto the feed's own
/// location. Anything that does not end up as http(s) is dropped.
#[must_use]
pub fn resolve_avatar(raw: &str, feed_url: &Url) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let resolved = feed_url.join(raw).ok()?;
    matches!(resolved.scheme(), "http" | "https").then(|| resolved.to_string())
}

/// Render post content as HTML.
///
/// The text is escaped first; Org links are then turned into anchors and
/// newlines into `<br>`. Mood-only posts show the mood on its own.
#[must_use]
pub fn format_content(content: &str, mood: Option<&str>) -> String {
    if content.trim().is_empty() {
        return match mood {
            Some(mood) => html! { span class="mood-only" { (mood) } }.into_string(),
            None => "No content".to_string(),
        };
    }

    let escaped = escape(content);

    let formatted = MENTION_RE.replace_all(&escaped, |caps: &Captures| {
        let (target, name) = (&caps[1], &caps[2]);
        if is_linkable(target) {
            format!(r#"<a href="{target}" class="mention" target="_blank" rel="noopener noreferrer">@{name}</a>"#)
        } else {
            format!(r#"<span class="mention">@{name}</span>"#)
        }
    });
    let formatted = LABELED_LINK_RE.replace_all(&formatted, |caps: &Captures| {
        anchor(&caps[1], &caps[2])
    });
    let formatted = BARE_LINK_RE.replace_all(&formatted, |caps: &Captures| {
        anchor(&caps[1], &caps[1])
    });

    formatted.replace("\r\n", "\n").replace('\n', "<br>")
}

fn anchor(target: &str, label: &str) -> String {
    if is_linkable(target) {
        format!(r#"<a href="{target}" target="_blank" rel="noopener noreferrer">{label}</a>"#)
    } else {
        label.to_string()
    }
}

/// Only web and mail targets become clickable.
#[must_use]
pub fn is_linkable(target: &str) -> bool {
    let target = target.trim().to_ascii_lowercase();
    target.starts_with("http://") || target.starts_with("https://") || target.starts_with("mailto:")
}

fn escape(text: &str) -> String {
    html! { (text) }.into_string()
}

/// Parse a post timestamp (RFC 3339, or Org Social's `+HHMM` offset form).
#[must_use]
pub fn parse_timestamp(timestamp: &str) -> Option<DateTime<FixedOffset>> {
    let timestamp = timestamp.trim();
    DateTime::parse_from_rfc3339(timestamp)
        .or_else(|_| DateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%z"))
        .or_else(|_| DateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M%z"))
        .ok()
}

/// Human-readable timestamp in the post's own offset.
///
/// Falls back to the raw string when it cannot be parsed.
#[must_use]
pub fn format_timestamp(timestamp: &str) -> String {
    parse_timestamp(timestamp).map_or_else(
        || timestamp.to_string(),
        |dt| dt.format("%Y-%m-%d %H:%M").to_string(),
    )
}

/// Plain-text summary suitable for `og:description`.
///
/// Collapses whitespace, strips markup and truncates to `max_len` characters
/// with a trailing `...`.
#[must_use]
pub fn og_description(text: &str, max_len: usize) -> String {
    let text = TAG_RE.replace_all(text, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    let text = text.trim();

    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_len).collect();
    format!("{}...", truncated.trim_end())
}
