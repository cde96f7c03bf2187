use url::Url;

use super::document::{FeedMetadata, RawPost};
use super::format::{format_content, format_timestamp, og_description, resolve_avatar, split_tags};
use crate::constants::{DEFAULT_FEED_TITLE, DEFAULT_NICK, OG_DESCRIPTION_MAX_LEN};

/// A single located post, ready for rendering.
///
/// Built fresh for each request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Author nickname from the feed header.
    pub nick: String,
    /// Raw post body.
    pub content: String,
    /// Body rendered as HTML (escaped, links resolved, line breaks).
    pub formatted_content: String,
    pub mood: Option<String>,
    pub tags: Vec<String>,
    /// The `ID` property, exactly as it appears in the feed.
    pub timestamp: String,
    pub formatted_time: String,
    /// Absolute avatar URL.
    pub avatar_url: Option<String>,
    /// Permalink: feed URL plus `#timestamp`.
    pub post_url: String,
    pub lang: Option<String>,
    pub reply_to: Option<String>,
    pub client: Option<String>,
    pub feed_title: String,
    pub feed_description: Option<String>,
}

impl Post {
    /// Assemble a post from its block and the feed header.
    ///
    /// Returns `None` when the block has no `ID`.
    #[must_use]
    pub fn from_raw(metadata: &FeedMetadata, raw: &RawPost, feed_url: &Url) -> Option<Self> {
        let timestamp = raw.id()?.to_string();
        let mood = raw.property("MOOD").map(str::to_string);

        Some(Self {
            nick: metadata
                .nick
                .clone()
                .unwrap_or_else(|| DEFAULT_NICK.to_string()),
            formatted_content: format_content(&raw.content, mood.as_deref()),
            content: raw.content.clone(),
            tags: raw.property("TAGS").map(split_tags).unwrap_or_default(),
            formatted_time: format_timestamp(&timestamp),
            avatar_url: metadata
                .avatar
                .as_deref()
                .and_then(|avatar| resolve_avatar(avatar, feed_url)),
            post_url: format!("{feed_url}#{timestamp}"),
            lang: raw.property("LANG").map(str::to_string),
            reply_to: raw.property("REPLY_TO").map(str::to_string),
            client: raw.property("CLIENT").map(str::to_string),
            feed_title: metadata
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_FEED_TITLE.to_string()),
            feed_description: metadata.description.clone(),
            mood,
            timestamp,
        })
    }

    /// Uppercased first character of the nick, for the avatar placeholder.
    #[must_use]
    pub fn user_initial(&self) -> String {
        self.nick
            .chars()
            .next()
            .map_or_else(|| "U".to_string(), |c| c.to_uppercase().collect())
    }

    #[must_use]
    pub fn is_reply(&self) -> bool {
        self.reply_to.is_some()
    }

    /// Short plain-text summary for link unfurling.
    #[must_use]
    pub fn og_description(&self) -> String {
        let source = if self.content.trim().is_empty() {
            self.mood.as_deref().unwrap_or_default()
        } else {
            self.content.as_str()
        };
        og_description(source, OG_DESCRIPTION_MAX_LEN)
    }
}
