//! Card components for displaying a located post.

use maud::{html, Markup, PreEscaped, Render};

use crate::social::format::is_linkable;
use crate::social::Post;

/// The preview card for a single post.
///
/// # Example
///
/// ```ignore
/// use crate::components::card::PostCard;
///
/// let markup = PostCard::new(&post).render();
/// ```
#[derive(Debug, Clone)]
pub struct PostCard<'a> {
    pub post: &'a Post,
}

impl<'a> PostCard<'a> {
    /// Create a new post card.
    #[must_use]
    pub const fn new(post: &'a Post) -> Self {
        Self { post }
    }

    fn render_avatar(&self) -> Markup {
        let post = self.post;
        html! {
            @if let Some(ref avatar) = post.avatar_url {
                img class="avatar" src=(avatar) alt=(post.nick) width="48" height="48";
            } @else {
                div class="avatar avatar-initial" aria-hidden="true" { (post.user_initial()) }
            }
        }
    }
}

impl Render for PostCard<'_> {
    fn render(&self) -> Markup {
        let post = self.post;

        html! {
            article class="post-card" {
                header class="post-header" {
                    (self.render_avatar())
                    div {
                        div class="nick" { (post.nick) }
                        div class="feed-title" { (post.feed_title) }
                    }
                    @if let Some(ref mood) = post.mood {
                        // Mood-only posts already show the mood as content
                        @if !post.content.trim().is_empty() {
                            span class="mood" title="Mood" { (mood) }
                        }
                    }
                }
                @if let Some(ref reply_to) = post.reply_to {
                    p class="reply-to" {
                        "In reply to "
                        @if is_linkable(reply_to) {
                            a href=(reply_to) rel="noopener noreferrer" { (reply_to) }
                        } @else {
                            (reply_to)
                        }
                    }
                }
                div class="post-content" {
                    (PreEscaped(&post.formatted_content))
                }
                (TagList::new(&post.tags))
                footer class="post-footer" {
                    a class="post-time" href=(post.post_url) title=(post.timestamp) {
                        time datetime=(post.timestamp) { (post.formatted_time) }
                    }
                    @if let Some(ref client) = post.client {
                        span class="client" { "via " (client) }
                    }
                }
            }
        }
    }
}

/// Inline list of `#tag` chips. Renders nothing for an empty list.
#[derive(Debug, Clone)]
pub struct TagList<'a> {
    pub tags: &'a [String],
}

impl<'a> TagList<'a> {
    #[must_use]
    pub const fn new(tags: &'a [String]) -> Self {
        Self { tags }
    }
}

impl Render for TagList<'_> {
    fn render(&self) -> Markup {
        html! {
            @if !self.tags.is_empty() {
                ul class="tags" {
                    @for tag in self.tags {
                        li class="tag" { "#" (tag) }
                    }
                }
            }
        }
    }
}
