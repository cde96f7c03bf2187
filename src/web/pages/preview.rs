//! Post preview page.

use maud::{html, Markup};

use crate::components::{BaseLayout, OpenGraphMetadata, PostCard};
use crate::social::Post;

/// Render the preview card page for a located post.
///
/// The Open Graph tags carry the nick as title, a plain-text summary of the
/// post, its permalink and the avatar, which is what link unfurlers display.
#[must_use]
pub fn render_post_page(post: &Post) -> Markup {
    let og = OpenGraphMetadata::new(&post.nick, post.og_description(), &post.post_url)
        .with_type("article")
        .with_site_name(&post.feed_title)
        .with_image(post.avatar_url.as_deref())
        .with_published_time(&post.timestamp);

    let title = format!("{} on {}", post.nick, post.feed_title);
    let content = html! {
        (PostCard::new(post))
    };

    BaseLayout::new(&title)
        .with_lang(post.lang.as_deref().unwrap_or("en"))
        .with_og_metadata(og)
        .render(content)
}
