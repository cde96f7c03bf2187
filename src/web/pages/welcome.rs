//! Welcome page, shown whenever no specific post is resolved.

use maud::{html, Markup};

use crate::components::{BaseLayout, OpenGraphMetadata};

/// Feed used in the usage example.
const EXAMPLE_POST: &str = "https://foo.org/social.org#2025-02-03T23:05:00+0100";

/// Render the welcome page.
///
/// `public_url` is this service's own base URL, used to show a ready-made
/// preview link.
#[must_use]
pub fn render_welcome_page(public_url: &str) -> Markup {
    let example = format!(
        "{public_url}/?post={}",
        urlencoding::encode(EXAMPLE_POST)
    );
    let og = OpenGraphMetadata::new(
        "Org Social Preview",
        "Share any Org Social post with a rich link preview",
        format!("{public_url}/"),
    );

    let content = html! {
        section class="welcome post-card" {
            h1 { "Org Social Preview" }
            p {
                "Generates a shareable preview card, with Open Graph metadata, "
                "for a single post of an Org Social feed."
            }
            h2 { "Usage" }
            p { "Pass the post URL (feed URL, " code { "#" } ", post timestamp) in the " code { "post" } " parameter:" }
            p { code { (public_url) "/?post=" (EXAMPLE_POST) } }
            p { "URL-encoded, ready to share:" }
            p { a href=(example) { code { (example) } } }
        }
    };

    BaseLayout::new("Welcome")
        .with_og_metadata(og)
        .render(content)
}
