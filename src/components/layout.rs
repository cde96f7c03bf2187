//! Base layout components for the web UI.
//!
//! This module provides the HTML skeleton shared by the preview card and
//! the welcome page.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::metadata::OpenGraphMetadata;
use crate::constants::SITE_NAME;

/// Page styles, inlined so a preview is a single self-contained response.
const PAGE_STYLE: &str = r#"
:root { --bg: #f7f9f9; --fg: #0f1419; --muted: #536471; --card: #fff; --border: #eff3f4; --accent: #1d9bf0; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #000; --fg: #e7e9ea; --muted: #71767b; --card: #16181c; --border: #2f3336; }
}
* { box-sizing: border-box; }
body { margin: 0; background: var(--bg); color: var(--fg); font: 15px/1.5 system-ui, -apple-system, "Segoe UI", sans-serif; }
main.container { max-width: 600px; margin: 2rem auto; padding: 0 1rem; }
a { color: var(--accent); }
.post-card { background: var(--card); border: 1px solid var(--border); border-radius: 16px; padding: 1rem 1.25rem; }
.post-header { display: flex; align-items: center; gap: .75rem; }
.avatar { width: 48px; height: 48px; border-radius: 50%; object-fit: cover; }
.avatar-initial { display: flex; align-items: center; justify-content: center; background: var(--accent); color: #fff; font-weight: 700; font-size: 20px; }
.nick { font-weight: 700; }
.feed-title, .post-time, .reply-to, .client, footer { color: var(--muted); font-size: 13px; }
.post-content { margin: .75rem 0; font-size: 17px; overflow-wrap: anywhere; }
.mood { font-size: 20px; }
.mood-only { font-size: 20px; }
.tags { display: flex; flex-wrap: wrap; gap: .4rem; padding: 0; margin: .5rem 0; list-style: none; }
.tag { color: var(--accent); }
.post-footer { display: flex; justify-content: space-between; border-top: 1px solid var(--border); padding-top: .5rem; }
.welcome code { overflow-wrap: anywhere; }
footer { text-align: center; margin: 2rem 0; }
"#;

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("My Page").render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    lang: &'a str,
    og_metadata: Option<OpenGraphMetadata>,
}

impl<'a> BaseLayout<'a> {
    /// Create a new base layout with the given page title.
    #[must_use]
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            lang: "en",
            og_metadata: None,
        }
    }

    /// Set the document language (`<html lang>`).
    #[must_use]
    pub fn with_lang(mut self, lang: &'a str) -> Self {
        self.lang = lang;
        self
    }

    /// Set the Open Graph metadata for social media previews.
    #[must_use]
    pub fn with_og_metadata(mut self, metadata: OpenGraphMetadata) -> Self {
        self.og_metadata = Some(metadata);
        self
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main class="container">` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang=(self.lang) {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    meta name="color-scheme" content="light dark";
                    title { (self.title) " - " (SITE_NAME) }

                    // Open Graph and Twitter Card metadata
                    @if let Some(ref og) = self.og_metadata {
                        (og.render())
                    }

                    link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🦄</text></svg>";
                    style { (PreEscaped(PAGE_STYLE)) }
                }
                body {
                    main class="container" {
                        (content)
                    }
                    (Self::render_footer())
                }
            }
        }
    }

    /// Render the page footer.
    fn render_footer() -> Markup {
        html! {
            footer class="container" {
                small {
                    (SITE_NAME) " | "
                    a href="https://github.com/tanrax/org-social" target="_blank" rel="noopener noreferrer" { "About Org Social" }
                }
            }
        }
    }
}
