//! Open Graph and Twitter Card metadata components.
//!
//! This is what link unfurlers read when a post URL is shared.

use maud::{html, Markup};

use crate::constants::SITE_NAME;

/// Open Graph metadata for social media previews.
///
/// This component generates both Open Graph and Twitter Card meta tags.
#[derive(Debug, Clone)]
pub struct OpenGraphMetadata {
    /// Page title (og:title)
    pub title: String,
    /// Page description (og:description)
    pub description: String,
    /// Page URL (og:url)
    pub url: String,
    /// Open Graph type (og:type) - e.g., "website", "article"
    pub og_type: String,
    /// Image URL (og:image)
    pub image: Option<String>,
    /// Site name (og:site_name)
    pub site_name: String,
    /// Twitter card type - "summary" or "summary_large_image"
    pub twitter_card: String,
    /// Publication time (article:published_time)
    pub published_time: Option<String>,
}

impl Default for OpenGraphMetadata {
    fn default() -> Self {
        Self {
            title: SITE_NAME.to_string(),
            description: "Preview cards for Org Social posts".to_string(),
            url: "/".to_string(),
            og_type: "website".to_string(),
            image: None,
            site_name: SITE_NAME.to_string(),
            twitter_card: "summary".to_string(),
            published_time: None,
        }
    }
}

impl OpenGraphMetadata {
    /// Create a new metadata builder.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the Open Graph type.
    #[must_use]
    pub fn with_type(mut self, og_type: impl Into<String>) -> Self {
        self.og_type = og_type.into();
        self
    }

    /// Set the image URL.
    #[must_use]
    pub fn with_image(mut self, image: Option<impl Into<String>>) -> Self {
        self.image = image.map(Into::into);
        self
    }

    /// Set the site name.
    #[must_use]
    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = site_name.into();
        self
    }

    #[must_use]
    pub fn with_published_time(mut self, published_time: impl Into<String>) -> Self {
        self.published_time = Some(published_time.into());
        self
    }

    /// Render the metadata tags.
    pub fn render(&self) -> Markup {
        let title = &self.title;
        let description = &self.description;

        html! {
            // Open Graph metadata
            meta property="og:title" content=(title);
            meta property="og:description" content=(description);
            meta property="og:url" content=(&self.url);
            meta property="og:type" content=(&self.og_type);
            meta property="og:site_name" content=(&self.site_name);

            @if let Some(ref image_url) = self.image {
                meta property="og:image" content=(image_url);
                meta property="og:image:alt" content=(title);
            }

            @if let Some(ref published) = self.published_time {
                meta property="article:published_time" content=(published);
            }

            // Twitter Card metadata
            meta name="twitter:card" content=(&self.twitter_card);
            meta name="twitter:title" content=(title);
            meta name="twitter:description" content=(description);

            @if let Some(ref image_url) = self.image {
                meta name="twitter:image" content=(image_url);
            }

            // Standard meta description
            meta name="description" content=(description);
        }
    }
}
