//! Maud HTML template components for the web UI.
//!
//! Components are organized into submodules by functionality:
//!
//! - `layout`: Base page layout
//! - `metadata`: Open Graph and Twitter Card tags
//! - `card`: Post card and tag list
//!
//! # Example
//!
//! ```ignore
//! use maud::{html, Markup};
//! use crate::components::{BaseLayout, PostCard};
//!
//! fn my_page(post: &Post) -> Markup {
//!     BaseLayout::new("My Page").render(html! { (PostCard::new(post)) })
//! }
//! ```

pub mod card;
pub mod layout;
pub mod metadata;

// Re-export layout components
pub use layout::BaseLayout;

// Re-export card components
pub use card::{PostCard, TagList};

// Re-export metadata components
pub use metadata::OpenGraphMetadata;
