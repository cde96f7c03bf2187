//! Maud-based page templates for the web UI.
//!
//! Each page module exports a render function that produces the complete HTML.

pub mod preview;
pub mod welcome;

pub use preview::render_post_page;
pub use welcome::render_welcome_page;
