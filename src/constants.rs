//! Shared constants used across the application.

/// User agent string sent when fetching feed documents.
pub const USER_AGENT: &str = concat!("org-social-preview/", env!("CARGO_PKG_VERSION"));

/// Display name used when a feed has no `#+NICK:` keyword.
pub const DEFAULT_NICK: &str = "User";

/// Feed title used when a feed has no `#+TITLE:` keyword.
pub const DEFAULT_FEED_TITLE: &str = "social.org";

/// Maximum length of the Open Graph description.
pub const OG_DESCRIPTION_MAX_LEN: usize = 120;

/// Product name shown in page titles and the footer.
pub const SITE_NAME: &str = "Org Social Preview";
