//! Org Social feed parsing and post lookup.
//!
//! - `document`: header keywords and post block splitting
//! - `format`: display formatting for post fields
//! - `post`: the located [`Post`] record

pub mod document;
pub mod format;
pub mod post;

use tracing::debug;
use url::Url;

pub use document::{parse_metadata, parse_post_block, post_blocks, FeedMetadata, RawPost};
pub use post::Post;

/// Find the post whose `ID` equals `timestamp` byte for byte.
///
/// Blocks are scanned in document order and the first match wins. `None`
/// means the feed has no such post; it is a normal outcome, not an error.
#[must_use]
pub fn locate_post(document: &str, feed_url: &Url, timestamp: &str) -> Option<Post> {
    let mut scanned = 0usize;
    for block in post_blocks(document) {
        scanned += 1;
        let raw = parse_post_block(block);
        if raw.id() == Some(timestamp) {
            let metadata = parse_metadata(document);
            return Post::from_raw(&metadata, &raw, feed_url);
        }
    }

    debug!(feed = %feed_url, timestamp, scanned, "Post not found in feed");
    None
}
