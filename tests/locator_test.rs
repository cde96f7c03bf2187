//! Integration tests for locating posts in Org Social feeds.

use org_social_preview::social::{locate_post, Post};
use url::Url;

const FEED: &str = "\
#+TITLE: Alice's journal
#+NICK: alice
#+DESCRIPTION: Notes and things
#+AVATAR: /a.png
#+LINK: https://alice.example

* Posts
**
:PROPERTIES:
:ID: 2025-02-03T23:05:00+0100
:MOOD: :)
:TAGS: foo,bar
:END:

Hello world
**
:PROPERTIES:
:ID: 2025-02-05T10:00:00+0100
:LANG: en
:TAGS: rust emacs rust
:CLIENT: org-social.el
:REPLY_TO: https://bob.org/social.org#2025-02-04T12:00:00+0000
:END:

Replying to [[org-social:https://bob.org/social.org][bob]].
Details at [[https://example.com/notes][my notes]].
**
:PROPERTIES:
:ID: 2025-02-03T23:05:00+0100
:END:

Duplicate timestamp, never shown
";

fn feed_url() -> Url {
    Url::parse("https://foo.org/social.org").unwrap()
}

#[test]
fn test_locates_scenario_post() {
    let post = locate_post(FEED, &feed_url(), "2025-02-03T23:05:00+0100").expect("post exists");

    assert_eq!(post.nick, "alice");
    assert_eq!(post.avatar_url.as_deref(), Some("https://foo.org/a.png"));
    assert_eq!(post.tags, vec!["foo", "bar"]);
    assert_eq!(post.content, "Hello world");
    assert_eq!(post.mood.as_deref(), Some(":)"));
    assert_eq!(
        post.post_url,
        "https://foo.org/social.org#2025-02-03T23:05:00+0100"
    );
    assert_eq!(post.feed_title, "Alice's journal");
    assert_eq!(post.feed_description.as_deref(), Some("Notes and things"));
}

#[test]
fn test_first_match_wins() {
    let post = locate_post(FEED, &feed_url(), "2025-02-03T23:05:00+0100").unwrap();
    assert!(!post.content.contains("Duplicate"));
}

#[test]
fn test_optional_properties_and_links() {
    let post = locate_post(FEED, &feed_url(), "2025-02-05T10:00:00+0100").unwrap();

    assert_eq!(post.tags, vec!["rust", "emacs"]);
    assert_eq!(post.lang.as_deref(), Some("en"));
    assert_eq!(post.client.as_deref(), Some("org-social.el"));
    assert!(post.is_reply());
    assert!(post
        .formatted_content
        .contains(r#"href="https://bob.org/social.org""#));
    assert!(post.formatted_content.contains("@bob</a>"));
    assert!(post
        .formatted_content
        .contains(r#"href="https://example.com/notes""#));
    assert!(post.formatted_content.contains("<br>"));
    assert!(post.mood.is_none());
}

#[test]
fn test_unknown_timestamp_is_not_found() {
    assert!(locate_post(FEED, &feed_url(), "1999-01-01T00:00:00+0000").is_none());
}

#[test]
fn test_timestamp_must_match_exactly() {
    // Same instant, different spelling
    assert!(locate_post(FEED, &feed_url(), "2025-02-03T23:05:00+01:00").is_none());
    assert!(locate_post(FEED, &feed_url(), "2025-02-03T22:05:00Z").is_none());
    assert!(locate_post(FEED, &feed_url(), "2025-02-03").is_none());
}

#[test]
fn test_locate_is_idempotent() {
    let first: Post = locate_post(FEED, &feed_url(), "2025-02-05T10:00:00+0100").unwrap();
    let second: Post = locate_post(FEED, &feed_url(), "2025-02-05T10:00:00+0100").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_header_degrades_to_defaults() {
    let feed = "* Posts\n**\n:PROPERTIES:\n:ID: 2025-01-01T00:00:00+0000\n:END:\nhi\n";
    let post = locate_post(feed, &feed_url(), "2025-01-01T00:00:00+0000").unwrap();

    assert_eq!(post.nick, "User");
    assert_eq!(post.avatar_url, None);
    assert_eq!(post.formatted_time, "2025-01-01 00:00");
}

#[test]
fn test_truncated_document() {
    let feed = "#+NICK: carol\n* Posts\n**\n:PROPERTIES:\n:ID: 2025-01-01T00:00:00+0000\n:MO";
    let post = locate_post(feed, &feed_url(), "2025-01-01T00:00:00+0000").unwrap();

    assert_eq!(post.nick, "carol");
    assert!(post.content.is_empty());
    assert_eq!(post.formatted_content, "No content");
    assert!(post.mood.is_none());
}

#[test]
fn test_unparseable_timestamp_is_shown_raw() {
    let feed = "* Posts\n**\n:PROPERTIES:\n:ID: someday\n:END:\nhi\n";
    let post = locate_post(feed, &feed_url(), "someday").unwrap();
    assert_eq!(post.formatted_time, "someday");
}

#[test]
fn test_garbage_documents_are_not_found() {
    for doc in ["", "just some text", "* Posts", "* Posts\n**\n", "\u{0}\u{1}**\n:ID:"] {
        assert!(locate_post(doc, &feed_url(), "2025-01-01T00:00:00+0000").is_none());
    }
}

#[test]
fn test_hostile_avatar_is_dropped() {
    let feed = "#+AVATAR: javascript:alert(1)\n* Posts\n**\n:PROPERTIES:\n:ID: t\n:END:\nhi\n";
    let post = locate_post(feed, &feed_url(), "t").unwrap();
    assert_eq!(post.avatar_url, None);
}
