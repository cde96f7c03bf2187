//! Org Social Preview library.
//!
//! A small web service that renders a shareable preview card, with Open
//! Graph metadata, for a single post of a remote Org Social feed. Feed
//! documents and rendered cards are cached independently with their own TTLs.

// Allow raw string hashes for safety - they're harmless and prevent issues if content changes
#![allow(clippy::needless_raw_string_hashes)]

pub mod cache;
pub mod components;
pub mod config;
pub mod constants;
pub mod fetcher;
pub mod social;
pub mod web;
