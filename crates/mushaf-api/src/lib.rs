//! Client for the quran.com v4 REST API.
//!
//! This crate provides:
//! - Domain types for chapters and verses, plus the wire envelopes the API
//!   wraps them in
//! - A thin async [`Client`] over `reqwest` for the four read endpoints the
//!   reader front end needs
//! - Shared error types
//!
//! The client is deliberately policy-free: no retries, no timeouts, no
//! caching. Callers own those decisions.

mod client;
mod error;
mod types;

pub use client::Client;
pub use error::{Error, Result};
pub use types::{CHAPTER_COUNT, Chapter, ChapterId, ParseChapterIdError, Verse};
