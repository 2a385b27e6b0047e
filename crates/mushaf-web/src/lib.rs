//! Mushaf Web - server-rendered Quran reader.
//!
//! This crate provides a small HTML front end over the quran.com v4 API:
//! a chapter list, chapter pages with verses and one translation, and
//! per-visitor verse bookmarks.
//!
//! # Architecture
//!
//! - **State**: [`AppState`] carries the API client, the process-lifetime
//!   chapter cache, and the in-memory bookmark store
//! - **Bookmarks**: visitors are identified by their peer network address;
//!   each address owns an ordered, duplicate-free list of verse keys
//! - **Render**: HTML is generated with maud (compile-time templates), so all
//!   dynamic content is escaped by construction
//!
//! Bookmarks live only for the lifetime of the process; there is no
//! persistence and no user accounts.

pub mod addr;
pub mod bookmarks;
pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

pub use addr::ClientAddr;
pub use bookmarks::BookmarkStore;
pub use config::Config;
pub use error::WebError;
pub use routes::router;
pub use state::AppState;
