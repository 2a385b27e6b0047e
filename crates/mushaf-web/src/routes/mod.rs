//! Route definitions for the reader.
//!
//! ## Routes
//!
//! - `GET /` - Chapter list
//! - `GET /chapter`, `GET /chapter/` - Redirect to the chapter list
//! - `GET /chapter/{id}` - Chapter page with verses and bookmark state
//! - `POST /bookmark` - Bookmark a verse, redirect back to its chapter
//! - `POST /remove-bookmark` - Remove a bookmark, redirect back
//! - `GET /bookmarks` - The caller's bookmarked verses
//! - `GET /health` - Health check (JSON)

mod bookmarks;
mod chapter;
mod chapters;
mod health;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

/// Build the complete reader router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(chapters::chapters_page))
        .route("/chapter", get(chapter::chapter_redirect))
        .route("/chapter/", get(chapter::chapter_redirect))
        .route("/chapter/{id}", get(chapter::chapter_page))
        .route("/bookmark", post(bookmarks::add_bookmark))
        .route("/remove-bookmark", post(bookmarks::remove_bookmark))
        .route("/bookmarks", get(bookmarks::bookmarks_page))
        .route("/health", get(health::health_check))
        .with_state(state)
}
