//! Bookmark routes: add, remove, and list.

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use futures::future::try_join_all;
use maud::Markup;
use serde::Deserialize;

use crate::addr::ClientAddr;
use crate::error::WebError;
use crate::render;
use crate::state::AppState;

/// Form body for `POST /bookmark` and `POST /remove-bookmark`.
///
/// Fields default to empty so missing inputs reach our own validation
/// instead of the extractor's rejection.
#[derive(Debug, Deserialize)]
pub struct BookmarkForm {
    #[serde(rename = "verseId", default)]
    pub verse_id: String,
    #[serde(rename = "chapterId", default)]
    pub chapter_id: String,
}

/// Validate a bookmark form: non-empty verse key, integer-parseable chapter
/// id. The chapter id is only used for the redirect target, so it is not
/// range-checked here; an out-of-range id fails on the chapter page instead.
fn validate(form: &BookmarkForm) -> Result<(&str, i64), WebError> {
    if form.verse_id.is_empty() {
        return Err(WebError::BadRequest("Invalid bookmark data"));
    }
    let chapter = form
        .chapter_id
        .parse()
        .map_err(|_| WebError::BadRequest("Invalid bookmark data"))?;
    Ok((&form.verse_id, chapter))
}

/// `POST /bookmark`
///
/// Append the verse key to the caller's list if absent, then redirect back
/// to the chapter view.
pub async fn add_bookmark(
    State(state): State<AppState>,
    ClientAddr(addr): ClientAddr,
    Form(form): Form<BookmarkForm>,
) -> Result<Redirect, WebError> {
    let (verse_key, chapter) = validate(&form)?;

    if state.bookmarks.add(&addr, verse_key) {
        tracing::info!(addr = %addr, verse_key, "bookmark added");
    }

    Ok(Redirect::to(&format!("/chapter/{chapter}")))
}

/// `POST /remove-bookmark`
///
/// Remove the verse key from the caller's list if present, then redirect
/// back to the chapter view.
pub async fn remove_bookmark(
    State(state): State<AppState>,
    ClientAddr(addr): ClientAddr,
    Form(form): Form<BookmarkForm>,
) -> Result<Redirect, WebError> {
    let (verse_key, chapter) = validate(&form)?;

    if state.bookmarks.remove(&addr, verse_key) {
        tracing::info!(addr = %addr, verse_key, "bookmark removed");
    }

    Ok(Redirect::to(&format!("/chapter/{chapter}")))
}

/// `GET /bookmarks`
///
/// An empty list renders the empty view without touching upstream. Otherwise
/// every bookmarked verse is fetched concurrently; the first failure cancels
/// the remaining fetches and the request ends with a 500 error page.
pub async fn bookmarks_page(
    State(state): State<AppState>,
    ClientAddr(addr): ClientAddr,
) -> Result<Markup, WebError> {
    let keys = state.bookmarks.list(&addr);

    if keys.is_empty() {
        return Ok(render::bookmarks::render(&[], &state.config.site_name));
    }

    let verses = try_join_all(keys.iter().map(|key| state.api.verse_by_key(key)))
        .await
        .map_err(WebError::upstream("bookmarks"))?;

    Ok(render::bookmarks::render(&verses, &state.config.site_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(verse_id: &str, chapter_id: &str) -> BookmarkForm {
        BookmarkForm {
            verse_id: verse_id.to_string(),
            chapter_id: chapter_id.to_string(),
        }
    }

    #[test]
    fn validate_accepts_well_formed_input() {
        let form = form("2:255", "2");
        assert!(matches!(validate(&form), Ok(("2:255", 2))));
    }

    #[test]
    fn validate_rejects_empty_verse_id() {
        assert!(validate(&form("", "2")).is_err());
    }

    #[test]
    fn validate_rejects_non_numeric_chapter_id() {
        assert!(validate(&form("2:255", "")).is_err());
        assert!(validate(&form("2:255", "two")).is_err());
        assert!(validate(&form("2:255", "2abc")).is_err());
    }

    #[test]
    fn validate_does_not_range_check_chapter() {
        // Mirrors the redirect-only use of the id; the chapter page 400s it.
        assert!(validate(&form("999:1", "999")).is_ok());
    }
}
