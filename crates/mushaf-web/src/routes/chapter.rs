//! Single chapter route.

use axum::extract::{Path, State};
use axum::response::Redirect;
use maud::Markup;
use mushaf_api::ChapterId;

use crate::addr::ClientAddr;
use crate::error::WebError;
use crate::render;
use crate::state::AppState;

/// `GET /chapter` and `GET /chapter/`
///
/// A chapter request without an id goes back to the chapter list.
pub async fn chapter_redirect() -> Redirect {
    Redirect::to("/")
}

/// `GET /chapter/{id}`
///
/// The id must parse as an integer in 1..=114, else a 400 error page. Verses
/// and chapter metadata are fetched concurrently; if either call fails the
/// other is cancelled and the request ends with a 500 error page.
pub async fn chapter_page(
    State(state): State<AppState>,
    ClientAddr(addr): ClientAddr,
    Path(id): Path<String>,
) -> Result<Markup, WebError> {
    let id: ChapterId = id
        .parse()
        .map_err(|_| WebError::BadRequest("Invalid chapter ID"))?;

    let (verses, chapter) = tokio::try_join!(state.api.verses_by_chapter(id), state.api.chapter(id))
        .map_err(WebError::upstream("chapter"))?;

    let bookmarked = state.bookmarks.list(&addr);

    Ok(render::chapter::render(
        &chapter,
        &verses,
        &bookmarked,
        &state.config.site_name,
    ))
}
