//! Chapter list route.

use axum::extract::State;
use maud::Markup;

use crate::error::WebError;
use crate::render;
use crate::state::AppState;

/// `GET /`
///
/// Fetch-or-reuse the cached chapter list and render it.
pub async fn chapters_page(State(state): State<AppState>) -> Result<Markup, WebError> {
    let chapters = state
        .chapters()
        .await
        .map_err(WebError::upstream("chapters"))?;

    Ok(render::chapters::render(chapters, &state.config.site_name))
}
