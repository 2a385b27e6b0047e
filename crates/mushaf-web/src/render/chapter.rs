//! Single chapter page (`GET /chapter/{id}`).

use maud::{Markup, html};
use mushaf_api::{Chapter, Verse};

use super::components::{page_shell, verse_card};

/// Render a chapter's verses with the caller's bookmark state.
pub fn render(chapter: &Chapter, verses: &[Verse], bookmarked: &[String], site_name: &str) -> Markup {
    let body = html! {
        h1 class="page-title" { (chapter.id) ". " (chapter.name_simple) }
        p class="page-subtitle" { (verses.len()) " verses" }
        @for verse in verses {
            (verse_card(verse, bookmarked.iter().any(|k| k == &verse.key), false))
        }
    };

    page_shell(&chapter.name_simple, site_name, body)
}
