//! Bookmarks page (`GET /bookmarks`).

use maud::{Markup, html};
use mushaf_api::Verse;

use super::components::{page_shell, verse_card};

/// Render the caller's bookmarked verses, or an empty state.
pub fn render(verses: &[Verse], site_name: &str) -> Markup {
    let body = html! {
        h1 class="page-title" { "Bookmarks" }
        @if verses.is_empty() {
            div class="empty-state" {
                p { "You have no bookmarks yet." }
                a href="/" { "Browse the chapters" }
            }
        } @else {
            @for verse in verses {
                (verse_card(verse, true, true))
            }
        }
    };

    page_shell("Bookmarks", site_name, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_renders_empty_state() {
        let html = render(&[], "Mushaf").into_string();
        assert!(html.contains("no bookmarks yet"));
        assert!(!html.contains("verse-text"));
    }

    #[test]
    fn bookmarked_verses_link_back_to_their_chapter() {
        let verses = vec![Verse {
            key: "2:255".to_string(),
            text: "ٱللَّهُ".to_string(),
            translation: "Allah".to_string(),
            number: 255,
        }];
        let html = render(&verses, "Mushaf").into_string();
        assert!(html.contains(r#"href="/chapter/2""#));
        assert!(html.contains(r#"action="/remove-bookmark""#));
    }
}
