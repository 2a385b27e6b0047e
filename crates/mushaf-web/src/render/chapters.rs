//! Chapter list page (`GET /`).

use maud::{Markup, html};
use mushaf_api::Chapter;

use super::components::page_shell;

/// Render the chapter list.
pub fn render(chapters: &[Chapter], site_name: &str) -> Markup {
    let body = html! {
        h1 class="page-title" { "Chapters" }
        ul class="chapter-list" {
            @for chapter in chapters {
                li {
                    a href={"/chapter/" (chapter.id)} {
                        span class="chapter-num" { (chapter.id) }
                        span class="chapter-name" { (chapter.name_simple) }
                    }
                }
            }
        }
    };

    page_shell("Chapters", site_name, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_chapters_with_links() {
        let chapters = vec![
            Chapter {
                id: 1,
                name_simple: "Al-Fatihah".to_string(),
            },
            Chapter {
                id: 2,
                name_simple: "Al-Baqarah".to_string(),
            },
        ];
        let html = render(&chapters, "Mushaf").into_string();
        assert!(html.contains(r#"href="/chapter/1""#));
        assert!(html.contains("Al-Fatihah"));
        assert!(html.contains(r#"href="/chapter/2""#));
        assert!(html.contains("Al-Baqarah"));
    }
}
