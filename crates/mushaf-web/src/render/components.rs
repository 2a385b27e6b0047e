//! Shared HTML components used across all reader pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages.

use maud::{DOCTYPE, Markup, PreEscaped, html};
use mushaf_api::Verse;

/// Inline CSS for all reader pages.
///
/// Flat, quiet design: spacing and subtle background shifts for hierarchy,
/// a serif stack for the Arabic text.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#faf9f6;--fg:#1a1a1a;--fg2:#555;--fg3:#999;--accent:#0e7a5f;--accent-hover:#0a5c47;--border:rgba(14,122,95,.18);--arabic:"Amiri","Scheherazade New","Noto Naskh Arabic",serif}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:720px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}

.site-header{width:100%;max-width:720px;display:flex;align-items:baseline;justify-content:space-between;margin-bottom:1.5rem}
.site-title{font-size:1.3rem;font-weight:700;letter-spacing:-.02em;color:var(--fg)}
.site-nav{display:flex;gap:1rem;font-size:.9rem}

.page-title{font-size:1.6rem;font-weight:700;letter-spacing:-.01em;margin-bottom:1rem}
.page-subtitle{color:var(--fg3);font-size:.9rem;margin-bottom:1.5rem}

.chapter-list{list-style:none;display:grid;grid-template-columns:repeat(auto-fill,minmax(200px,1fr));gap:.5rem}
.chapter-list a{display:flex;align-items:baseline;gap:.6rem;padding:.55rem .75rem;border:1px solid var(--border);border-radius:8px;color:var(--fg);transition:border-color .15s}
.chapter-list a:hover{border-color:var(--accent);text-decoration:none}
.chapter-num{font-size:.8rem;color:var(--fg3);min-width:1.8em;text-align:right}
.chapter-name{font-weight:600}

.verse{padding:1.25rem 0;border-bottom:1px solid var(--border)}
.verse:last-child{border-bottom:none}
.verse-num{display:inline-block;font-size:.75rem;font-weight:600;color:var(--accent);border:1px solid var(--border);border-radius:100px;padding:.1rem .6rem;margin-bottom:.6rem}
.verse-text{font-family:var(--arabic);font-size:1.7rem;line-height:2.3;direction:rtl;text-align:right;margin-bottom:.6rem}
.verse-translation{color:var(--fg2);line-height:1.7}
.verse-actions{display:flex;align-items:center;gap:1rem;margin-top:.75rem;font-size:.85rem}
.verse-actions form{display:inline}
.verse-actions button{background:none;border:1px solid var(--border);border-radius:6px;padding:.25rem .7rem;font-size:.8rem;color:var(--accent);cursor:pointer}
.verse-actions button:hover{border-color:var(--accent)}
.verse-chapter-link{color:var(--fg3)}

.empty-state{text-align:center;color:var(--fg3);padding:3rem 0}
.empty-state a{display:inline-block;margin-top:.5rem}

.footer{margin-top:2.5rem;font-size:.8rem;color:var(--fg3)}
"#;

/// Inline CSS for the error page. Standalone so the error path does not pull
/// in the full page stylesheet.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;background:#faf9f6;color:#1a1a1a;min-height:100vh;display:flex;align-items:center;justify-content:center;padding:1rem}
.error-page{text-align:center;max-width:420px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#555;margin-bottom:1.25rem;line-height:1.6}
.error-page a{color:#0e7a5f;text-decoration:none}
.error-page a:hover{text-decoration:underline}
"#;

/// Render the full HTML page shell with `<head>`, header navigation, and
/// body content.
pub fn page_shell(title: &str, site_name: &str, body_content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " — " (site_name) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                header class="site-header" {
                    a class="site-title" href="/" { (site_name) }
                    nav class="site-nav" {
                        a href="/" { "Chapters" }
                        a href="/bookmarks" { "Bookmarks" }
                    }
                }
                main { (body_content) }
                footer class="footer" {
                    "Text and translations from "
                    a href="https://quran.com" { "Quran.com" }
                }
            }
        }
    }
}

/// Render one verse: number badge, Arabic text, translation, and the
/// bookmark/un-bookmark form.
///
/// When `link_chapter` is set (bookmarks page), the card also links back to
/// the verse's chapter. The chapter id for the form is derived from the
/// verse key, which the API crate guarantees has the `<chapter>:<verse>`
/// form.
pub fn verse_card(verse: &Verse, bookmarked: bool, link_chapter: bool) -> Markup {
    let chapter = verse.key.split_once(':').map(|(c, _)| c).unwrap_or_default();

    html! {
        article class="verse" {
            span class="verse-num" { (verse.number) }
            p class="verse-text" { (verse.text) }
            p class="verse-translation" { (verse.translation) }
            div class="verse-actions" {
                @if bookmarked {
                    form method="post" action="/remove-bookmark" {
                        input type="hidden" name="verseId" value=(verse.key);
                        input type="hidden" name="chapterId" value=(chapter);
                        button type="submit" { "Remove bookmark" }
                    }
                } @else {
                    form method="post" action="/bookmark" {
                        input type="hidden" name="verseId" value=(verse.key);
                        input type="hidden" name="chapterId" value=(chapter);
                        button type="submit" { "Bookmark" }
                    }
                }
                @if link_chapter {
                    a class="verse-chapter-link" href={"/chapter/" (chapter)} {
                        "Chapter " (chapter)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse() -> Verse {
        Verse {
            key: "2:255".to_string(),
            text: "ٱللَّهُ لَآ إِلَـٰهَ إِلَّا هُوَ".to_string(),
            translation: "Allah - there is no deity except Him".to_string(),
            number: 255,
        }
    }

    #[test]
    fn unbookmarked_verse_offers_bookmark_form() {
        let html = verse_card(&verse(), false, false).into_string();
        assert!(html.contains(r#"action="/bookmark""#));
        assert!(html.contains(r#"value="2:255""#));
        assert!(html.contains(r#"name="chapterId" value="2""#));
        assert!(!html.contains("/remove-bookmark"));
    }

    #[test]
    fn bookmarked_verse_offers_remove_form() {
        let html = verse_card(&verse(), true, false).into_string();
        assert!(html.contains(r#"action="/remove-bookmark""#));
    }

    #[test]
    fn chapter_link_only_when_requested() {
        let with = verse_card(&verse(), false, true).into_string();
        let without = verse_card(&verse(), false, false).into_string();
        assert!(with.contains(r#"href="/chapter/2""#));
        assert!(!without.contains(r#"href="/chapter/2""#));
    }

    #[test]
    fn page_shell_escapes_title() {
        let html = page_shell("<script>", "Mushaf", html! {}).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
