//! Async client for the quran.com v4 read endpoints.

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::types::{
    Chapter, ChapterEnvelope, ChapterId, ChaptersEnvelope, Verse, VerseEnvelope, VersesEnvelope,
};

/// Thin async client over a shared [`reqwest::Client`].
///
/// The language and translation id are fixed at construction time; every
/// request carries them as query parameters. Non-2xx responses surface as
/// [`crate::Error::Http`].
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    language: String,
    translation_id: u32,
}

impl Client {
    /// Create a client for the given API base URL (trailing slash stripped).
    pub fn new(base_url: impl Into<String>, language: impl Into<String>, translation_id: u32) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            language: language.into(),
            translation_id,
        }
    }

    /// Fetch the full chapter list.
    pub async fn chapters(&self) -> Result<Vec<Chapter>> {
        let env: ChaptersEnvelope = self.get_json(&self.url("chapters", false)).await?;
        Ok(env.chapters)
    }

    /// Fetch metadata for a single chapter.
    pub async fn chapter(&self, id: ChapterId) -> Result<Chapter> {
        let env: ChapterEnvelope = self.get_json(&self.url(&format!("chapters/{id}"), false)).await?;
        Ok(env.chapter)
    }

    /// Fetch all verses of a chapter, with the configured translation.
    pub async fn verses_by_chapter(&self, id: ChapterId) -> Result<Vec<Verse>> {
        let env: VersesEnvelope = self
            .get_json(&self.url(&format!("verses/by_chapter/{id}"), true))
            .await?;
        env.verses.into_iter().map(|row| row.into_verse()).collect()
    }

    /// Fetch a single verse by its `<chapter>:<verse>` key.
    pub async fn verse_by_key(&self, key: &str) -> Result<Verse> {
        let env: VerseEnvelope = self
            .get_json(&self.url(&format!("verses/by_key/{key}"), true))
            .await?;
        env.verse.into_verse()
    }

    /// Build a full request URL for a path, always carrying the language and
    /// optionally the translation id.
    fn url(&self, path: &str, with_translation: bool) -> String {
        let mut url = format!("{}/{}?language={}", self.base_url, path, self.language);
        if with_translation {
            url.push_str(&format!("&translations={}", self.translation_id));
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::new("https://api.quran.com/api/v4", "en", 131)
    }

    #[test]
    fn url_without_translation() {
        assert_eq!(
            client().url("chapters", false),
            "https://api.quran.com/api/v4/chapters?language=en"
        );
    }

    #[test]
    fn url_with_translation() {
        assert_eq!(
            client().url("verses/by_key/2:255", true),
            "https://api.quran.com/api/v4/verses/by_key/2:255?language=en&translations=131"
        );
    }

    #[test]
    fn base_url_trailing_slash_stripped() {
        let client = Client::new("http://localhost:9999/", "en", 131);
        assert_eq!(
            client.url("chapters", false),
            "http://localhost:9999/chapters?language=en"
        );
    }
}
