//! Domain types and wire shapes for the quran.com v4 API.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Number of chapters in the text. Chapter ids run from 1 to this value.
pub const CHAPTER_COUNT: u16 = 114;

/// A validated chapter identifier in `1..=114`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChapterId(u16);

impl ChapterId {
    /// Create a chapter id, rejecting values outside `1..=114`.
    pub fn new(id: u16) -> Option<Self> {
        (1..=CHAPTER_COUNT).contains(&id).then_some(Self(id))
    }

    /// The raw numeric id.
    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Error returned when a string is not a valid chapter id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("chapter id must be an integer between 1 and {CHAPTER_COUNT}")]
pub struct ParseChapterIdError;

impl FromStr for ChapterId {
    type Err = ParseChapterIdError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let id: u16 = s.parse().map_err(|_| ParseChapterIdError)?;
        ChapterId::new(id).ok_or(ParseChapterIdError)
    }
}

/// A chapter as listed by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Chapter {
    /// Numeric chapter id (1-114).
    pub id: u16,
    /// Transliterated chapter name (e.g. "Al-Baqarah").
    pub name_simple: String,
}

/// A verse with its requested translation, ready for rendering.
#[derive(Debug, Clone)]
pub struct Verse {
    /// Composite key, `<chapter>:<verse>`.
    pub key: String,
    /// Original-language text (Uthmani script).
    pub text: String,
    /// Text of the single requested translation.
    pub translation: String,
    /// Verse number within the chapter, derived from the key.
    pub number: u32,
}

// ═══════════════════════════════════════════════════════════════════════════
// Wire shapes
// ═══════════════════════════════════════════════════════════════════════════

/// Envelope for `GET /chapters`.
#[derive(Debug, Deserialize)]
pub(crate) struct ChaptersEnvelope {
    pub chapters: Vec<Chapter>,
}

/// Envelope for `GET /chapters/{id}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ChapterEnvelope {
    pub chapter: Chapter,
}

/// Envelope for `GET /verses/by_chapter/{id}`.
#[derive(Debug, Deserialize)]
pub(crate) struct VersesEnvelope {
    pub verses: Vec<VerseRow>,
}

/// Envelope for `GET /verses/by_key/{key}`.
#[derive(Debug, Deserialize)]
pub(crate) struct VerseEnvelope {
    pub verse: VerseRow,
}

/// A raw verse row as returned by the API.
#[derive(Debug, Deserialize)]
pub(crate) struct VerseRow {
    pub verse_key: String,
    pub text_uthmani: String,
    #[serde(default)]
    pub translations: Vec<TranslationRow>,
}

/// One translation attached to a verse row.
#[derive(Debug, Deserialize)]
pub(crate) struct TranslationRow {
    pub text: String,
}

impl VerseRow {
    /// Convert a wire row into a [`Verse`], deriving the verse number from
    /// the component after the colon in the key.
    pub(crate) fn into_verse(mut self) -> Result<Verse> {
        let number = self
            .verse_key
            .split_once(':')
            .and_then(|(_, n)| n.parse::<u32>().ok())
            .ok_or_else(|| Error::MalformedVerseKey {
                key: self.verse_key.clone(),
            })?;

        if self.translations.is_empty() {
            return Err(Error::MissingTranslation {
                key: self.verse_key,
            });
        }

        Ok(Verse {
            key: self.verse_key,
            text: self.text_uthmani,
            translation: self.translations.swap_remove(0).text,
            number,
        })
    }
}
