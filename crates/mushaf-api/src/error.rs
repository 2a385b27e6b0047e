//! Error types for the quran.com API client.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the upstream API.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level or non-2xx HTTP failure.
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A verse row arrived without the requested translation.
    #[error("verse {key} has no translation")]
    MissingTranslation {
        /// The verse key the row was returned under.
        key: String,
    },

    /// A verse key did not have the `<chapter>:<verse>` form.
    #[error("malformed verse key: {key}")]
    MalformedVerseKey {
        /// The offending key as received.
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_translation_display() {
        let err = Error::MissingTranslation {
            key: "2:255".to_string(),
        };
        assert_eq!(err.to_string(), "verse 2:255 has no translation");
    }

    #[test]
    fn malformed_verse_key_display() {
        let err = Error::MalformedVerseKey {
            key: "garbage".to_string(),
        };
        assert_eq!(err.to_string(), "malformed verse key: garbage");
    }
}
