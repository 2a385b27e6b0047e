//! Application configuration loaded from environment variables.

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:3000").
    pub bind_addr: String,

    /// Base URL of the quran.com API.
    pub api_base_url: String,

    /// Language requested from the API (chapter names, translations).
    pub language: String,

    /// Translation id requested alongside each verse.
    pub translation_id: u32,

    /// Site name shown in page titles.
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults for local development)
    ///
    /// Optional:
    /// - `MUSHAF_BIND_ADDR`: Server bind address (default: "0.0.0.0:3000")
    /// - `QURAN_API_URL`: API base URL (default: "https://api.quran.com/api/v4")
    /// - `MUSHAF_LANGUAGE`: Requested language (default: "en")
    /// - `MUSHAF_TRANSLATION_ID`: Translation id (default: 131, Saheeh International)
    /// - `MUSHAF_SITE_NAME`: Site name for page titles (default: "Mushaf")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("MUSHAF_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let api_base_url = std::env::var("QURAN_API_URL")
            .unwrap_or_else(|_| "https://api.quran.com/api/v4".to_string())
            .trim_end_matches('/')
            .to_string();

        let language = std::env::var("MUSHAF_LANGUAGE").unwrap_or_else(|_| "en".to_string());

        let translation_id = match std::env::var("MUSHAF_TRANSLATION_ID") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("MUSHAF_TRANSLATION_ID must be an integer: {raw}"))?,
            Err(_) => 131,
        };

        let site_name = std::env::var("MUSHAF_SITE_NAME").unwrap_or_else(|_| "Mushaf".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            api_base_url = %api_base_url,
            language = %language,
            translation_id,
            site_name = %site_name,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            api_base_url,
            language,
            translation_id,
            site_name,
        })
    }
}
