//! Error types for the web front end.
//!
//! Errors are rendered as simple HTML error pages rather than JSON, since
//! this is a user-facing HTML service. Upstream detail is logged server-side
//! and never reaches the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};

/// Web front-end error type.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Malformed client input (bad chapter id, missing verse id).
    #[error("bad request: {0}")]
    BadRequest(&'static str),

    /// An upstream API call failed while loading `what`.
    #[error("failed to load {what}: {source}")]
    Upstream {
        /// What was being loaded, for the user-facing message.
        what: &'static str,
        /// The underlying client error (logged, not shown).
        #[source]
        source: mushaf_api::Error,
    },

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl WebError {
    /// Adapter for `map_err` on upstream calls: tags the failure with the
    /// resource name used in the user-facing message.
    pub fn upstream(what: &'static str) -> impl Fn(mushaf_api::Error) -> Self {
        move |source| Self::Upstream { what, source }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Invalid Request", msg.to_string()),
            Self::Upstream { what, source } => {
                tracing::error!(what, error = %source, "upstream request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something Went Wrong",
                    format!("Failed to load {what}. Please try again later."),
                )
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something Went Wrong",
                    "An internal error occurred. Please try again later.".to_string(),
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    meta name="robots" content="noindex";
                    style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href="/" { "Back to chapters" }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn error_display_bad_request() {
        let err = WebError::BadRequest("Invalid chapter ID");
        assert_eq!(err.to_string(), "bad request: Invalid chapter ID");
    }

    #[test]
    fn bad_request_is_400() {
        let response = WebError::BadRequest("Invalid bookmark data").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_is_500() {
        let response = WebError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn bad_request_shows_its_message() {
        let response = WebError::BadRequest("Invalid chapter ID").into_response();
        let body = body_text(response).await;
        assert!(body.contains("Invalid chapter ID"));
    }

    #[tokio::test]
    async fn upstream_failure_hides_detail() {
        let err = WebError::upstream("chapters")(mushaf_api::Error::MissingTranslation {
            key: "secret-internal-detail".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_text(response).await;
        assert!(body.contains("Failed to load chapters. Please try again later."));
        assert!(!body.contains("secret-internal-detail"));
    }
}
