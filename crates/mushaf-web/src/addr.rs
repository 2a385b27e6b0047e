//! Client address extraction.
//!
//! Visitors are identified solely by their peer network address; there are
//! no accounts or sessions. The server must therefore be started with
//! [`axum::Router::into_make_service_with_connect_info`] so the peer address
//! is available to handlers.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

use crate::error::WebError;

/// The requesting client's IP address, used as the bookmark-list key.
#[derive(Debug, Clone)]
pub struct ClientAddr(pub String);

impl<S> FromRequestParts<S> for ClientAddr
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ConnectInfo(addr) = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .copied()
            .ok_or_else(|| {
                WebError::Internal(anyhow::anyhow!(
                    "connect info missing; server not started with connect-info service"
                ))
            })?;

        Ok(Self(addr.ip().to_string()))
    }
}
