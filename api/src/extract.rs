//! Custom extractors that convert axum rejections to structured AppError responses.

use std::net::{IpAddr, SocketAddr};

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

use crate::error::AppError;

/// Peer IP address used as the rate-limit key.
///
/// Reads the `ConnectInfo` the server injects via
/// `into_make_service_with_connect_info`. A missing address means the
/// service was wired up without connect info, which is a deployment error,
/// not a client one.
pub struct ClientAddr(pub IpAddr);

impl<S> FromRequestParts<S> for ClientAddr
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| ClientAddr(addr.ip()))
            .ok_or_else(|| {
                AppError::Internal("peer address unavailable for rate limiting".to_string())
            })
    }
}
