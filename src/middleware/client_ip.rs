//! Client IP extraction for the audit trail

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::request::Parts,
};

/// Source address of the request, for audit rows
///
/// Prefers the first hop of `X-Forwarded-For` (the usual deployment sits
/// behind a reverse proxy), falling back to the peer address.
#[derive(Debug, Clone)]
pub struct ClientIp(pub Option<String>);

impl ClientIp {
    fn from_forwarded_for(value: &str) -> Option<String> {
        value
            .split(',')
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|h| h.to_str().ok())
            .and_then(Self::from_forwarded_for);

        let ip = forwarded.or_else(|| {
            parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        });

        Ok(ClientIp(ip))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_forwarded_hop_wins() {
        assert_eq!(
            ClientIp::from_forwarded_for("203.0.113.7, 10.0.0.1, 10.0.0.2"),
            Some("203.0.113.7".to_string())
        );
    }

    #[test]
    fn test_single_hop_is_trimmed() {
        assert_eq!(
            ClientIp::from_forwarded_for("  198.51.100.4  "),
            Some("198.51.100.4".to_string())
        );
    }

    #[test]
    fn test_empty_header_yields_none() {
        assert_eq!(ClientIp::from_forwarded_for(""), None);
        assert_eq!(ClientIp::from_forwarded_for("   "), None);
    }
}
