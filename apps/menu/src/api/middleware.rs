//! # Middleware Module
//!
//! Global request throttling for the menu HTTP API.
//!
//! `MENU_RATE_LIMIT` sets the requests per second shared by all clients.
//! Unset or unreadable values fall back to 50; `0` turns throttling off.

use super::types::ErrorResponse;
use axum::{
    Json,
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;

pub const RATE_LIMIT_ENV: &str = "MENU_RATE_LIMIT";

const DEFAULT_RPS: NonZeroU32 = NonZeroU32::new(50).unwrap();

/// Shared limiter, one bucket for the whole server.
pub type GlobalRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

pub fn create_rate_limiter(requests_per_second: NonZeroU32) -> GlobalRateLimiter {
    Arc::new(RateLimiter::direct(Quota::per_second(requests_per_second)))
}

/// Interpret a raw `MENU_RATE_LIMIT` value.
///
/// Returns `None` when throttling is switched off.
pub fn parse_rate_limit(raw: Option<&str>) -> Option<NonZeroU32> {
    let Some(raw) = raw else {
        return Some(DEFAULT_RPS);
    };
    match raw.trim().parse::<u32>() {
        Ok(rps) => NonZeroU32::new(rps),
        Err(_) => {
            tracing::warn!(value = raw, "Unreadable {}, using default", RATE_LIMIT_ENV);
            Some(DEFAULT_RPS)
        }
    }
}

pub fn rate_limit_from_env() -> Option<NonZeroU32> {
    parse_rate_limit(std::env::var(RATE_LIMIT_ENV).ok().as_deref())
}

pub async fn rate_limit_middleware(
    State(limiter): State<GlobalRateLimiter>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if limiter.check().is_err() {
        tracing::warn!(path = %request.uri().path(), "Rate limit exceeded");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse::rate_limited()),
        )
            .into_response();
    }
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_uses_default() {
        assert_eq!(parse_rate_limit(None), Some(DEFAULT_RPS));
    }

    #[test]
    fn zero_disables() {
        assert_eq!(parse_rate_limit(Some("0")), None);
        assert_eq!(parse_rate_limit(Some(" 0 ")), None);
    }

    #[test]
    fn explicit_value_is_trimmed() {
        assert_eq!(parse_rate_limit(Some(" 7\n")), NonZeroU32::new(7));
    }

    #[test]
    fn garbage_falls_back_to_default() {
        assert_eq!(parse_rate_limit(Some("fast")), Some(DEFAULT_RPS));
        assert_eq!(parse_rate_limit(Some("-3")), Some(DEFAULT_RPS));
        assert_eq!(parse_rate_limit(Some("")), Some(DEFAULT_RPS));
    }

    #[test]
    fn one_per_second_rejects_second_request() {
        let limiter = create_rate_limiter(NonZeroU32::MIN);
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_err());
    }
}
