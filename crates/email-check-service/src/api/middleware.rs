//! Global rate limit on email checks.

use crate::error::ServiceError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::{num::NonZeroU32, sync::Arc, time::Duration};
use tracing::warn;

type CheckLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Shared quota for outbound checks. Every `/check-email` call spends one
/// cell, whatever the caller.
#[derive(Clone)]
pub struct RateLimitState {
    limiter: Arc<CheckLimiter>,
    clock: DefaultClock,
}

impl RateLimitState {
    pub fn new(checks_per_minute: NonZeroU32) -> Self {
        Self {
            limiter: Arc::new(RateLimiter::direct(Quota::per_minute(checks_per_minute))),
            clock: DefaultClock::default(),
        }
    }

    /// Build from a configured quota; 0 means no limiter.
    pub fn from_per_minute(checks_per_minute: u32) -> Option<Self> {
        NonZeroU32::new(checks_per_minute).map(Self::new)
    }

    /// Create a permissive rate limiter for testing.
    pub fn permissive() -> Self {
        Self::new(NonZeroU32::MAX)
    }

    /// Take one cell, or report how long until the next one frees up.
    pub fn try_acquire(&self) -> Result<(), Duration> {
        self.limiter
            .check()
            .map_err(|not_until| not_until.wait_time_from(self.clock.now()))
    }
}

/// Reject checks once the quota is spent, before the provider is contacted.
pub async fn rate_limit_middleware(
    State(rate_limit): State<RateLimitState>,
    request: Request,
    next: Next,
) -> Result<Response, ServiceError> {
    if let Err(retry_after) = rate_limit.try_acquire() {
        warn!(path = %request.uri().path(), ?retry_after, "Email check quota spent");
        return Err(ServiceError::RateLimited { retry_after });
    }

    Ok(next.run(request).await)
}
