//! HTTP API for the email check service.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::{rate_limit_middleware, RateLimitState};
pub use types::*;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use gxlu_client::GxluClient;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Registration probe, shared by every request
    pub probe: Arc<GxluClient>,
}

impl AppState {
    /// Create new application state.
    pub fn new(probe: GxluClient) -> Self {
        Self {
            probe: Arc::new(probe),
        }
    }
}

/// Create the API router without rate limiting.
pub fn create_router(state: AppState) -> Router {
    build_router(state, None)
}

/// Create the API router with a global rate limit on email checks.
pub fn create_router_with_rate_limit(state: AppState, rate_limit: RateLimitState) -> Router {
    build_router(state, Some(rate_limit))
}

fn build_router(state: AppState, rate_limit: Option<RateLimitState>) -> Router {
    let mut checks = Router::new().route("/check-email", post(handlers::check_email));

    if let Some(rate_limit) = rate_limit {
        checks = checks.route_layer(axum_middleware::from_fn_with_state(
            rate_limit,
            rate_limit_middleware,
        ));
    }

    Router::new()
        // Health check (never rate limited)
        .route("/health", get(handlers::health))
        .merge(checks)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
