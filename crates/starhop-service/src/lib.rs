//! HTTP front end for hop-count route lookups.
//!
//! # Endpoints
//!
//! - `GET /route?start=&destination=&jump_range=` - minimum-hop route
//! - `GET /health/live` - liveness check
//! - `GET /health/ready` - readiness check
//!
//! # Configuration
//!
//! See [`config::ServiceConfig::from_env`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod health;
pub mod logging;
pub mod middleware;
pub mod request;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use handlers::route_handler;
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use middleware::{extract_or_generate_request_id, propagate_request_id, RequestId};
pub use request::{RouteQuery, ValidRouteQuery};
pub use state::AppState;

use axum::{middleware::from_fn, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the service router over a loaded state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/route", get(route_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(from_fn(propagate_request_id))
        .with_state(state)
}
