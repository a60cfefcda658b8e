//! `GET /route` handler.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use starhop_lib::RouteOutcome;
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::middleware::RequestId;
use crate::request::RouteQuery;
use crate::state::AppState;

/// Compute a minimum-hop route.
///
/// Responds `200 {"route": [...]}` on success. Unknown systems and
/// unreachable destinations answer `200 {"error": "..."}`; invalid input,
/// faults, and timeouts use 400, 500, and 503.
pub async fn route_handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<RouteQuery>,
) -> Response {
    let query = match query.validate() {
        Ok(query) => query,
        Err(problem) => {
            warn!(request_id = %request_id, error = %problem.message, "rejected route request");
            return problem.into_response();
        }
    };

    info!(
        request_id = %request_id,
        start = %query.start,
        destination = %query.destination,
        jump_range_ly = query.jump_range_ly,
        "handling route request"
    );

    let navigator = state.navigator_arc();
    let task = tokio::task::spawn_blocking(move || {
        navigator.calculate_route(&query.start, &query.destination, query.jump_range_ly)
    });

    let joined = match state.query_timeout() {
        Some(limit) => match tokio::time::timeout(limit, task).await {
            Ok(joined) => joined,
            Err(_) => {
                warn!(
                    request_id = %request_id,
                    timeout_ms = limit.as_millis() as u64,
                    "route calculation timed out"
                );
                return ApiError::timed_out().into_response();
            }
        },
        None => task.await,
    };

    let result = match joined {
        Ok(result) => result,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "route worker failed");
            return ApiError::internal().into_response();
        }
    };

    match result {
        Ok(route) => {
            info!(
                request_id = %request_id,
                hops = route.hop_count(),
                "route computed successfully"
            );
            (StatusCode::OK, Json(RouteOutcome::from(route))).into_response()
        }
        Err(e) => {
            let problem = ApiError::from(&e);
            if problem.status.is_server_error() {
                error!(request_id = %request_id, error = %e, "route calculation failed");
            } else {
                info!(request_id = %request_id, error = %e, "route not available");
            }
            problem.into_response()
        }
    }
}
