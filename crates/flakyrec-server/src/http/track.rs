//! Response counting middleware.

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

/// Count responses per matched route and status code.
pub async fn track_responses(
    State(state): State<AppState>,
    matched: MatchedPath,
    req: Request,
    next: Next,
) -> Response {
    let resp = next.run(req).await;
    let status = resp.status();
    state
        .metrics()
        .http_responses
        .inc(&[("route", matched.as_str()), ("status", status.as_str())]);
    resp
}
