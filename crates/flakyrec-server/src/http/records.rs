//! Record endpoints.
//!
//! - `GET /records/:id`
//! - `POST /records` (plain-text body = name)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use flakyrec_core::error::RecordsError;
use flakyrec_core::record::Record;

use crate::app_state::AppState;
use crate::http::ApiError;
use crate::store::RecordRepository;

/// Look a record up by id.
///
/// The lookup runs on its own task so an injected delay completes even if
/// the client goes away. A hit answers with the requested id and a freshly
/// generated name, not the stored one.
pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    tracing::debug!(id = %id, "request for record");

    let store = state.store();
    let lookup_id = id.clone();
    let found = tokio::spawn(async move { store.find_by_id(&lookup_id).await })
        .await
        .map_err(|e| RecordsError::Internal(format!("lookup task failed: {e}")))??;

    match found {
        Some(_) => Ok(Json(Record::new(id, Uuid::new_v4().to_string())).into_response()),
        None => {
            tracing::warn!(id = %id, "record not found");
            Ok(StatusCode::NOT_FOUND.into_response())
        }
    }
}

/// Create a record named after the raw request body. The body is required.
pub async fn save_record(
    State(state): State<AppState>,
    name: String,
) -> Result<Json<Record>, ApiError> {
    if name.is_empty() {
        return Err(RecordsError::BadRequest("record name body is required".into()).into());
    }
    let record = state.store().save(name).await?;
    tracing::debug!(id = %record.id, "record saved");
    Ok(Json(record))
}
