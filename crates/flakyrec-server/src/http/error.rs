//! Single translation point from `RecordsError` to an HTTP response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use flakyrec_core::error::RecordsError;

/// Handler error. Responses carry no body.
#[derive(Debug)]
pub struct ApiError(pub RecordsError);

impl From<RecordsError> for ApiError {
    fn from(e: RecordsError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            RecordsError::StoreFault | RecordsError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            RecordsError::BadRequest(_) | RecordsError::UnsupportedVersion => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.0.client_code().as_str();
        if status.is_server_error() {
            tracing::error!(error = ?self.0, code, "store has failed us");
        } else {
            tracing::warn!(error = %self.0, code, "request rejected");
        }
        status.into_response()
    }
}
