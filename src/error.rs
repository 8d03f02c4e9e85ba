use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::error_response;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("NotFound: book {0}")]
    NotFound(i32),
    #[error("DatabaseError")]
    Database(#[from] libsql::Error),
    #[error("MalformedRow: {0}")]
    MalformedRow(String),
}

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("BadRequest: {0}")]
    BadRequest(String),
    #[error("InvalidId: {0}")]
    InvalidId(String),
    #[error("StoreError")]
    Store(#[from] StoreError),
}

impl HandlerError {
    pub fn status(&self) -> StatusCode {
        match self {
            HandlerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HandlerError::InvalidId(_) => StatusCode::NOT_FOUND,
            HandlerError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            HandlerError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match &self {
            HandlerError::BadRequest(msg) => msg.clone(),
            HandlerError::InvalidId(_) | HandlerError::Store(StoreError::NotFound(_)) => {
                "Book not found".to_string()
            }
            HandlerError::Store(_) => "Internal server error".to_string(),
        };

        if status.is_server_error() {
            tracing::error!(error = %crate::unpack_error(&self), "request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "request rejected");
        }

        error_response(status, &msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        assert_eq!(HandlerError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            HandlerError::from(StoreError::NotFound(7)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(HandlerError::InvalidId("abc".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            HandlerError::from(StoreError::MalformedRow("id".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn unpacks_nested_store_error() {
        let err = HandlerError::from(StoreError::MalformedRow("missing id".into()));
        assert_eq!(crate::unpack_error(&err), "StoreError: MalformedRow: missing id");
    }
}
