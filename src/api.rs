use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::HandlerError;
use crate::model::{Book, BookChanges, NewBook};

pub const BOOK_ADDED: &str = "Book added successfully!";
pub const BOOK_UPDATED: &str = "Book updated successfully!";
pub const BOOK_DELETED: &str = "Book deleted successfully!";

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(msg: &str) -> Self {
        MessageResponse {
            message: msg.to_owned(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BooksResponse {
    pub books: Vec<Book>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn message(status: StatusCode, msg: &str) -> Response {
    (status, Json(MessageResponse::new(msg))).into_response()
}

pub fn error_response(status: StatusCode, msg: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
        .into_response()
}

#[derive(Debug, Deserialize)]
struct CreateBook {
    book_name: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    publisher: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateBook {
    #[serde(default)]
    book_name: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    publisher: Option<String>,
}

/// Rejects anything that is not a non-empty JSON object.
fn require_object(body: &Value) -> Result<(), HandlerError> {
    match body.as_object() {
        Some(obj) if !obj.is_empty() => Ok(()),
        Some(_) => Err(HandlerError::BadRequest("request body is empty".into())),
        None => Err(HandlerError::BadRequest("request body must be a JSON object".into())),
    }
}

impl TryFrom<Value> for NewBook {
    type Error = HandlerError;

    fn try_from(body: Value) -> Result<Self, Self::Error> {
        require_object(&body)?;
        let input: CreateBook = serde_json::from_value(body)
            .map_err(|e| HandlerError::BadRequest(format!("invalid book payload: {e}")))?;

        let book_name = match input.book_name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(HandlerError::BadRequest("book_name is required".into())),
        };

        Ok(NewBook {
            book_name,
            author: input.author.unwrap_or_default(),
            publisher: input.publisher.unwrap_or_default(),
        })
    }
}

impl TryFrom<Value> for BookChanges {
    type Error = HandlerError;

    fn try_from(body: Value) -> Result<Self, Self::Error> {
        require_object(&body)?;
        let input: UpdateBook = serde_json::from_value(body)
            .map_err(|e| HandlerError::BadRequest(format!("invalid book payload: {e}")))?;

        Ok(BookChanges {
            book_name: input.book_name,
            author: input.author,
            publisher: input.publisher,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_book_requires_book_name() {
        let err = NewBook::try_from(json!({"author": "Herbert"})).unwrap_err();
        assert!(matches!(err, HandlerError::BadRequest(_)));

        let err = NewBook::try_from(json!({"book_name": ""})).unwrap_err();
        assert!(matches!(err, HandlerError::BadRequest(_)));
    }

    #[test]
    fn new_book_defaults_missing_author_and_publisher() {
        let book = NewBook::try_from(json!({"book_name": "Dune"})).unwrap();
        assert_eq!(book.book_name, "Dune");
        assert_eq!(book.author, "");
        assert_eq!(book.publisher, "");
    }

    #[test]
    fn new_book_rejects_non_string_fields() {
        let err = NewBook::try_from(json!({"book_name": 42})).unwrap_err();
        assert!(matches!(err, HandlerError::BadRequest(_)));
    }

    #[test]
    fn changes_reject_empty_and_non_object_bodies() {
        assert!(BookChanges::try_from(json!({})).is_err());
        assert!(BookChanges::try_from(json!(["publisher"])).is_err());
        assert!(BookChanges::try_from(json!("Ace")).is_err());
    }

    #[test]
    fn changes_keep_only_present_fields() {
        let changes = BookChanges::try_from(json!({"publisher": "Ace", "extra": true})).unwrap();
        assert_eq!(changes.publisher.as_deref(), Some("Ace"));
        assert!(changes.book_name.is_none());
        assert!(changes.author.is_none());
    }
}
