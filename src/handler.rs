use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::info;

use crate::api::{BOOK_ADDED, BOOK_DELETED, BOOK_UPDATED, BooksResponse, MessageResponse, message};
use crate::db::Database;
use crate::error::HandlerError;
use crate::model::{BookChanges, NewBook};
use crate::store::BookStore;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

type HandlerResult = Result<Response, HandlerError>;

fn json_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, HandlerError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| HandlerError::BadRequest(e.body_text()))
}

// `/books/abc` names no book, so a non-numeric id is a 404 rather than a 400.
fn book_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, HandlerError> {
    id.map(|Path(id)| id)
        .map_err(|e| HandlerError::InvalidId(e.body_text()))
}

pub async fn healthcheck() -> impl IntoResponse {
    info!("got healthcheck request");
    Json(MessageResponse::new("ok"))
}

pub async fn add_book(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> HandlerResult {
    let input = NewBook::try_from(json_body(payload)?)?;
    let store = BookStore::new(state.db.connection());

    let id = store.create(input).await?;
    info!(book_id = id, "added book");

    Ok(message(StatusCode::CREATED, BOOK_ADDED))
}

pub async fn get_books(State(state): State<AppState>) -> HandlerResult {
    let store = BookStore::new(state.db.connection());

    let books = store.list_all().await?;
    info!(count = books.len(), "got books");

    Ok((StatusCode::OK, Json(BooksResponse { books })).into_response())
}

pub async fn get_book(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> HandlerResult {
    let id = book_id(id)?;
    let store = BookStore::new(state.db.connection());

    let book = store.get(id).await?;
    info!(book_id = id, "got {}", book);

    Ok((StatusCode::OK, Json(book)).into_response())
}

pub async fn update_book(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> HandlerResult {
    let id = book_id(id)?;
    let changes = BookChanges::try_from(json_body(payload)?)?;
    let store = BookStore::new(state.db.connection());

    let book = store.update(id, changes).await?;
    info!(book_id = id, "updated {}", book);

    Ok(message(StatusCode::OK, BOOK_UPDATED))
}

pub async fn delete_book(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> HandlerResult {
    let id = book_id(id)?;
    let store = BookStore::new(state.db.connection());

    store.delete(id).await?;
    info!(book_id = id, "deleted book");

    Ok(message(StatusCode::OK, BOOK_DELETED))
}
