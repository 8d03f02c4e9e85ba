use axum::{
    Router,
    http::Method,
    routing::get,
};
use std::error::Error;
use tower_http::cors::{Any, CorsLayer};

use crate::handler::{AppState, add_book, delete_book, get_book, get_books, healthcheck, update_book};

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod handler;
pub mod model;
pub mod store;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .route("/", get(healthcheck))
        .route("/books", get(get_books).post(add_book))
        .route("/books/:id", get(get_book).put(update_book).delete(delete_book))
        .layer(cors)
        .with_state(state)
}

pub fn unpack_error(err: &(dyn Error)) -> String {
    let mut parts = Vec::new();
    parts.push(err.to_string());
    let mut current = err.source();
    while let Some(source) = current {
        parts.push(source.to_string());
        current = source.source();
    }
    parts.join(": ")
}
