mod dto;
pub mod handlers;
pub mod repo;
pub mod service;

use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_photos))
        .route("/upload", post(handlers::upload_photo))
        .route(
            "/:id",
            get(handlers::get_photo)
                .put(handlers::update_photo)
                .delete(handlers::delete_photo),
        )
        .layer(DefaultBodyLimit::max(20 * 1024 * 1024)) // 20MB
}
