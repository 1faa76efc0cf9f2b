mod dto;
pub mod handlers;
pub mod repo;

use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::login))
        .route("/add", post(handlers::add_admin))
        .route("/photos", get(handlers::list_photos))
        .route("/users", get(handlers::list_users))
        .route("/contact", get(handlers::list_contacts))
        .route("/approve/:id", put(handlers::approve_photo))
        .route("/reject/:id", put(handlers::reject_photo))
        .route("/best/:id", put(handlers::best_photo))
        .route("/delete/:id", delete(handlers::delete_photo))
        .route("/change-password", put(handlers::change_password))
}
