use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{self, AppState};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/login", post(handlers::login))
        .route("/sheets", get(handlers::read_sheets))
}
