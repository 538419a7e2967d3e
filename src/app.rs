use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/habits", post(handlers::create_habit))
        .route("/api/habits/mine", get(handlers::list_mine))
        .route("/api/habits/public", get(handlers::list_public))
        .route(
            "/api/habits/:id",
            get(handlers::get_habit)
                .put(handlers::update_habit)
                .delete(handlers::delete_habit),
        )
        .route("/api/habits/:id/complete", post(handlers::complete_habit))
        .route("/api/habits/:id/stats", get(handlers::habit_stats))
        .with_state(state)
}
