use crate::feed;
use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/lectures/:id/toggle", post(handlers::toggle_form))
        .route("/api/view", get(handlers::get_view))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/lectures/:id/toggle", post(handlers::toggle))
        .route("/api/group", post(handlers::select_group))
        .route("/api/feed/schedule", get(feed::schedule_feed))
        .with_state(state)
}
