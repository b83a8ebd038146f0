use crate::errors::AppError;
use crate::models::{GroupRequest, GroupResponse, StatsResponse, ToggleResponse, ViewResponse};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Json,
};
use chrono::Local;
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = today_string();
    let view = state.view.lock().await;
    Html(render_index(&date, &view.today_stats()))
}

pub async fn get_view(State(state): State<AppState>) -> Json<ViewResponse> {
    let view = state.view.lock().await;
    Json(view.snapshot(today_string()))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let view = state.view.lock().await;
    Json(view.stats())
}

pub async fn toggle(State(state): State<AppState>, Path(id): Path<u32>) -> Json<ToggleResponse> {
    Json(apply_toggle(&state, id).await)
}

pub async fn toggle_form(State(state): State<AppState>, Path(id): Path<u32>) -> Redirect {
    apply_toggle(&state, id).await;
    Redirect::to("/")
}

pub async fn select_group(
    State(state): State<AppState>,
    Json(payload): Json<GroupRequest>,
) -> Result<Json<GroupResponse>, AppError> {
    let group = payload.group.trim();
    if group.is_empty() {
        return Err(AppError::bad_request("group must not be empty"));
    }

    let mut view = state.view.lock().await;
    if let Some(ticket) = view.select_group(group)? {
        info!(group, "group changed, refreshing schedule");
        state.spawn_fetch(ticket);
    }

    Ok(Json(GroupResponse {
        selected_group: view.selected_group().to_string(),
        loading: view.is_loading(),
    }))
}

async fn apply_toggle(state: &AppState, id: u32) -> ToggleResponse {
    let mut view = state.view.lock().await;
    let lecture = view.toggle(id).cloned();
    ToggleResponse {
        lecture,
        stats: view.today_stats(),
    }
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
