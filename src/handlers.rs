use crate::errors::AppError;
use crate::models::{CounterKind, CountsResponse, DateQuery, DayCount, IncrementResponse};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let today = state.today();
    state.store.ensure_row(&today).await?;
    let latest = state
        .store
        .latest()
        .await?
        .unwrap_or_else(|| DayCount::zeroed(today.clone()));

    Ok(Html(render_index(&today, &latest)))
}

pub async fn get_counts(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Result<Json<CountsResponse>, AppError> {
    let counts = state.store.lookup(query.date.as_deref()).await?;
    Ok(Json(counts))
}

pub async fn increment(
    State(state): State<AppState>,
    Path(counter): Path<String>,
    Query(query): Query<DateQuery>,
) -> Result<Json<IncrementResponse>, AppError> {
    let Ok(kind) = counter.parse::<CounterKind>() else {
        return Err(AppError::bad_request("Invalid type"));
    };
    let Some(date) = query.date.filter(|date| !date.trim().is_empty()) else {
        return Err(AppError::bad_request("Missing date"));
    };

    state.store.ensure_row(&date).await?;
    let count = state.store.increment(&date, kind).await?;
    info!(date = %date, counter = %kind, count, "incremented");

    Ok(Json(IncrementResponse { count }))
}
