//! App route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use homedash_core::app::{
    self,
    model::{App, AppUpdate, NewApp},
};
use homedash_core::envelope::{ApiResponse, Empty};
use homedash_core::push::PushMessage;

use crate::error::ApiError;
use crate::state::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// GET /api/apps
pub async fn list_apps(State(state): State<AppState>) -> ApiResult<Vec<App>> {
    let apps = state.db_call(|db| app::list_apps(db)).await?;
    Ok(Json(ApiResponse::new(apps)))
}

/// GET /api/apps/{id}
pub async fn get_app(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<App> {
    let app = state.db_call(move |db| app::get_app(db, id)).await?;
    Ok(Json(ApiResponse::new(app)))
}

/// POST /api/apps
pub async fn create_app(
    State(state): State<AppState>,
    Json(req): Json<NewApp>,
) -> Result<(StatusCode, Json<ApiResponse<App>>), ApiError> {
    let app = state.db_call(move |db| app::create_app(db, req)).await?;

    state.broadcast(PushMessage::AppCreated { id: app.id });

    Ok((StatusCode::CREATED, Json(ApiResponse::new(app))))
}

/// PUT /api/apps/{id}
///
/// Accepts any subset of the editable fields; `{ "isPinned": bool }` alone pins or unpins.
pub async fn update_app(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<AppUpdate>,
) -> ApiResult<App> {
    let app = state
        .db_call(move |db| app::update_app(db, id, &req))
        .await?;

    state.broadcast(PushMessage::AppUpdated { id });

    Ok(Json(ApiResponse::new(app)))
}

/// POST /api/apps/{id}/pin
pub async fn toggle_pin(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<App> {
    let app = state.db_call(move |db| app::toggle_pin(db, id)).await?;

    state.broadcast(PushMessage::AppUpdated { id });

    Ok(Json(ApiResponse::new(app)))
}

/// DELETE /api/apps/{id}
pub async fn delete_app(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Empty> {
    state.db_call(move |db| app::delete_app(db, id)).await?;

    state.broadcast(PushMessage::AppDeleted { id });

    Ok(Json(ApiResponse::new(Empty {})))
}
