use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use application::{MovieDto, UpdateOutcome};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json};
use tracing::info;
use validator::Validate;

pub async fn list_movies(State(state): State<AppState>) -> ApiResult<Json<Vec<MovieDto>>> {
    let movies = state.movie_app.movie_service.get_all().await?;
    Ok(Json(movies))
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<MovieDto>> {
    state
        .movie_app
        .movie_service
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Movie {} not found", id)))
}

pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<MovieDto>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(payload) = payload?;
    payload.validate()?;

    let created = state.movie_app.movie_service.create(payload).await?;
    info!("🎬 Created movie {} ({})", created.id, created.title);

    let location = format!("/api/v1/movies/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<MovieDto>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(payload) = payload?;
    if id != payload.id {
        return Err(ApiError::BadRequest(
            "Body id does not match the id in the URL".to_string(),
        ));
    }
    payload.validate()?;

    match state.movie_app.movie_service.update(payload).await? {
        UpdateOutcome::Updated => Ok(StatusCode::NO_CONTENT),
        UpdateOutcome::NotFound => Err(ApiError::NotFound(format!(
            "Movie {} not found. It may have been removed by another user.",
            id
        ))),
    }
}

pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    let service = &state.movie_app.movie_service;

    if !service.exists(id).await? || !service.delete(id).await? {
        return Err(ApiError::NotFound(format!("Movie {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
