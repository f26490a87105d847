use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};

use crate::{
    AppState,
    entities::movie,
    error::{ApiError, ApiResult},
    models::{ListQuery, NewMovie},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/movies", get(list).post(create))
        .route("/movies/{id}", get(get_by_id).patch(update).delete(delete))
        .with_state(state)
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewMovie>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<movie::Model>)> {
    let Json(body) = payload?;
    if state.store.name_taken(&body.name, None).await? {
        return Err(ApiError::NameExists);
    }
    let created = state.store.insert(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<movie::Model>>> {
    // an empty category means no filter, same as an absent one
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    let movies = state.store.list(category).await?;
    Ok(Json(movies))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<movie::Model>> {
    let id: i32 = id.parse().map_err(|_| ApiError::InvalidId)?;
    let movie = state.store.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(movie))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NewMovie>, JsonRejection>,
) -> ApiResult<Json<movie::Model>> {
    let id: i32 = id.parse().map_err(|_| ApiError::InvalidId)?;
    let Json(body) = payload?;
    if state.store.name_taken(&body.name, Some(id)).await? {
        return Err(ApiError::NameExists);
    }
    let updated = state.store.update(id, body).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id: i32 = id.parse().map_err(|_| ApiError::InvalidId)?;
    if state.store.delete(id).await? == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
