use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use movie_core::{Movie, MoviePayload};

use crate::error::ApiError;
use crate::state::AppState;

pub fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/{id}",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
}

async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = state.store.list().map_err(ApiError::for_collection)?;
    tracing::debug!(count = movies.len(), "Listing movies");
    Ok(Json(movies))
}

async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    match state.store.get(&id) {
        Ok(movie) => Ok(Json(movie)),
        Err(err) => {
            tracing::debug!(id = %id, error = %err, "Movie lookup failed");
            Err(err.into())
        }
    }
}

/// Bodies are decoded whatever their `Content-Type`.
async fn create_movie(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let payload = MoviePayload::from_json(&body)?;
    let movie = state.store.create(payload);
    Ok((StatusCode::CREATED, Json(movie)))
}

/// Responds with the whole collection, not just the updated record.
async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = state.store.update(&id, || MoviePayload::from_json(&body))?;
    Ok(Json(movies))
}

/// Unlike get and update, an unknown id is not a 404 here: the unchanged
/// collection is returned with 200.
async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = state.store.delete(&id).map_err(ApiError::for_collection)?;
    Ok(Json(movies))
}
