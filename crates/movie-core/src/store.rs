//! The process-wide movie collection.
//!
//! Records are kept in insertion order, which is also the only iteration
//! order. Lookups scan front to back and act on the first id match.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::error::{MovieError, Result};
use crate::model::{seed_movies, Movie, MoviePayload};

/// Cloneable handle to a shared, ordered movie collection.
#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    inner: Arc<RwLock<Vec<Movie>>>,
}

impl MovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the two startup records.
    pub fn seeded() -> Self {
        Self::from_movies(seed_movies())
    }

    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self { inner: Arc::new(RwLock::new(movies)) }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Movie>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Movie>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// All movies in insertion order.
    pub fn list(&self) -> Result<Vec<Movie>> {
        let movies = self.read();
        if movies.is_empty() {
            return Err(MovieError::EmptyCollection);
        }
        Ok(movies.clone())
    }

    pub fn get(&self, id: &str) -> Result<Movie> {
        let movies = self.read();
        if movies.is_empty() {
            return Err(MovieError::EmptyCollection);
        }
        movies
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| MovieError::NotFound { id: id.to_string() })
    }

    /// Append a new movie built from `payload`.
    ///
    /// A fresh UUID is assigned first; an `id` carried by the payload
    /// replaces it. Ids supplied by clients are not checked for uniqueness.
    pub fn create(&self, payload: MoviePayload) -> Movie {
        let movie = payload.into_movie_with_default_id(Uuid::new_v4().to_string());
        self.write().push(movie.clone());
        tracing::info!(id = %movie.id, title = %movie.title, "Movie created");
        movie
    }

    /// Replace the movie with `id` in place and return the whole collection.
    ///
    /// `decode` runs only once the slot is found, so an empty store or an
    /// unknown id is reported before the payload is looked at. The stored
    /// record always keeps `id`, whatever the payload says.
    pub fn update<F>(&self, id: &str, decode: F) -> Result<Vec<Movie>>
    where
        F: FnOnce() -> Result<MoviePayload>,
    {
        let mut movies = self.write();
        if movies.is_empty() {
            return Err(MovieError::EmptyCollection);
        }
        let slot = movies
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| MovieError::NotFound { id: id.to_string() })?;
        *slot = decode()?.into_movie_with_id(id);
        tracing::info!(id = %id, "Movie updated");
        Ok(movies.clone())
    }

    /// Remove the first movie with `id` and return what remains.
    ///
    /// An id with no match is not an error: the collection comes back
    /// unchanged. Only an empty store is rejected.
    pub fn delete(&self, id: &str) -> Result<Vec<Movie>> {
        let mut movies = self.write();
        if movies.is_empty() {
            return Err(MovieError::EmptyCollection);
        }
        match movies.iter().position(|m| m.id == id) {
            Some(index) => {
                movies.remove(index);
                tracing::info!(id = %id, remaining = movies.len(), "Movie deleted");
            }
            None => tracing::debug!(id = %id, "Delete matched no movie"),
        }
        Ok(movies.clone())
    }
}
