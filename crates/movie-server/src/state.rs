//! Application state shared across all handlers.

use movie_core::{MovieStore, ServiceConfig};

#[derive(Clone)]
pub struct AppState {
    pub store: MovieStore,
}

impl AppState {
    /// State over the two seed movies.
    pub fn new() -> Self {
        Self::with_store(MovieStore::seeded())
    }

    pub fn with_store(store: MovieStore) -> Self {
        Self { store }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        if config.store.seed {
            Self::new()
        } else {
            Self::with_store(MovieStore::new())
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
