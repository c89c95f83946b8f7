//! Movie records and the in-memory collection that holds them.

pub mod config;
pub mod error;
pub mod model;
pub mod store;

pub use config::ServiceConfig;
pub use error::{MovieError, Result};
pub use model::{seed_movies, Director, Movie, MoviePayload};
pub use store::MovieStore;
