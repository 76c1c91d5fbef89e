//! Book Store server
//!
//! A small REST JSON API over an in-memory catalog of books: list, look up,
//! create, update and check out copies.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the repository and services described by `config`
    pub fn new(config: AppConfig) -> Self {
        let repository = repository::Repository::new(&config.catalog);
        let services = services::Services::new(repository);

        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
