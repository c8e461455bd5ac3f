// Library exports for binary tools and tests
pub mod config;
pub mod dataset;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;

use std::sync::Arc;

use sqlx::PgPool;

use config::Config;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<Config>,
}
