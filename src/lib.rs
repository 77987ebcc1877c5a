//! Locadora Equipment Rental Server
//!
//! REST JSON API and a few server-rendered pages for an equipment rental
//! business: equipment, stock, customers, rentals and maintenance, stored
//! in PostgreSQL.

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
    pub services: Arc<services::Services>,
}
