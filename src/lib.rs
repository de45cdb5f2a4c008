pub mod auth;
pub mod config;
pub mod controllers;
pub mod db;
pub mod forms;
pub mod models;
pub mod pages;

use std::sync::Arc;

use actix_web::web;

use db::Database;

/// Shared application state handed to every handler.
pub struct AppState {
    pub db: Arc<Database>,
}

/// Register every controller's routes on an actix `App`.
///
/// Kept separate from `main` so integration tests can build the same
/// application against a scratch database.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    controllers::health::config_routes(cfg);
    controllers::users::config(cfg);
    controllers::notes::config(cfg);
}
