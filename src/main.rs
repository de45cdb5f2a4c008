use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

use notes_backend::{config, configure_app, db::Database, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let db_path = config::database_url();
    let db = match Database::open(&db_path) {
        Ok(db) => db,
        Err(e) => {
            log::error!("Failed to open database at {}: {}", db_path, e);
            std::process::exit(1);
        }
    };

    let state = web::Data::new(AppState { db: Arc::new(db) });

    let port = config::port();
    log::info!("Starting notes backend on port {}", port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(configure_app)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
