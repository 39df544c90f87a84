use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware::Logger, web, App, HttpServer};

use config::Config;
use repository::{postgres, PgNoteRepository};
use services::NoteService;

mod config;
mod errors;
mod handlers;
mod models;
mod repository;
mod schema;
mod services;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().expect("failed to read configuration from env");
    let pool = postgres::build_pool(&config.database_url, config.pool_size)
        .expect("failed to create a pg pool");
    postgres::run_migrations(&pool).expect("failed to run migrations");

    let service = web::Data::new(NoteService::new(Arc::new(PgNoteRepository::new(pool))));
    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(config.rate_limit_replenish_ms)
        .burst_size(config.rate_limit_burst)
        .finish()
        .expect("RATE_LIMIT_REPLENISH_MS and RATE_LIMIT_BURST must be positive");

    log::info!("listening on {}", config.bind_address());

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Governor::new(&governor_conf))
            .wrap(Logger::default())
            .configure(handlers::config)
    })
    .bind(config.bind_address())?
    .run()
    .await
}
