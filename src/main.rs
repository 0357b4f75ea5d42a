use std::io;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use kanban_api::{
    auth::AuthMiddleware,
    config::Config,
    db,
    routes::{self, health},
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| {
        log::error!("invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let pool = db::init_pool(&config.database_url).await.map_err(|e| {
        log::error!("failed to open database {}: {}", config.database_url, e);
        io::Error::new(io::ErrorKind::Other, e)
    })?;

    let pool = web::Data::new(pool);
    let auth_config = web::Data::new(config.auth.clone());

    log::info!("Starting kanban API at {}", config.server_url());

    HttpServer::new(move || {
        App::new()
            .app_data(pool.clone())
            .app_data(auth_config.clone())
            .app_data(routes::json_config())
            .wrap(AuthMiddleware)
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(health::health)
            .configure(routes::config)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
