use std::env;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use catalog_api::db::establish_connection_pool;
use catalog_api::errors::json_error_handler;
use catalog_api::repository::DieselRepository;
use catalog_api::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("catalog.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    // The pool must be up before the server starts listening.
    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    log::info!("listening on {address}:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .configure(routes::configure)
            .default_service(web::route().to(routes::not_found))
    })
    .bind((address, port))?
    .run()
    .await
}
