use actix_cors::Cors;
use actix_multipart::form::MultipartFormConfig;
use actix_web::{middleware::Logger, web, App, HttpServer};

use mcqgen_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let upload_limit = config.max_upload_bytes;
    let state = AppState::new(config);

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(MultipartFormConfig::default().total_limit(upload_limit))
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .service(handlers::health)
            .service(handlers::generate_quiz)
            .service(handlers::grade_quiz)
    })
    .bind((host, port))?
    .run()
    .await
}
