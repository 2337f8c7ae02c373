use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quizforge_server::{app_state::AppState, config::Config, handlers::quiz_handler};

// PDF uploads exceed actix's default 256 KiB payload cap.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = Arc::new(AppState::new(config));

    println!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::PayloadConfig::new(MAX_UPLOAD_BYTES))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(quiz_handler::generate_quiz_from_pdf)
            .service(quiz_handler::generate_quiz_from_text)
            .service(quiz_handler::health_check)
            .service(quiz_handler::health_check_live)
    })
    .bind((host, port))?
    .run()
    .await
}
