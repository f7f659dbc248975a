use actix_web::{middleware, web, App, HttpServer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use testgen::handlers::health::health_check;
use testgen::services::{GeminiClient, GithubClient};
use testgen::{frontend_cors, handlers, AppState, Config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "testgen=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    info!("Starting testgen server on {}:{}", config.host, config.port);

    let github = GithubClient::new(&config).expect("Failed to build GitHub client");
    let gemini = GeminiClient::new(&config).expect("Failed to build Gemini client");

    let frontend_redirect_uri = config.frontend_redirect_uri.clone();
    let server_addr = format!("{}:{}", config.host, config.port);

    let app_state = web::Data::new(AppState {
        config,
        github,
        gemini,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(frontend_cors(&frontend_redirect_uri))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .route("/health", web::get().to(health_check))
            .configure(handlers::configure_auth_routes)
            .configure(handlers::configure_repo_routes)
            .configure(handlers::configure_generate_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
