use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use founder_match::config::{LogFormat, Settings};
use founder_match::core::Matcher;
use founder_match::routes::{self, matches::AppState};
use founder_match::services::{Catalog, CatalogError, ProfileStore};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

/// Fatal conditions while bringing the service up
#[derive(Debug, Error)]
enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

/// RUST_LOG wins over the configured level; LOG_FORMAT overrides the
/// configured format.
fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    let log_format = std::env::var("LOG_FORMAT")
        .map(|value| LogFormat::parse(&value))
        .unwrap_or_else(|_| settings.logging.log_format());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
    }
}

#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load()?;
    init_logging(&settings);

    info!("Starting Founder Match service...");

    let catalog = Catalog::load(
        settings.catalog.grants_path.as_deref(),
        settings.catalog.investors_path.as_deref(),
    )
    .await
    .map_err(|e| {
        error!("Failed to load catalog: {}", e);
        e
    })?;

    let profiles = ProfileStore::new(settings.profiles.capacity, settings.profiles.ttl_secs);
    info!(
        "Profile store initialized (capacity: {}, TTL: {}s)",
        settings.profiles.capacity, settings.profiles.ttl_secs
    );

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    let app_state = AppState {
        catalog: Arc::new(catalog),
        profiles,
        matcher: Matcher::new(),
        settings: Arc::new(settings),
    };

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}
