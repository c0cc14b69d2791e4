use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware};
use trip_proxy::config::{self, LoggingSettings, Settings};
use trip_proxy::routes::{self, AppState};
use trip_proxy::services::GeoService;
use std::sync::Arc;
use tracing::{info, warn, error};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber; `RUST_LOG` takes precedence over the configured level
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.compact().init(),
    }
}

fn load_settings() -> Result<Settings, ::config::ConfigError> {
    match std::env::var("TRIP_PROXY_CONFIG") {
        Ok(path) => Settings::load_from(path),
        Err(_) => Settings::load(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    init_logging(&settings.logging);

    info!("Starting trip proxy...");
    info!("Configuration loaded: {:?}", settings.upstream);

    let geo = GeoService::new(&settings.upstream).map_err(|e| {
        error!("Failed to create upstream HTTP client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    if !geo.has_api_key() {
        warn!(
            "{} is not set; /api/places endpoints will answer 500",
            config::GOOGLE_PLACES_API_KEY_VAR
        );
    }

    let app_state = AppState {
        geo: Arc::new(geo),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{} ({} workers)", host, port, workers);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(|cfg| routes::configure_app(cfg, app_state.clone()))
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
