// Route exports
pub mod health;
pub mod locations;
pub mod places;
pub mod plan;

use actix_web::web;
use crate::error::{handle_json_payload_error, handle_query_payload_error};
use crate::services::GeoService;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub geo: Arc<GeoService>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure).service(
        web::scope("/api")
            .configure(plan::configure)
            .configure(locations::configure)
            .configure(places::configure),
    );
}

/// Register state, extractor error handlers and routes
pub fn configure_app(cfg: &mut web::ServiceConfig, state: AppState) {
    cfg.app_data(web::Data::new(state))
        .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
        .configure(configure_routes);
}
