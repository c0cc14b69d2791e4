//! Trip Proxy - geolocation backend for the trip planner frontend
//!
//! Relays location lookups to OpenStreetMap Nominatim and Google Places,
//! one upstream call per request, and hosts the plan stub endpoint.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use config::Settings;
pub use error::ApiError;
pub use models::{UserProfile, TripConfig, SafetyToggles, PlanRequest, PlanResponse};
pub use routes::{AppState, configure_app};
pub use services::{GeoService, Endpoints, UpstreamQuery};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let settings = Settings::default();
        let geo = GeoService::new(&settings.upstream).unwrap();
        let query = geo.location_search_query("Rome");
        assert!(query.url().starts_with("https://nominatim.openstreetmap.org/search?q=Rome"));
    }
}
