use crate::config::UpstreamSettings;
use crate::services::upstream::{UpstreamClient, UpstreamError, UpstreamQuery, UpstreamTarget};
use serde_json::Value;
use thiserror::Error;

pub const NOMINATIM_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const PLACES_TEXTSEARCH_URL: &str = "https://maps.googleapis.com/maps/api/place/textsearch/json";
pub const PLACES_DETAILS_URL: &str = "https://maps.googleapis.com/maps/api/place/details/json";

/// Maximum number of Nominatim matches requested
pub const NOMINATIM_RESULT_LIMIT: u8 = 5;
/// Nominatim feature types kept in location search results
pub const NOMINATIM_FEATURE_TYPES: &str = "city,country";
pub const NOMINATIM_LANGUAGE: &str = "en";

/// Errors surfaced by the geolocation proxy operations
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("Google Places API key is not configured (set GOOGLE_PLACES_API_KEY)")]
    MissingApiKey,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Upstream endpoint URLs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub nominatim_search: String,
    pub places_textsearch: String,
    pub places_details: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            nominatim_search: NOMINATIM_SEARCH_URL.to_string(),
            places_textsearch: PLACES_TEXTSEARCH_URL.to_string(),
            places_details: PLACES_DETAILS_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Same paths as production, rooted at another host (mock servers in tests)
    pub fn with_base(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            nominatim_search: format!("{}/search", base),
            places_textsearch: format!("{}/maps/api/place/textsearch/json", base),
            places_details: format!("{}/maps/api/place/details/json", base),
        }
    }
}

/// Geolocation proxy
///
/// Turns each inbound lookup into exactly one upstream GET:
/// - location search against Nominatim
/// - text search against Google Places
/// - place details against Google Places
pub struct GeoService {
    upstream: UpstreamClient,
    endpoints: Endpoints,
    api_key: Option<String>,
    user_agent: String,
}

impl GeoService {
    pub fn new(settings: &UpstreamSettings) -> Result<Self, UpstreamError> {
        Self::with_endpoints(settings, Endpoints::default())
    }

    pub fn with_endpoints(settings: &UpstreamSettings, endpoints: Endpoints) -> Result<Self, UpstreamError> {
        Ok(Self {
            upstream: UpstreamClient::new(settings.timeout_secs)?,
            endpoints,
            api_key: settings.places_api_key().map(str::to_string),
            user_agent: settings.user_agent.clone(),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str, GeoError> {
        self.api_key.as_deref().ok_or(GeoError::MissingApiKey)
    }

    /// Build the Nominatim search query for `q`
    ///
    /// Nominatim's usage policy rejects requests without an identifying User-Agent.
    pub fn location_search_query(&self, q: &str) -> UpstreamQuery {
        UpstreamQuery::new(UpstreamTarget::NominatimSearch, self.endpoints.nominatim_search.as_str())
            .param("q", q)
            .param("format", "json")
            .param("limit", NOMINATIM_RESULT_LIMIT.to_string())
            .param("featuretype", NOMINATIM_FEATURE_TYPES)
            .param("accept-language", NOMINATIM_LANGUAGE)
            .header("User-Agent", self.user_agent.as_str())
    }

    pub fn text_search_query(&self, query: &str) -> Result<UpstreamQuery, GeoError> {
        let key = self.api_key()?;

        Ok(UpstreamQuery::new(UpstreamTarget::PlacesTextSearch, self.endpoints.places_textsearch.as_str())
            .param("query", query)
            .param("key", key))
    }

    pub fn details_query(&self, place_id: &str, fields: &str) -> Result<UpstreamQuery, GeoError> {
        let key = self.api_key()?;

        Ok(UpstreamQuery::new(UpstreamTarget::PlacesDetails, self.endpoints.places_details.as_str())
            .param("place_id", place_id)
            .param("fields", fields)
            .param("key", key))
    }

    /// Search cities and countries by free text; returns Nominatim's JSON array
    pub async fn search_locations(&self, q: &str) -> Result<Value, GeoError> {
        let query = self.location_search_query(q);
        self.relay(&query).await
    }

    /// Google Places text search; returns the upstream JSON object
    pub async fn places_textsearch(&self, query: &str) -> Result<Value, GeoError> {
        let query = self.text_search_query(query)?;
        self.relay(&query).await
    }

    /// Google Places details for one place; returns the upstream JSON object
    pub async fn places_details(&self, place_id: &str, fields: &str) -> Result<Value, GeoError> {
        let query = self.details_query(place_id, fields)?;
        self.relay(&query).await
    }

    async fn relay(&self, query: &UpstreamQuery) -> Result<Value, GeoError> {
        match self.upstream.fetch(query).await {
            Ok(json) => Ok(json),
            Err(e) => {
                tracing::error!("Upstream {} failed: {}", query.target, e);
                Err(e.into())
            }
        }
    }
}
