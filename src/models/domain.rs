use serde::{Deserialize, Serialize};

/// Traveller profile sent by the frontend
///
/// Relayed as-is; the proxy never interprets these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub chronotype: String,
    pub pace: i64,
    pub interests: Vec<String>,
    pub food_scale: f64,
    pub food_tags: Vec<String>,
    pub budget: String,
}

/// Frontend-side safety switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyToggles {
    pub filter_shredder: bool,
    pub bb_guard: bool,
    pub no_queue_mode: bool,
}

/// Trip parameters chosen by the traveller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripConfig {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub passengers: i64,
    pub safety_toggles: SafetyToggles,
    pub accommodation: String,
    pub transport: String,
    pub custom_note: String,
}
