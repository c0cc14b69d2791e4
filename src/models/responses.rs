use serde::{Deserialize, Serialize};

pub const PLAN_SUCCESS_MESSAGE: &str = "Plan generated successfully";

/// Acknowledgment returned by the plan stub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResponse {
    pub message: String,
}

impl PlanResponse {
    pub fn success() -> Self {
        Self {
            message: PLAN_SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
