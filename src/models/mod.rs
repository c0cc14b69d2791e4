// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{UserProfile, SafetyToggles, TripConfig};
pub use requests::{PlanRequest, LocationSearchQuery, TextSearchQuery, PlaceDetailsQuery};
pub use responses::{PlanResponse, HealthResponse, ErrorResponse, PLAN_SUCCESS_MESSAGE};
