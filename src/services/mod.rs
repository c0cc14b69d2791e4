// Service exports
pub mod geo;
pub mod upstream;

pub use geo::{GeoService, GeoError, Endpoints};
pub use upstream::{UpstreamClient, UpstreamError, UpstreamQuery, UpstreamTarget};
