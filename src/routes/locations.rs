use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::error::ApiError;
use crate::models::LocationSearchQuery;
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/locations/search", web::get().to(search_locations));
}

/// Location autocomplete
///
/// GET /api/locations/search?q={text}
///
/// Relays Nominatim's match array unchanged.
async fn search_locations(
    state: web::Data<AppState>,
    query: web::Query<LocationSearchQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    tracing::info!("Searching locations for query of {} chars", query.q.chars().count());

    let results = state.geo.search_locations(&query.q).await?;

    Ok(HttpResponse::Ok().json(results))
}
