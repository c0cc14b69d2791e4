use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::error::ApiError;
use crate::models::{PlaceDetailsQuery, TextSearchQuery};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/places/textsearch", web::get().to(places_textsearch))
        .route("/places/details", web::get().to(places_details));
}

/// GET /api/places/textsearch?query={text}
async fn places_textsearch(
    state: web::Data<AppState>,
    query: web::Query<TextSearchQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    let result = state.geo.places_textsearch(&query.query).await?;

    Ok(HttpResponse::Ok().json(result))
}

/// GET /api/places/details?place_id={id}&fields={a,b}
///
/// `fields` defaults to `opening_hours,name`.
async fn places_details(
    state: web::Data<AppState>,
    query: web::Query<PlaceDetailsQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    tracing::info!("Fetching place details for {} (fields: {})", query.place_id, query.fields);

    let result = state.geo.places_details(&query.place_id, &query.fields).await?;

    Ok(HttpResponse::Ok().json(result))
}
