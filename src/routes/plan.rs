use actix_web::{web, HttpResponse, Responder};
use crate::models::{PlanRequest, PlanResponse};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/plan", web::post().to(create_plan));
}

/// Plan stub endpoint
///
/// POST /api/plan
///
/// Request body:
/// ```json
/// {
///   "profile": { "chronotype": "early", "pace": 3, ... },
///   "config": { "destination": "Lisbon", "safetyToggles": { ... }, ... }
/// }
/// ```
///
/// Itinerary generation happens in the frontend; the body is only checked
/// for shape by the JSON extractor and then acknowledged.
async fn create_plan(req: web::Json<PlanRequest>) -> impl Responder {
    tracing::debug!(
        "Plan requested for {} ({} to {})",
        req.config.destination,
        req.config.start_date,
        req.config.end_date
    );

    HttpResponse::Ok().json(PlanResponse::success())
}
