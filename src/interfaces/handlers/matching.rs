use actix_web::{post, web, HttpResponse, Responder};

use crate::entities::forms::MatchQuery;
use crate::AppState;

/// Runs the simulated matching. The response arrives only after the
/// configured artificial delay; callers are expected to show a busy state
/// for the duration.
#[post("/match")]
pub async fn find_match(
    state: web::Data<AppState>,
    query: web::Json<MatchQuery>,
) -> impl Responder {
    match state.matching.find_match(query.into_inner()).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => e.to_http_response(),
    }
}
