use actix_web::{get, post, web, HttpResponse, Responder};

use crate::entities::forms::RespondForm;
use crate::AppState;

/// Ordered request log, oldest first. Read surface of the acceptance
/// dashboard.
#[get("/requests")]
pub async fn list_requests(state: web::Data<AppState>) -> impl Responder {
    match state.hiring.list_requests().await {
        Ok(requests) => HttpResponse::Ok().json(serde_json::json!({
            "total": requests.len(),
            "requests": requests,
        })),
        Err(e) => e.to_http_response(),
    }
}

/// Write surface of the acceptance dashboard: moves a pending request to
/// accepted or rejected.
#[post("/requests/{id}/respond")]
pub async fn respond_to_request(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Json<RespondForm>,
) -> impl Responder {
    let id = path.into_inner();

    match state.hiring.respond_to_request(&id, form.status).await {
        Ok(request) => HttpResponse::Ok().json(request),
        Err(e) => e.to_http_response(),
    }
}
