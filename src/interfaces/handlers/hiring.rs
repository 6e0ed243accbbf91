use actix_web::{get, post, web, HttpResponse, Responder};

use crate::entities::forms::{EndProjectForm, HireForm};
use crate::entities::freelancer::FreelancerId;
use crate::AppState;

#[post("/hire")]
pub async fn submit_hire(
    state: web::Data<AppState>,
    form: web::Json<HireForm>,
) -> impl Responder {
    match state.hiring.submit_hire_request(form.into_inner()).await {
        Ok(request) => HttpResponse::Created().json(request),
        Err(e) => e.to_http_response(),
    }
}

/// Reconciles and reports the UI-facing status for one freelancer. The
/// path segment accepts either the derived id or a display name; both
/// normalize to the same key.
#[get("/freelancers/{id}/status")]
pub async fn freelancer_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = FreelancerId::from_display_name(&path.into_inner());

    match state.hiring.refresh_state(&id).await {
        Ok(status) => HttpResponse::Ok().json(serde_json::json!({
            "freelancerId": id,
            "status": status,
        })),
        Err(e) => e.to_http_response(),
    }
}

#[post("/freelancers/{id}/end-project")]
pub async fn end_project(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Json<EndProjectForm>,
) -> impl Responder {
    let id = FreelancerId::from_display_name(&path.into_inner());

    match state.hiring.end_project(&id, form.confirm).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Project ended. This freelancer is now available for new projects.",
            "freelancerId": id,
        })),
        Err(e) => e.to_http_response(),
    }
}
