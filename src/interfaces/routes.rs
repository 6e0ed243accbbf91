use actix_web::web;

use crate::handlers::hiring::{end_project, freelancer_status, submit_hire};
use crate::handlers::home::home;
use crate::handlers::matching::find_match;
use crate::handlers::requests::{list_requests, respond_to_request};
use crate::handlers::system::{clear_logs, get_logs, health_check};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api/v1")
            .service(find_match)
            .service(submit_hire)
            .service(freelancer_status)
            .service(end_project)
            .service(list_requests)
            .service(respond_to_request)
            .service(
                web::scope("/admin")
                    .service(health_check)
                    .service(get_logs)
                    .service(clear_logs)
            )
    );
}
