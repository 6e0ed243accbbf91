use actix_web::{delete, get, web, HttpResponse, Responder};
use chrono::Utc;
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;
use sysinfo::System;

use crate::constants::START_TIME;
use crate::AppState;

#[derive(Serialize)]
struct SystemInfo {
    os: String,
    kernel: String,
    hostname: String,
    cpu_count: usize,
    memory_total: String,
}

#[derive(Serialize)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    store: String,
    version: String,
    system: SystemInfo,
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now_utc = Utc::now();
    let uptime_duration = now_utc.signed_duration_since(*START_TIME);
    let human_uptime = format_duration(Duration::from_secs(uptime_duration.num_seconds().max(0) as u64));

    let mut sys = System::new_all();
    sys.refresh_all();

    let system_info = SystemInfo {
        os: System::name().unwrap_or_else(|| "Unknown".to_string()),
        kernel: System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
        hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        cpu_count: sys.cpus().len(),
        memory_total: format!("{:.2} GB", sys.total_memory() as f64 / 1024.0 / 1024.0 / 1024.0),
    };

    let store_status = match state.store.probe() {
        Ok(_) => "OK",
        Err(_) => "Unavailable",
    };

    let response = HealthCheckResponse {
        status: "healthy".to_string(),
        uptime: human_uptime.to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        store: store_status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        system: system_info,
    };

    HttpResponse::Ok().json(response)
}

/// Snapshot of the session's structured log ring buffer.
#[get("/logs")]
pub async fn get_logs(state: web::Data<AppState>) -> impl Responder {
    let logs = state.logs.snapshot();

    HttpResponse::Ok().json(serde_json::json!({
        "total": logs.len(),
        "logs": logs,
    }))
}

#[delete("/logs")]
pub async fn clear_logs(state: web::Data<AppState>) -> impl Responder {
    state.logs.clear();
    HttpResponse::NoContent().finish()
}
