use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use freelancehub_backend::{
    background_task::start_reconcile_task,
    db::json_store::JsonStore,
    graceful_shutdown::shutdown_signal,
    routes::configure_routes,
    settings::AppConfig,
    AppState,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let store = match JsonStore::open(&config.data_dir) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!("Failed to open store at {}: {}", config.data_dir.display(), e);
            std::process::exit(1);
        }
    };

    let app_state = web::Data::new(AppState::new(&config, store));

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "Starting FreelanceHub API v{} on {}",
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let app_state_clone = app_state.clone();
    let cors_origins = config.cors_origins();

    let server = HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "DELETE"])
            .allow_any_header();
        if cors_origins.iter().any(|o| o == "*") {
            cors = cors.allow_any_origin();
        } else {
            for origin in &cors_origins {
                cors = cors.allowed_origin(origin);
            }
        }

        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .wrap(cors)
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    tokio::spawn(start_reconcile_task(
        app_state_clone.hiring.clone(),
        config.poll_interval(),
    ));

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}
