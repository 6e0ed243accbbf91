use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod background_task;

pub use domain::{catalog, entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, observability};

use catalog::Catalog;
use db::json_store::JsonStore;
use observability::log_sink::LogSink;
use repositories::json_repo::JsonStoreRepo;
use use_cases::hiring::HiringHandler;
use use_cases::matching::MatchHandler;

pub struct AppState {
    pub matching: MatchHandler,
    pub hiring: AppHiringHandler,
    pub logs: Arc<LogSink>,
    pub store: Arc<JsonStore>,
}

pub type AppHiringHandler = HiringHandler<JsonStoreRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig, store: Arc<JsonStore>) -> Self {
        let logs = Arc::new(LogSink::new(config.log_capacity, &config.name, store.clone()));
        let repo = JsonStoreRepo::new(store.clone());

        let matching = MatchHandler::new(
            Arc::new(Catalog::builtin()),
            config.match_delay(),
            logs.clone(),
        );
        let hiring = HiringHandler::new(repo, logs.clone());

        AppState {
            matching,
            hiring,
            logs,
            store,
        }
    }
}
