use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use derive_more::Display;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::constants::APP_LOGS_KEY;
use crate::db::json_store::JsonStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[display("error")]
    Error,
    #[display("warn")]
    Warn,
    #[display("info")]
    Info,
    #[display("debug")]
    Debug,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
}

impl LogContext {
    pub fn operation(name: &str) -> Self {
        LogContext { operation: Some(name.to_string()) }
    }
}

/// One structured event, enriched with environment metadata the way browser
/// logs carry user agent and URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub context: LogContext,
    pub app: String,
    pub version: String,
    pub host: String,
}

/// Append-only ring buffer of structured events, mirrored to `tracing` and
/// written through to the store under `app_logs`.
///
/// The store key is cleared on construction so persisted logs never outlive
/// the session that produced them. Overflow silently drops the oldest
/// entries. A write-through failure is logged and swallowed; the sink must
/// never fail an operation that only wanted to log.
pub struct LogSink {
    capacity: usize,
    app: String,
    version: String,
    host: String,
    entries: Mutex<VecDeque<LogEntry>>,
    store: Arc<JsonStore>,
}

impl LogSink {
    pub fn new(capacity: usize, app: &str, store: Arc<JsonStore>) -> Self {
        if let Err(e) = store.remove(APP_LOGS_KEY) {
            tracing::warn!(error = %e, "Failed to clear persisted logs from previous session");
        }

        LogSink {
            capacity,
            app: app.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            host: sysinfo::System::host_name().unwrap_or_else(|| "unknown".to_string()),
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            store,
        }
    }

    pub fn record(&self, level: LogLevel, message: &str, data: serde_json::Value, context: LogContext) {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            message: message.to_string(),
            data,
            context,
            app: self.app.clone(),
            version: self.version.clone(),
            host: self.host.clone(),
        };

        self.mirror_to_tracing(&entry);

        let snapshot: Vec<LogEntry> = {
            let mut entries = self.entries.lock();
            entries.push_back(entry);
            while entries.len() > self.capacity {
                entries.pop_front();
            }
            entries.iter().cloned().collect()
        };

        if let Err(e) = self.store.put(APP_LOGS_KEY, &snapshot) {
            tracing::warn!(error = %e, "Failed to persist log entries");
        }
    }

    pub fn error(&self, message: &str, data: serde_json::Value, context: LogContext) {
        self.record(LogLevel::Error, message, data, context);
    }

    pub fn warn(&self, message: &str, data: serde_json::Value, context: LogContext) {
        self.record(LogLevel::Warn, message, data, context);
    }

    pub fn info(&self, message: &str, data: serde_json::Value, context: LogContext) {
        self.record(LogLevel::Info, message, data, context);
    }

    pub fn debug(&self, message: &str, data: serde_json::Value, context: LogContext) {
        self.record(LogLevel::Debug, message, data, context);
    }

    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.lock().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
        if let Err(e) = self.store.remove(APP_LOGS_KEY) {
            tracing::warn!(error = %e, "Failed to clear persisted logs");
        }
    }

    fn mirror_to_tracing(&self, entry: &LogEntry) {
        let operation = entry.context.operation.as_deref().unwrap_or("-");
        match entry.level {
            LogLevel::Error => tracing::error!(operation, data = %entry.data, "{}", entry.message),
            LogLevel::Warn => tracing::warn!(operation, data = %entry.data, "{}", entry.message),
            LogLevel::Info => tracing::info!(operation, data = %entry.data, "{}", entry.message),
            LogLevel::Debug => tracing::debug!(operation, data = %entry.data, "{}", entry.message),
        }
    }
}
