use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Store keys shared with the acceptance dashboard. Renaming any of these
/// breaks every client that already has data on disk.
pub const HIRING_REQUESTS_KEY: &str = "hiringRequests";
pub const FREELANCER_STATES_KEY: &str = "freelancerStates";
pub const APP_LOGS_KEY: &str = "app_logs";
