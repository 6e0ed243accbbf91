use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::freelancer::FreelancerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
}

/// A client's offer routed to one freelancer. Requests are append-only:
/// nothing ever deletes one, and only `status` may change after creation.
///
/// The wire names match the store schema the acceptance dashboard reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiringRequest {
    pub id: String,
    pub freelancer_name: String,
    pub freelancer_id: FreelancerId,
    pub client_name: String,
    pub company_name: String,
    pub job_description: String,
    pub offer_price: String,
    pub status: RequestStatus,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl HiringRequest {
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    pub fn is_accepted(&self) -> bool {
        self.status == RequestStatus::Accepted
    }
}

/// Time-based request id, unique per creation.
///
/// The id is the creation instant in milliseconds since the epoch, rendered
/// as a decimal string. Two submissions landing in the same millisecond (or
/// a clock stepping backwards) would collide, so a candidate that does not
/// exceed the highest existing id is bumped past it.
pub fn next_request_id(existing: &[HiringRequest], now: DateTime<Utc>) -> String {
    let candidate = now.timestamp_millis();
    let highest = existing
        .iter()
        .filter_map(|r| r.id.parse::<i64>().ok())
        .max();

    match highest {
        Some(high) if candidate <= high => (high + 1).to_string(),
        _ => candidate.to_string(),
    }
}
