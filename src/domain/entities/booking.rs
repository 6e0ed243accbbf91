use serde::{Deserialize, Serialize};

/// Persisted booking marker. Absence from the `freelancerStates` mapping
/// means the freelancer is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingState {
    HiringInProgress,
    Booked,
}

/// UI-facing status derived by reconciliation, never stored directly.
///
/// `BookedByOther` covers the cross-client race where the shared store says
/// booked but no accepted request backs the marker up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FreelancerStatus {
    Available,
    HiringInProgress,
    Booked,
    BookedByOther,
}
