use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed-shape catalog record. Profiles are immutable; the texty fields
/// (experience, rate) are display strings, not structured quantities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreelancerProfile {
    pub name: String,
    pub avatar: String,
    pub specialty: String,
    pub experience: String,
    pub rate: String,
    pub location: String,
    pub projects: u32,
}

/// Key of the shared `freelancerStates` mapping and of every hiring request.
///
/// Derived from the display name with all whitespace removed and case-folded
/// to lowercase. The derivation is lossy: two different people who share a
/// display name collide. It is kept as-is because the on-disk contract with
/// the acceptance dashboard keys on it; see DESIGN.md before changing it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FreelancerId(String);

impl FreelancerId {
    /// Normalizes a display name (or an already-derived id) into the key.
    pub fn from_display_name(name: &str) -> Self {
        FreelancerId(name.split_whitespace().collect::<String>().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FreelancerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
