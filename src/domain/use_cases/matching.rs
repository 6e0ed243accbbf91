use std::sync::Arc;
use std::time::Duration;

use rand::seq::SliceRandom;
use validator::Validate;

use crate::catalog::{Catalog, Category, Tier};
use crate::entities::forms::MatchQuery;
use crate::entities::freelancer::FreelancerProfile;
use crate::errors::AppError;
use crate::observability::log_sink::{LogContext, LogSink};

/// Simulated matching service: a uniform random pick from the catalog slice
/// for the selected tier and category.
#[derive(Clone)]
pub struct MatchHandler {
    catalog: Arc<Catalog>,
    delay: Duration,
    logs: Arc<LogSink>,
}

impl MatchHandler {
    pub fn new(catalog: Arc<Catalog>, delay: Duration, logs: Arc<LogSink>) -> Self {
        MatchHandler { catalog, delay, logs }
    }

    /// Validates the query, waits out the artificial matching delay, then
    /// returns a profile from the matching slice — or the fallback sentinel
    /// when the criteria hit no slice. A miss is an observable condition,
    /// never an error.
    pub async fn find_match(&self, query: MatchQuery) -> Result<FreelancerProfile, AppError> {
        if let Err(errors) = query.validate() {
            self.logs.warn(
                "Match query rejected, required selections missing",
                serde_json::json!({
                    "jobRole": query.job_role,
                    "budget": query.budget,
                    "experienceLevel": query.experience_level,
                }),
                LogContext::operation("find_match"),
            );
            return Err(errors.into());
        }

        tokio::time::sleep(self.delay).await;

        let tier = query.experience_level.parse::<Tier>().ok();
        let category = query.job_role.parse::<Category>().ok();

        let slice = match (tier, category) {
            (Some(tier), Some(category)) => self.catalog.slice(tier, category),
            _ => None,
        };

        let Some(profiles) = slice.filter(|s| !s.is_empty()) else {
            self.logs.warn(
                "No freelancers found for criteria",
                serde_json::json!({
                    "jobRole": query.job_role,
                    "budget": query.budget,
                    "experienceLevel": query.experience_level,
                }),
                LogContext::operation("find_match"),
            );
            return Ok(Catalog::fallback());
        };

        let Some(selected) = profiles.choose(&mut rand::thread_rng()).cloned() else {
            return Ok(Catalog::fallback());
        };

        self.logs.info(
            "Freelancer match found",
            serde_json::json!({
                "freelancer": selected.name,
                "criteria": {
                    "jobRole": query.job_role,
                    "budget": query.budget,
                    "experienceLevel": query.experience_level,
                },
                "totalMatches": profiles.len(),
            }),
            LogContext::operation("find_match"),
        );

        Ok(selected)
    }
}
