use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::entities::booking::{BookingState, FreelancerStatus};
use crate::entities::forms::HireForm;
use crate::entities::freelancer::FreelancerId;
use crate::entities::hiring_request::{next_request_id, HiringRequest, RequestStatus};
use crate::errors::AppError;
use crate::observability::log_sink::{LogContext, LogSink};
use crate::repositories::hiring::HiringStateRepository;

/// The hiring workflow state machine.
///
/// Per freelancer id: available → hiring-in-progress → booked → available
/// (via end-project). `booked-by-other` is the available-state variant that
/// blocks new requests when the shared store says booked but no accepted
/// request backs it up.
#[derive(Clone)]
pub struct HiringHandler<R>
where
    R: HiringStateRepository,
{
    pub repo: R,
    logs: Arc<LogSink>,
}

impl<R> HiringHandler<R>
where
    R: HiringStateRepository,
{
    pub fn new(repo: R, logs: Arc<LogSink>) -> Self {
        HiringHandler { repo, logs }
    }

    /// Creates a pending request and marks the freelancer as
    /// hiring-in-progress. The two writes are sequential; a failure of the
    /// second leaves the appended request in place (no rollback).
    pub async fn submit_hire_request(&self, form: HireForm) -> Result<HiringRequest, AppError> {
        if let Err(errors) = form.validate() {
            self.logs.warn(
                "Hire form rejected, required fields missing",
                serde_json::json!({
                    "freelancerName": form.freelancer_name,
                    "clientName": form.client_name,
                    "companyName": form.company_name,
                }),
                LogContext::operation("submit_hire_request"),
            );
            return Err(errors.into());
        }

        let freelancer_id = FreelancerId::from_display_name(&form.freelancer_name);

        match self.refresh_state(&freelancer_id).await? {
            FreelancerStatus::Booked | FreelancerStatus::BookedByOther => {
                return Err(AppError::Conflict(
                    "This freelancer is currently booked and not available for new projects".to_string(),
                ));
            }
            _ => {}
        }

        let existing = self.repo.list_requests().await?;
        let request = HiringRequest {
            id: next_request_id(&existing, Utc::now()),
            freelancer_name: form.freelancer_name,
            freelancer_id: freelancer_id.clone(),
            client_name: form.client_name,
            company_name: form.company_name,
            job_description: form.job_description,
            offer_price: form.offer_price,
            status: RequestStatus::Pending,
            created_at: Utc::now(),
        };

        self.repo.append_request(&request).await?;
        self.repo.set_state(&freelancer_id, BookingState::HiringInProgress).await?;

        self.logs.info(
            "Hiring request submitted",
            serde_json::json!({
                "requestId": request.id,
                "freelancerId": freelancer_id.as_str(),
                "totalRequests": existing.len() + 1,
            }),
            LogContext::operation("submit_hire_request"),
        );

        Ok(request)
    }

    /// The acceptance-dashboard surface: any actor may move a pending
    /// request to accepted or rejected. Nothing in this core initiates an
    /// acceptance on its own.
    pub async fn respond_to_request(&self, id: &str, status: RequestStatus) -> Result<HiringRequest, AppError> {
        if status == RequestStatus::Pending {
            return Err(AppError::Contract(
                "A response must be either accepted or rejected".to_string(),
            ));
        }

        let requests = self.repo.list_requests().await?;
        let request = requests
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Hiring request {} not found", id)))?;

        if !request.is_pending() {
            return Err(AppError::Conflict(format!(
                "Hiring request {} has already been responded to",
                id
            )));
        }

        let updated = self.repo.update_request_status(id, status).await?;

        if status == RequestStatus::Accepted {
            self.repo.set_state(&updated.freelancer_id, BookingState::Booked).await?;
        }

        self.logs.info(
            "Hiring request responded",
            serde_json::json!({
                "requestId": id,
                "freelancerId": updated.freelancer_id.as_str(),
                "status": status,
            }),
            LogContext::operation("respond_to_request"),
        );

        Ok(updated)
    }

    /// Ends an engagement and returns the freelancer to available. The
    /// action is irreversible, so the caller must pass the confirmation
    /// flag explicitly. Historical requests are left untouched.
    pub async fn end_project(&self, id: &FreelancerId, confirm: bool) -> Result<(), AppError> {
        if !confirm {
            return Err(AppError::Contract(
                "Ending a project is irreversible and requires confirmation".to_string(),
            ));
        }

        self.repo.clear_state(id).await?;

        self.logs.info(
            "Project ended, freelancer available again",
            serde_json::json!({ "freelancerId": id.as_str() }),
            LogContext::operation("end_project"),
        );

        Ok(())
    }

    /// Idempotent reconciliation: re-reads both persisted collections and
    /// re-derives the UI-facing status, syncing the booking marker to the
    /// derivation. Safe to call repeatedly and from the fixed-interval poll.
    ///
    /// An accepted request whose marker was cleared by end-project counts as
    /// ended and no longer books the freelancer.
    pub async fn refresh_state(&self, id: &FreelancerId) -> Result<FreelancerStatus, AppError> {
        let requests = self.repo.list_requests().await?;
        let states = self.repo.load_states().await?;

        let accepted = requests.iter().any(|r| r.freelancer_id == *id && r.is_accepted());
        let pending = requests.iter().any(|r| r.freelancer_id == *id && r.is_pending());
        let marker = states.get(id).copied();

        let status = if accepted && marker.is_some() {
            FreelancerStatus::Booked
        } else if pending {
            FreelancerStatus::HiringInProgress
        } else if marker == Some(BookingState::Booked) {
            FreelancerStatus::BookedByOther
        } else {
            FreelancerStatus::Available
        };

        match status {
            FreelancerStatus::Booked if marker != Some(BookingState::Booked) => {
                self.repo.set_state(id, BookingState::Booked).await?;
            }
            FreelancerStatus::HiringInProgress if marker != Some(BookingState::HiringInProgress) => {
                self.repo.set_state(id, BookingState::HiringInProgress).await?;
            }
            // Stale hiring-in-progress marker (e.g. after a rejection).
            FreelancerStatus::Available if marker.is_some() => {
                self.repo.clear_state(id).await?;
            }
            _ => {}
        }

        Ok(status)
    }

    /// Applies `refresh_state` to every id appearing in either collection.
    /// Driven by the background poll.
    pub async fn reconcile_all(&self) -> Result<usize, AppError> {
        let requests = self.repo.list_requests().await?;
        let states = self.repo.load_states().await?;

        let ids: HashSet<FreelancerId> = requests
            .into_iter()
            .map(|r| r.freelancer_id)
            .chain(states.into_keys())
            .collect();

        let count = ids.len();
        for id in ids {
            self.refresh_state(&id).await?;
        }

        Ok(count)
    }

    pub async fn list_requests(&self) -> Result<Vec<HiringRequest>, AppError> {
        self.repo.list_requests().await
    }
}
