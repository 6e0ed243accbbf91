use std::collections::HashMap;

use async_trait::async_trait;

use crate::constants::{FREELANCER_STATES_KEY, HIRING_REQUESTS_KEY};
use crate::entities::booking::BookingState;
use crate::entities::freelancer::FreelancerId;
use crate::entities::hiring_request::{HiringRequest, RequestStatus};
use crate::errors::AppError;
use crate::repositories::json_repo::JsonStoreRepo;

/// Access to the two shared collections of the hiring workflow: the ordered
/// request log and the per-freelancer booking markers. The two writes of an
/// operation are sequential; there is no cross-key transaction.
#[async_trait]
pub trait HiringStateRepository: Send + Sync {
    async fn list_requests(&self) -> Result<Vec<HiringRequest>, AppError>;
    async fn append_request(&self, request: &HiringRequest) -> Result<(), AppError>;
    async fn update_request_status(&self, id: &str, status: RequestStatus) -> Result<HiringRequest, AppError>;
    async fn load_states(&self) -> Result<HashMap<FreelancerId, BookingState>, AppError>;
    async fn set_state(&self, id: &FreelancerId, state: BookingState) -> Result<(), AppError>;
    async fn clear_state(&self, id: &FreelancerId) -> Result<(), AppError>;
}

#[async_trait]
impl HiringStateRepository for JsonStoreRepo {
    async fn list_requests(&self) -> Result<Vec<HiringRequest>, AppError> {
        Ok(self.store.get::<Vec<HiringRequest>>(HIRING_REQUESTS_KEY))
    }

    async fn append_request(&self, request: &HiringRequest) -> Result<(), AppError> {
        let mut requests = self.store.get::<Vec<HiringRequest>>(HIRING_REQUESTS_KEY);
        requests.push(request.clone());
        self.store.put(HIRING_REQUESTS_KEY, &requests)
    }

    async fn update_request_status(&self, id: &str, status: RequestStatus) -> Result<HiringRequest, AppError> {
        let mut requests = self.store.get::<Vec<HiringRequest>>(HIRING_REQUESTS_KEY);

        let request = requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Hiring request {} not found", id)))?;

        request.status = status;
        let updated = request.clone();

        self.store.put(HIRING_REQUESTS_KEY, &requests)?;
        Ok(updated)
    }

    async fn load_states(&self) -> Result<HashMap<FreelancerId, BookingState>, AppError> {
        Ok(self.store.get::<HashMap<FreelancerId, BookingState>>(FREELANCER_STATES_KEY))
    }

    async fn set_state(&self, id: &FreelancerId, state: BookingState) -> Result<(), AppError> {
        let mut states = self.store.get::<HashMap<FreelancerId, BookingState>>(FREELANCER_STATES_KEY);
        states.insert(id.clone(), state);
        self.store.put(FREELANCER_STATES_KEY, &states)
    }

    async fn clear_state(&self, id: &FreelancerId) -> Result<(), AppError> {
        let mut states = self.store.get::<HashMap<FreelancerId, BookingState>>(FREELANCER_STATES_KEY);
        states.remove(id);
        self.store.put(FREELANCER_STATES_KEY, &states)
    }
}
