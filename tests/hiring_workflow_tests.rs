use std::collections::HashMap;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use mockall::mock;
use tempfile::TempDir;

use freelancehub_backend::constants::{FREELANCER_STATES_KEY, HIRING_REQUESTS_KEY};
use freelancehub_backend::db::json_store::JsonStore;
use freelancehub_backend::entities::booking::{BookingState, FreelancerStatus};
use freelancehub_backend::entities::forms::HireForm;
use freelancehub_backend::entities::freelancer::FreelancerId;
use freelancehub_backend::entities::hiring_request::{next_request_id, HiringRequest, RequestStatus};
use freelancehub_backend::errors::AppError;
use freelancehub_backend::observability::log_sink::LogSink;
use freelancehub_backend::repositories::hiring::HiringStateRepository;
use freelancehub_backend::repositories::json_repo::JsonStoreRepo;
use freelancehub_backend::use_cases::hiring::HiringHandler;

struct Fixture {
    workflow: HiringHandler<JsonStoreRepo>,
    store: Arc<JsonStore>,
    _dir: TempDir,
}

fn fixture() -> Fixture {
    let dir = TempDir::new().expect("temp store directory");
    let store = Arc::new(JsonStore::open(dir.path()).expect("store"));
    let logs = Arc::new(LogSink::new(100, "FreelanceHub Test", store.clone()));
    let workflow = HiringHandler::new(JsonStoreRepo::new(store.clone()), logs);

    Fixture { workflow, store, _dir: dir }
}

fn hire_form(freelancer: &str) -> HireForm {
    HireForm {
        freelancer_name: freelancer.to_string(),
        client_name: "Dana Cole".to_string(),
        company_name: "Cole Media".to_string(),
        job_description: "Design a logo for our product launch".to_string(),
        offer_price: "1200".to_string(),
    }
}

#[tokio::test]
async fn submit_creates_one_pending_request_and_marks_in_progress() {
    let fx = fixture();

    let request = fx.workflow.submit_hire_request(hire_form("Alex Chen")).await.unwrap();

    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.freelancer_id, FreelancerId::from_display_name("Alex Chen"));

    let requests = fx.workflow.repo.list_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0], request);

    let states = fx.workflow.repo.load_states().await.unwrap();
    assert_eq!(
        states.get(&request.freelancer_id),
        Some(&BookingState::HiringInProgress)
    );

    let status = fx.workflow.refresh_state(&request.freelancer_id).await.unwrap();
    assert_eq!(status, FreelancerStatus::HiringInProgress);
}

#[tokio::test]
async fn submit_with_a_missing_field_changes_nothing() {
    let fx = fixture();

    let mut form = hire_form("Alex Chen");
    form.job_description = String::new();

    let result = fx.workflow.submit_hire_request(form).await;
    assert!(matches!(result, Err(AppError::Validation(_))));

    assert!(fx.workflow.repo.list_requests().await.unwrap().is_empty());
    assert!(fx.workflow.repo.load_states().await.unwrap().is_empty());
}

#[tokio::test]
async fn submit_validation_names_every_missing_field() {
    let fx = fixture();

    let form = HireForm {
        freelancer_name: String::new(),
        client_name: String::new(),
        company_name: String::new(),
        job_description: String::new(),
        offer_price: String::new(),
    };

    let Err(AppError::Validation(fields)) = fx.workflow.submit_hire_request(form).await else {
        panic!("expected a validation error naming every missing field");
    };

    assert_eq!(fields.len(), 5);
}

#[tokio::test]
async fn accepted_request_books_the_freelancer_idempotently() {
    let fx = fixture();

    let request = fx.workflow.submit_hire_request(hire_form("Maya Patel")).await.unwrap();
    fx.workflow.respond_to_request(&request.id, RequestStatus::Accepted).await.unwrap();

    // Repeated polls must keep reporting booked without drift.
    for _ in 0..3 {
        let status = fx.workflow.refresh_state(&request.freelancer_id).await.unwrap();
        assert_eq!(status, FreelancerStatus::Booked);
    }

    let states = fx.workflow.repo.load_states().await.unwrap();
    assert_eq!(states.get(&request.freelancer_id), Some(&BookingState::Booked));
}

#[tokio::test]
async fn acceptance_written_by_an_external_actor_is_observed_on_refresh() {
    let fx = fixture();

    let request = fx.workflow.submit_hire_request(hire_form("Jake Wilson")).await.unwrap();

    // The dashboard actor edits the shared store out-of-band: only the
    // request status changes, the booking marker is left alone.
    let mut requests = fx.store.get::<Vec<HiringRequest>>(HIRING_REQUESTS_KEY);
    requests[0].status = RequestStatus::Accepted;
    fx.store.put(HIRING_REQUESTS_KEY, &requests).unwrap();

    let status = fx.workflow.refresh_state(&request.freelancer_id).await.unwrap();
    assert_eq!(status, FreelancerStatus::Booked);

    let states = fx.workflow.repo.load_states().await.unwrap();
    assert_eq!(states.get(&request.freelancer_id), Some(&BookingState::Booked));
}

#[tokio::test]
async fn end_project_frees_the_freelancer_and_keeps_history() {
    let fx = fixture();

    let request = fx.workflow.submit_hire_request(hire_form("Lisa Kim")).await.unwrap();
    fx.workflow.respond_to_request(&request.id, RequestStatus::Accepted).await.unwrap();

    let history_before = fx.workflow.repo.list_requests().await.unwrap();

    fx.workflow.end_project(&request.freelancer_id, true).await.unwrap();

    let status = fx.workflow.refresh_state(&request.freelancer_id).await.unwrap();
    assert_eq!(status, FreelancerStatus::Available);

    // Ending the engagement must not rewrite history.
    let history_after = fx.workflow.repo.list_requests().await.unwrap();
    assert_eq!(history_before, history_after);

    // And the freelancer stays available across later polls.
    let status = fx.workflow.refresh_state(&request.freelancer_id).await.unwrap();
    assert_eq!(status, FreelancerStatus::Available);
}

#[tokio::test]
async fn end_project_without_confirmation_is_rejected() {
    let fx = fixture();

    let request = fx.workflow.submit_hire_request(hire_form("Sam Rodriguez")).await.unwrap();
    fx.workflow.respond_to_request(&request.id, RequestStatus::Accepted).await.unwrap();

    let result = fx.workflow.end_project(&request.freelancer_id, false).await;
    assert!(matches!(result, Err(AppError::Contract(_))));

    let status = fx.workflow.refresh_state(&request.freelancer_id).await.unwrap();
    assert_eq!(status, FreelancerStatus::Booked);
}

#[tokio::test]
async fn rejected_request_returns_the_freelancer_to_available() {
    let fx = fixture();

    let request = fx.workflow.submit_hire_request(hire_form("Emma Thompson")).await.unwrap();
    fx.workflow.respond_to_request(&request.id, RequestStatus::Rejected).await.unwrap();

    let status = fx.workflow.refresh_state(&request.freelancer_id).await.unwrap();
    assert_eq!(status, FreelancerStatus::Available);

    // The stale hiring-in-progress marker is cleaned up by the refresh.
    let states = fx.workflow.repo.load_states().await.unwrap();
    assert!(!states.contains_key(&request.freelancer_id));
}

#[tokio::test]
async fn responding_twice_is_a_conflict() {
    let fx = fixture();

    let request = fx.workflow.submit_hire_request(hire_form("David Lee")).await.unwrap();
    fx.workflow.respond_to_request(&request.id, RequestStatus::Accepted).await.unwrap();

    let result = fx.workflow.respond_to_request(&request.id, RequestStatus::Rejected).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn responding_with_pending_is_a_contract_violation() {
    let fx = fixture();

    let request = fx.workflow.submit_hire_request(hire_form("Mike Chen")).await.unwrap();

    let result = fx.workflow.respond_to_request(&request.id, RequestStatus::Pending).await;
    assert!(matches!(result, Err(AppError::Contract(_))));
}

#[tokio::test]
async fn responding_to_an_unknown_request_is_not_found() {
    let fx = fixture();

    let result = fx.workflow.respond_to_request("1234567890", RequestStatus::Accepted).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn display_name_spellings_collide_into_one_freelancer() {
    let fx = fixture();

    assert_eq!(
        FreelancerId::from_display_name("Jo Lee"),
        FreelancerId::from_display_name("jo lee"),
    );
    assert_eq!(
        FreelancerId::from_display_name("Jo Lee"),
        FreelancerId::from_display_name(" Jo\tLee "),
    );

    let request = fx.workflow.submit_hire_request(hire_form("Jo Lee")).await.unwrap();
    fx.workflow.respond_to_request(&request.id, RequestStatus::Accepted).await.unwrap();

    // The other spelling resolves to the same, now booked, freelancer.
    let result = fx.workflow.submit_hire_request(hire_form("jo lee")).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn booked_marker_without_accepted_request_reads_booked_by_other() {
    let fx = fixture();

    let id = FreelancerId::from_display_name("Nina Foster");
    fx.workflow.repo.set_state(&id, BookingState::Booked).await.unwrap();

    let status = fx.workflow.refresh_state(&id).await.unwrap();
    assert_eq!(status, FreelancerStatus::BookedByOther);

    // The marker is left alone: the race is reported, not resolved.
    let states = fx.workflow.repo.load_states().await.unwrap();
    assert_eq!(states.get(&id), Some(&BookingState::Booked));

    let result = fx.workflow.submit_hire_request(hire_form("Nina Foster")).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn reconcile_all_covers_every_known_freelancer() {
    let fx = fixture();

    fx.workflow.submit_hire_request(hire_form("Ryan Cooper")).await.unwrap();
    fx.workflow.submit_hire_request(hire_form("Zoe Williams")).await.unwrap();
    let orphan = FreelancerId::from_display_name("Jordan Blake");
    fx.workflow.repo.set_state(&orphan, BookingState::Booked).await.unwrap();

    let count = fx.workflow.reconcile_all().await.unwrap();
    assert_eq!(count, 3);
}

#[test]
fn request_ids_are_time_based_and_bump_past_collisions() {
    let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();

    assert_eq!(next_request_id(&[], now), "1700000000000");

    let existing = vec![HiringRequest {
        id: "1700000000000".to_string(),
        freelancer_name: "Jo Lee".to_string(),
        freelancer_id: FreelancerId::from_display_name("Jo Lee"),
        client_name: "Dana Cole".to_string(),
        company_name: "Cole Media".to_string(),
        job_description: "Logo".to_string(),
        offer_price: "900".to_string(),
        status: RequestStatus::Pending,
        created_at: now,
    }];

    // Same-millisecond submission, and a clock stepping backwards.
    assert_eq!(next_request_id(&existing, now), "1700000000001");
    let earlier = Utc.timestamp_millis_opt(1_600_000_000_000).unwrap();
    assert_eq!(next_request_id(&existing, earlier), "1700000000001");
}

#[tokio::test]
async fn collections_round_trip_through_the_store_unchanged() {
    let fx = fixture();

    let first = fx.workflow.submit_hire_request(hire_form("Casey Rivers")).await.unwrap();
    let second = fx.workflow.submit_hire_request(hire_form("Alex Harper")).await.unwrap();

    let requests = fx.store.get::<Vec<HiringRequest>>(HIRING_REQUESTS_KEY);
    let states = fx.store.get::<HashMap<FreelancerId, BookingState>>(FREELANCER_STATES_KEY);

    assert_eq!(requests, vec![first, second]);

    // Rewrite and reload: both collections come back identical, request
    // order included.
    fx.store.put(HIRING_REQUESTS_KEY, &requests).unwrap();
    fx.store.put(FREELANCER_STATES_KEY, &states).unwrap();

    assert_eq!(fx.store.get::<Vec<HiringRequest>>(HIRING_REQUESTS_KEY), requests);
    assert_eq!(
        fx.store.get::<HashMap<FreelancerId, BookingState>>(FREELANCER_STATES_KEY),
        states
    );
}

mock! {
    pub Repo {}

    #[async_trait::async_trait]
    impl HiringStateRepository for Repo {
        async fn list_requests(&self) -> Result<Vec<HiringRequest>, AppError>;
        async fn append_request(&self, request: &HiringRequest) -> Result<(), AppError>;
        async fn update_request_status(&self, id: &str, status: RequestStatus) -> Result<HiringRequest, AppError>;
        async fn load_states(&self) -> Result<HashMap<FreelancerId, BookingState>, AppError>;
        async fn set_state(&self, id: &FreelancerId, state: BookingState) -> Result<(), AppError>;
        async fn clear_state(&self, id: &FreelancerId) -> Result<(), AppError>;
    }
}

#[tokio::test]
async fn invalid_submission_never_touches_the_repository() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(JsonStore::open(dir.path()).unwrap());
    let logs = Arc::new(LogSink::new(100, "FreelanceHub Test", store));

    // No expectations: any repository call would panic the test.
    let workflow = HiringHandler::new(MockRepo::new(), logs);

    let mut form = hire_form("Alex Chen");
    form.offer_price = String::new();

    let result = workflow.submit_hire_request(form).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}
