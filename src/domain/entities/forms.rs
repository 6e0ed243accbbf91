use serde::Deserialize;
use validator::Validate;

/// Matching criteria as selected in the demo form. All three selections are
/// required and validated together so the caller learns every missing field
/// in one round trip. Budget never influences selection; it is carried for
/// the decision log only.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MatchQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "job role is required"))]
    pub job_role: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "budget is required"))]
    pub budget: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "experience level is required"))]
    pub experience_level: String,
}

/// Hire-form submission. Five required fields, validated together.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HireForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "freelancer name is required"))]
    pub freelancer_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "client name is required"))]
    pub client_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "company name is required"))]
    pub company_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "job description is required"))]
    pub job_description: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "offer price is required"))]
    pub offer_price: String,
}

/// Confirmation body of the destructive end-project action.
#[derive(Debug, Deserialize)]
pub struct EndProjectForm {
    #[serde(default)]
    pub confirm: bool,
}

/// Status update written by the acceptance dashboard actor.
#[derive(Debug, Deserialize)]
pub struct RespondForm {
    pub status: super::hiring_request::RequestStatus,
}
