//! Contact inquiry endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::inquiry::{InquiryRecord, SubmitInquiry},
};

use super::{AuthenticatedUser, ClientAddr};

/// Vocabulary the contact form is built from
#[derive(Serialize, ToSchema)]
pub struct ContactFormView {
    pub inquiry_types: Vec<&'static str>,
    pub priorities: Vec<&'static str>,
}

#[derive(Serialize, ToSchema)]
pub struct InquiryResponse {
    pub message: String,
    pub inquiry: InquiryRecord,
}

/// Contact form vocabulary (the rendering layer owns the markup)
#[utoipa::path(
    get,
    path = "/contact",
    tag = "contact",
    responses(
        (status = 200, description = "Contact form vocabulary", body = ContactFormView)
    )
)]
pub async fn contact_form() -> Json<ContactFormView> {
    Json(ContactFormView {
        inquiry_types: vec![
            "General",
            "Book Request",
            "Technical Support",
            "Membership",
            "Feedback",
        ],
        priorities: vec!["low", "normal", "high"],
    })
}

/// Submit an inquiry. Validation failures report every violated rule at once.
#[utoipa::path(
    post,
    path = "/contact",
    tag = "contact",
    request_body = SubmitInquiry,
    responses(
        (status = 201, description = "Inquiry received", body = InquiryResponse),
        (status = 400, description = "Validation failed; details list every violation")
    )
)]
pub async fn submit_contact(
    State(state): State<crate::AppState>,
    session: Option<AuthenticatedUser>,
    ClientAddr(origin): ClientAddr,
    Json(submission): Json<SubmitInquiry>,
) -> AppResult<(StatusCode, Json<InquiryResponse>)> {
    let actor = session.as_ref().map(|s| s.0.sub.as_str());
    let inquiry = state.services.contact.submit(submission, actor, &origin)?;

    let message = format!(
        "Thank you {}! Your {} inquiry (Priority: {}) has been received. Response expected within {}.",
        inquiry.name,
        inquiry.inquiry_type.to_lowercase(),
        inquiry.priority.as_str(),
        inquiry.response_time
    );
    Ok((StatusCode::CREATED, Json(InquiryResponse { message, inquiry })))
}
