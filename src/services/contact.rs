//! Contact inquiry intake service

use chrono::Utc;
use serde_json::json;

use crate::{
    error::{AppError, AppResult},
    models::{
        activity::{ActivityAction, ActivityEvent},
        inquiry::{InquiryRecord, SubmitInquiry},
        ANONYMOUS,
    },
    store::Stores,
};

#[derive(Clone)]
pub struct ContactService {
    stores: Stores,
}

impl ContactService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    /// Validate and accept an inquiry.
    ///
    /// Every violated rule is returned at once so the caller can display the
    /// complete list. A submission counts toward the form counter whether or
    /// not it validates.
    pub fn submit(
        &self,
        submission: SubmitInquiry,
        actor: Option<&str>,
        origin: &str,
    ) -> AppResult<InquiryRecord> {
        self.stores.counters.record_submission();

        let submission = trimmed(submission);
        let errors = submission.field_errors();
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let record = InquiryRecord {
            id: self.stores.inquiries.next_id(),
            name: submission.name.clone(),
            email: submission.email.clone(),
            inquiry_type: submission.inquiry_type.clone(),
            priority: submission.priority,
            message: submission.message.clone(),
            timestamp: Utc::now(),
            submitted_by: actor.unwrap_or(ANONYMOUS).to_string(),
            status: "new".to_string(),
            response_time: submission.priority.response_window().to_string(),
        };
        self.stores.inquiries.append(record.clone());

        self.stores.activity.record(ActivityEvent::new(
            ActivityAction::ContactFormSubmission,
            actor,
            Some(json!({
                "inquiry_type": record.inquiry_type,
                "priority": record.priority.as_str(),
            })),
            origin,
        ));

        Ok(record)
    }
}

fn trimmed(submission: SubmitInquiry) -> SubmitInquiry {
    SubmitInquiry {
        name: submission.name.trim().to_string(),
        email: submission.email.trim().to_string(),
        inquiry_type: submission.inquiry_type.trim().to_string(),
        priority: submission.priority,
        message: submission.message.trim().to_string(),
    }
}
