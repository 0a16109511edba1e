//! Contact form client: field state, busy-flag guard, and submission.
//!
//! The form is an owned struct driven by whatever surface hosts it (the
//! `submit` CLI command here). Submission propagates the real HTTP
//! status instead of fire-and-forget, so a rejected payload is visible
//! to the user rather than masked as success.

use serde::Serialize;

use crate::contact::Subject;

/// Field selector for [`ContactForm::update_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Subject,
    Message,
}

/// The five editable fields, serialized camelCase for the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Result of one submit invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Server acknowledged the submission; fields were cleared.
    Accepted { message: String },
    /// Server rejected the payload; fields are preserved for editing.
    Rejected { status: u16, message: String },
    /// The request never completed; fields are preserved.
    Failed(String),
    /// A submission is already outstanding; no request was issued.
    Busy,
}

#[derive(Debug, Default)]
pub struct ContactForm {
    fields: FormFields,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one field. No validation happens here; the server is the
    /// validation boundary.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.fields.first_name = value,
            Field::LastName => self.fields.last_name = value,
            Field::Email => self.fields.email = value,
            Field::Subject => self.fields.subject = value,
            Field::Message => self.fields.message = value,
        }
    }

    /// Constrain the subject to the enumerated set the form offers.
    pub fn set_subject(&mut self, subject: Subject) {
        self.fields.subject = subject.to_string();
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Submit the current fields to the contact endpoint.
    ///
    /// Guarded by the busy flag: while a submission is outstanding a
    /// second invocation returns [`SubmitOutcome::Busy`] without
    /// issuing a request. Exactly one outbound call otherwise, no
    /// retry. The flag is lowered on every path.
    pub async fn submit(&mut self, client: &reqwest::Client, endpoint: &str) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::Busy;
        }
        self.submitting = true;

        let outcome = match client.post(endpoint).json(&self.fields).send().await {
            Ok(response) => {
                let status = response.status();
                let message = response
                    .json::<serde_json::Value>()
                    .await
                    .ok()
                    .and_then(|body| {
                        body.get("message")
                            .and_then(|m| m.as_str())
                            .map(str::to_owned)
                    })
                    .unwrap_or_else(|| status.to_string());
                if status.is_success() {
                    SubmitOutcome::Accepted { message }
                } else {
                    SubmitOutcome::Rejected {
                        status: status.as_u16(),
                        message,
                    }
                }
            }
            Err(err) => SubmitOutcome::Failed(err.to_string()),
        };

        if matches!(outcome, SubmitOutcome::Accepted { .. }) {
            self.fields = FormFields::default();
        }
        self.submitting = false;
        outcome
    }
}
