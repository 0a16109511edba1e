use std::sync::LazyLock;

use chrono::{SecondsFormat, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use validator::{Validate, ValidationError, ValidationErrors};

/// Syntactic email check: local-part@domain with at least one dot in
/// the domain. Deliberately loose; deliverability is not our problem.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// A contact form submission as received on the wire.
///
/// `subject` is free-form here; the enumerated set is a form-client
/// constraint only (see [`Subject`]).
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSubmission {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(length(min = 1), custom(function = "validate_email_format"))]
    pub email: String,
    #[validate(length(min = 1))]
    pub subject: String,
    #[validate(length(min = 1))]
    pub message: String,
}

fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}

/// Human-readable message for a failed validation.
///
/// Missing fields take precedence over a malformed email, matching the
/// check order the endpoint has always had.
pub fn validation_message(errors: &ValidationErrors) -> &'static str {
    let any_missing = errors
        .field_errors()
        .values()
        .any(|field| field.iter().any(|e| e.code == "length"));
    if any_missing {
        "All fields are required"
    } else {
        "Invalid email format"
    }
}

/// Subjects offered by the form client. The server does not enforce
/// this set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, AsRefStr, clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
pub enum Subject {
    Project,
    Collaboration,
    Consultation,
    #[default]
    Other,
}

/// The enriched record forwarded to the relay target.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub full_name: String,
    /// ISO-8601, set at receipt time.
    pub timestamp: String,
}

impl RelayRecord {
    pub fn new(submission: ContactSubmission) -> Self {
        let full_name = format!("{} {}", submission.first_name, submission.last_name);
        Self {
            first_name: submission.first_name,
            last_name: submission.last_name,
            email: submission.email,
            subject: submission.subject,
            message: submission.message,
            full_name,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> ContactSubmission {
        ContactSubmission {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "project".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(valid_submission().validate().is_ok());
    }

    #[test]
    fn test_email_format_table() {
        for email in ["jane@example.com", "a.b@c.co", "x+tag@sub.domain.org"] {
            assert!(EMAIL_RE.is_match(email), "{email} should be accepted");
        }
        for email in ["not-an-email", "a@b", "a@b@c.com", "a b@c.com", "@c.com", "a@.com"] {
            assert!(!EMAIL_RE.is_match(email), "{email} should be rejected");
        }
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut submission = valid_submission();
        submission.email = "a@b".to_string();
        let errors = submission.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert_eq!(validation_message(&errors), "Invalid email format");
    }

    #[test]
    fn test_missing_field_message_wins_over_email() {
        // Empty email fails both checks; the required-field message is
        // the one the caller sees.
        let mut submission = valid_submission();
        submission.email = String::new();
        let errors = submission.validate().unwrap_err();
        assert_eq!(validation_message(&errors), "All fields are required");
    }

    #[test]
    fn test_each_field_required() {
        for field in ["first_name", "last_name", "email", "subject", "message"] {
            let mut submission = valid_submission();
            match field {
                "first_name" => submission.first_name = String::new(),
                "last_name" => submission.last_name = String::new(),
                "email" => submission.email = String::new(),
                "subject" => submission.subject = String::new(),
                _ => submission.message = String::new(),
            }
            let errors = submission.validate().unwrap_err();
            assert!(
                errors.field_errors().contains_key(field),
                "{field} should be required"
            );
            assert_eq!(validation_message(&errors), "All fields are required");
        }
    }

    #[test]
    fn test_relay_record_enrichment() {
        let record = RelayRecord::new(valid_submission());
        assert_eq!(record.full_name, "Jane Doe");
        assert!(
            chrono::DateTime::parse_from_rfc3339(&record.timestamp).is_ok(),
            "timestamp should be ISO-8601: {}",
            record.timestamp
        );
    }

    #[test]
    fn test_relay_record_wire_shape() {
        let value = serde_json::to_value(RelayRecord::new(valid_submission())).unwrap();
        for key in [
            "firstName",
            "lastName",
            "email",
            "subject",
            "message",
            "fullName",
            "timestamp",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn test_subject_wire_values() {
        assert_eq!(Subject::Project.to_string(), "project");
        assert_eq!(Subject::Other.to_string(), "other");
        assert_eq!("consultation".parse::<Subject>().unwrap(), Subject::Consultation);
    }
}
