use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::contact::{ContactSubmission, RelayRecord, validation_message};
use crate::error::AppError;
use crate::relay;
use crate::routes::AppState;

/// POST /api/contact
///
/// Validates the submission and relays it once, best-effort. A relay
/// failure never fails the caller: once validation passes the response
/// is 200 regardless of the webhook's availability.
pub async fn action(
    State(state): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // Malformed body is an unexpected fault, not a validation failure
    let Json(submission) = payload
        .map_err(|rejection| AppError::Unexpected(format!("malformed request body: {rejection}")))?;

    if let Err(errors) = submission.validate() {
        return Err(AppError::Validation(validation_message(&errors).to_string()));
    }

    let record = RelayRecord::new(submission);
    let outcome = state.relay.deliver(&record).await;
    relay::log_outcome(&outcome, &record);

    Ok(Json(json!({
        "message": "Contact form submitted successfully",
        "success": true
    })))
}
