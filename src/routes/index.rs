use axum::response::IntoResponse;

/// GET / - Service identification
///
/// The portfolio pages themselves are served by the static frontend;
/// this backend only exposes the contact API.
pub async fn page() -> impl IntoResponse {
    "Portfolio contact service"
}
