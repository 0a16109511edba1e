pub mod config;
pub mod contact;
pub mod error;
pub mod form;
pub mod observability;
pub mod relay;
pub mod routes;

pub use routes::AppState;

/// Create the app router
///
/// Useful for integration testing without binding a listener.
pub fn create_app(state: AppState) -> axum::Router {
    routes::router(state).layer(tower_http::trace::TraceLayer::new_for_http())
}
