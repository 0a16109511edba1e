use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::relay::ContactRelay;

mod contact;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub relay: Arc<dyn ContactRelay>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index::page))
        .route("/health", get(health::health))
        .route("/api/contact", post(contact::action))
        .with_state(state)
}
