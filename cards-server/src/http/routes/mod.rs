//! Route handlers organized by resource
//!
//! Every collection is served at both `/name` and `/name/`.

pub mod answers;
pub mod cards;
pub mod favorites;
pub mod goals;
pub mod health;
pub mod users;

use std::sync::Arc;

use axum::routing::MethodRouter;
use axum::Router;

use super::server::AppState;

/// Route a collection at its bare and trailing-slash paths.
pub(crate) fn collection(
    path: &str,
    methods: MethodRouter<Arc<AppState>>,
) -> Router<Arc<AppState>> {
    Router::new()
        .route(path, methods.clone())
        .route(&format!("{path}/"), methods)
}
