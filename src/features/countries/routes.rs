use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::countries::handlers;
use crate::features::countries::services::CountryService;

/// Create routes for the countries feature
pub fn routes(service: Arc<CountryService>) -> Router {
    Router::new()
        .route("/countries/read", get(handlers::read_countries))
        .route("/countries", post(handlers::create_country))
        .route("/countries/{id}", get(handlers::get_country))
        .with_state(service)
}
