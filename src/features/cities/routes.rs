use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::cities::handlers;
use crate::features::cities::services::CityService;

/// Create routes for the cities feature
///
/// `POST /cities/read` is kept alongside `POST /cities` for compatibility
/// with clients that create through the read path.
pub fn routes(service: Arc<CityService>) -> Router {
    Router::new()
        .route(
            "/cities/read",
            get(handlers::read_cities).post(handlers::create_city),
        )
        .route(
            "/cities",
            post(handlers::create_city).delete(handlers::delete_city_by_key),
        )
        .route(
            "/cities/{id}",
            get(handlers::get_city)
                .put(handlers::update_city)
                .delete(handlers::delete_city),
        )
        .with_state(service)
}
