use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::states::handlers;
use crate::features::states::services::StateService;

/// Create routes for the states feature
pub fn routes(service: Arc<StateService>) -> Router {
    Router::new()
        .route(
            "/state/read",
            get(handlers::read_states).post(handlers::create_state),
        )
        .route(
            "/state",
            post(handlers::create_state).delete(handlers::delete_state_by_key),
        )
        .route(
            "/state/{id}",
            get(handlers::get_state)
                .put(handlers::update_state)
                .delete(handlers::delete_state),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use super::*;
    use crate::core::config::StoreConfig;
    use crate::modules::store::{DocumentStore, MemoryBackend};

    fn server() -> TestServer {
        let config = StoreConfig {
            database: "geo_test".to_string(),
            connect_retries: 1,
            retry_delay_ms: 0,
        };
        let store = Arc::new(DocumentStore::new(Arc::new(MemoryBackend::new()), &config));
        TestServer::new(routes(Arc::new(StateService::new(store)))).unwrap()
    }

    #[tokio::test]
    async fn create_and_read_states() {
        let server = server();
        let response = server
            .post("/state")
            .json(&json!({"name": "New York", "code": "NY", "country_code": "USA"}))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);

        let body: Value = server.get("/state/read").await.json();
        assert_eq!(body["Number of Records"], 1);
        assert_eq!(body["States"][0]["code"], "NY");
    }

    #[tokio::test]
    async fn duplicate_pair_is_a_400_error_body() {
        let server = server();
        let payload = json!({"name": "New York", "code": "NY", "country_code": "USA"});
        server.post("/state").json(&payload).await;

        let response = server.post("/state").json(&payload).await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["Error"]
            .as_str()
            .unwrap()
            .contains("country_code"));
    }

    #[tokio::test]
    async fn missing_required_field_is_rejected() {
        let server = server();
        let response = server
            .post("/state")
            .json(&json!({"name": "New York", "code": "NY"}))
            .await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_and_delete_by_id() {
        let server = server();
        let created: Value = server
            .post("/state")
            .json(&json!({"name": "Texas", "code": "TX", "country_code": "USA"}))
            .await
            .json();
        let id = created["id"].as_str().unwrap();

        let updated: Value = server
            .put(&format!("/state/{id}"))
            .json(&json!({"name": "Lone Star"}))
            .await
            .json();
        assert_eq!(updated["Message"], "Updated");

        let deleted: Value = server.delete(&format!("/state/{id}")).await.json();
        assert_eq!(deleted["Message"], "Deleted");

        server
            .get(&format!("/state/{id}"))
            .await
            .assert_status(axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn natural_key_delete() {
        let server = server();
        server
            .post("/state")
            .json(&json!({"name": "Texas", "code": "TX", "country_code": "USA"}))
            .await;

        let response = server
            .delete("/state")
            .json(&json!({"name": "Texas", "code": "TX"}))
            .await;
        response.assert_status(axum::http::StatusCode::OK);

        let body: Value = server.get("/state/read").await.json();
        assert_eq!(body["Number of Records"], 0);
    }
}
