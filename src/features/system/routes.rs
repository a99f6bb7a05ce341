use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::cities::CityService;
use crate::features::countries::CountryService;
use crate::features::states::StateService;
use crate::features::system::handlers;
use crate::modules::store::DocumentStore;

/// Shared handle bundle for the cross-cutting endpoints.
pub struct SystemState {
    pub store: Arc<DocumentStore>,
    pub cities: Arc<CityService>,
    pub states: Arc<StateService>,
    pub countries: Arc<CountryService>,
}

/// Every route the server mounts. `/endpoints` serves this list; keep it
/// in sync when adding routes.
pub fn endpoint_catalog() -> Vec<String> {
    [
        "/cities",
        "/cities/read",
        "/cities/{id}",
        "/countries",
        "/countries/read",
        "/countries/{id}",
        "/counts",
        "/endpoints",
        "/health",
        "/hello",
        "/state",
        "/state/read",
        "/state/{id}",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// Create routes for the system feature
pub fn routes(state: Arc<SystemState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/counts", get(handlers::counts))
        .route("/hello", get(handlers::hello))
        .route("/endpoints", get(handlers::endpoints))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use super::*;
    use crate::core::config::StoreConfig;
    use crate::modules::store::MemoryBackend;

    fn server() -> TestServer {
        let config = StoreConfig {
            database: "geo_test".to_string(),
            connect_retries: 1,
            retry_delay_ms: 0,
        };
        let store = Arc::new(DocumentStore::new(Arc::new(MemoryBackend::new()), &config));
        let cities = Arc::new(CityService::new(store.clone()));
        let states = Arc::new(StateService::new(store.clone()));
        let countries = Arc::new(CountryService::new());

        let system = Arc::new(SystemState {
            store,
            cities: cities.clone(),
            states: states.clone(),
            countries,
        });

        let app = Router::new()
            .merge(routes(system))
            .merge(crate::features::cities::routes::routes(cities))
            .merge(crate::features::states::routes::routes(states));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let server = server();
        let body: Value = server.get("/health").await.json();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn counts_reflect_all_three_resources() {
        let server = server();
        server
            .post("/cities")
            .json(&json!({"name": "Austin", "state_code": "TX"}))
            .await;
        server
            .post("/state")
            .json(&json!({"name": "Texas", "code": "TX", "country_code": "USA"}))
            .await;

        let body: Value = server.get("/counts").await.json();
        assert_eq!(body["cities"], 1);
        assert_eq!(body["states"], 1);
        assert_eq!(body["countries"], 3);
    }

    #[tokio::test]
    async fn hello_world() {
        let server = server();
        let body: Value = server.get("/hello").await.json();
        assert_eq!(body["hello"], "world");
    }

    #[tokio::test]
    async fn endpoint_catalog_is_sorted() {
        let server = server();
        let body: Value = server.get("/endpoints").await.json();
        let listed: Vec<&str> = body["Available endpoints"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        let mut sorted = listed.clone();
        sorted.sort();
        assert_eq!(listed, sorted);
        assert!(listed.contains(&"/cities/read"));
    }
}
