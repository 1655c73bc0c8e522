use std::sync::Arc;

use axum_test::TestServer;
use environments_api::build_router;
use environments_api::repositories::{EnvironmentStore, InMemoryEnvironmentRepository};
use environments_api::state::AppState;

/// Test application wrapper
#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    pub store: InMemoryEnvironmentRepository,
}

#[allow(dead_code)]
impl TestApp {
    /// Create a new test application over an in-memory store
    pub fn new() -> Self {
        let store = InMemoryEnvironmentRepository::new();
        let state = AppState::with_store(Arc::new(store.clone()));
        let server = Self::server(&state);

        Self {
            server,
            state,
            store,
        }
    }

    /// Create a test application over a custom store
    pub fn with_store(store: Arc<dyn EnvironmentStore>) -> Self {
        let state = AppState::with_store(store);
        let server = Self::server(&state);

        Self {
            server,
            state,
            store: InMemoryEnvironmentRepository::new(),
        }
    }

    fn server(state: &AppState) -> TestServer {
        let router = build_router(state.clone());
        TestServer::new(router).expect("Failed to create test server")
    }
}
