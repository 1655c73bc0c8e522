use std::sync::Arc;

use crate::config::Config;
use crate::repositories::{DynamoEnvironmentRepository, EnvironmentStore};

/// Application state shared across invocations
#[derive(Clone)]
pub struct AppState {
    /// Environment storage backend
    pub store: Arc<dyn EnvironmentStore>,
}

impl AppState {
    /// Create a new AppState backed by the configured DynamoDB table
    pub async fn new(config: &Config) -> Self {
        let repository = DynamoEnvironmentRepository::from_config(config).await;
        tracing::info!(table = %config.environments_table, "DynamoDB client ready");

        Self {
            store: Arc::new(repository),
        }
    }

    /// Create AppState with a custom store (for testing)
    pub fn with_store(store: Arc<dyn EnvironmentStore>) -> Self {
        Self { store }
    }
}
