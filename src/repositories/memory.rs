use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::Environment;
use crate::repositories::EnvironmentStore;

/// In-memory store for testing
#[derive(Clone, Default)]
pub struct InMemoryEnvironmentRepository {
    items: Arc<Mutex<HashMap<Uuid, Environment>>>,
}

impl InMemoryEnvironmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: Uuid) -> Option<Environment> {
        self.items.lock().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.lock().await.is_empty()
    }
}

#[async_trait]
impl EnvironmentStore for InMemoryEnvironmentRepository {
    async fn put(&self, environment: &Environment) -> AppResult<()> {
        self.items
            .lock()
            .await
            .insert(environment.id, environment.clone());
        Ok(())
    }
}
