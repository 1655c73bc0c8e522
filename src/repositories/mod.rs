pub mod dynamodb;
pub mod marshal;
pub mod memory;

pub use dynamodb::DynamoEnvironmentRepository;
pub use memory::InMemoryEnvironmentRepository;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::Environment;

/// Storage backend for environment items
#[async_trait]
pub trait EnvironmentStore: Send + Sync {
    /// Insert a single item. Failures map to `AppError::StorageWrite`.
    async fn put(&self, environment: &Environment) -> AppResult<()>;
}
