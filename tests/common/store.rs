use async_trait::async_trait;

use environments_api::error::{AppError, AppResult};
use environments_api::models::Environment;
use environments_api::repositories::EnvironmentStore;

/// Store whose writes always fail, for exercising the fault path
pub struct FailingEnvironmentStore;

#[async_trait]
impl EnvironmentStore for FailingEnvironmentStore {
    async fn put(&self, _environment: &Environment) -> AppResult<()> {
        Err(AppError::StorageWrite(
            "ConditionalCheckFailedException: simulated outage".to_string(),
        ))
    }
}
