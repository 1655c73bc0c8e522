use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::Client;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::Environment;
use crate::repositories::marshal::to_item;
use crate::repositories::EnvironmentStore;

/// Environment repository backed by a DynamoDB table
#[derive(Clone)]
pub struct DynamoEnvironmentRepository {
    client: Client,
    table: String,
}

impl std::fmt::Debug for DynamoEnvironmentRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamoEnvironmentRepository")
            .field("table", &self.table)
            .finish()
    }
}

impl DynamoEnvironmentRepository {
    pub fn new(client: Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    /// Build a client from the default AWS provider chain.
    /// `DYNAMODB_ENDPOINT` points it at DynamoDB Local when set.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(endpoint) = &config.dynamodb_endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        Self::new(Client::new(&sdk_config), &config.environments_table)
    }
}

#[async_trait]
impl EnvironmentStore for DynamoEnvironmentRepository {
    async fn put(&self, environment: &Environment) -> AppResult<()> {
        let item = to_item(environment)?;

        self.client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|err| {
                tracing::error!(
                    table = %self.table,
                    id = %environment.id,
                    error = %DisplayErrorContext(&err),
                    "DynamoDB put_item failed"
                );
                AppError::StorageWrite(err.to_string())
            })?;

        Ok(())
    }
}
