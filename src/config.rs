use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub environments_table: String,
    pub dynamodb_endpoint: Option<String>,

    // Server (local only)
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if exists

        let environments_table = env::var("ENVIRONMENTS_TABLE")
            .map_err(|_| ConfigError::Missing("ENVIRONMENTS_TABLE"))?;
        if environments_table.trim().is_empty() {
            return Err(ConfigError::Invalid("ENVIRONMENTS_TABLE"));
        }

        Ok(Self {
            // Storage
            environments_table,
            dynamodb_endpoint: env::var("DYNAMODB_ENDPOINT")
                .ok()
                .filter(|endpoint| !endpoint.is_empty()),

            // Server
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT"))?,
        })
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid environment variable: {0}")]
    Invalid(&'static str),
}
