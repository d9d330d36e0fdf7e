use crate::client::ClubhouseClient;
use crate::config::{get_api_token, load_config, save_config};
use crate::error::{ClubhouseError, ClubhouseResult};
use std::sync::Arc;

/// Central context for CLI operations, managing configuration and client instances
pub struct CliContext {
    api_token: Option<String>,
    client: Option<Arc<ClubhouseClient>>,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new() -> Self {
        Self {
            api_token: None,
            client: None,
        }
    }

    /// Load context from saved configuration
    pub fn load() -> ClubhouseResult<Self> {
        let api_token = get_api_token().ok();
        let client = api_token
            .as_ref()
            .map(|token| Arc::new(ClubhouseClient::new(token.clone())));

        Ok(Self { api_token, client })
    }

    /// Get or create a client (requires an API token)
    pub fn verified_client(&mut self) -> ClubhouseResult<Arc<ClubhouseClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let api_token = self.api_token()?.clone();
        let client = Arc::new(ClubhouseClient::new(api_token));
        self.client = Some(client.clone());
        Ok(client)
    }

    /// Get the API token, loading from config if necessary
    pub fn api_token(&mut self) -> ClubhouseResult<&String> {
        if self.api_token.is_none() {
            self.api_token = Some(get_api_token().map_err(|_| ClubhouseError::TokenNotFound)?);
        }

        self.api_token.as_ref().ok_or(ClubhouseError::TokenNotFound)
    }

    /// Set and save a new API token
    pub fn set_api_token(&mut self, api_token: String) -> ClubhouseResult<()> {
        let mut config = load_config();
        config.api_token = Some(api_token.clone());
        save_config(&config).map_err(|e| ClubhouseError::ConfigError(e.to_string()))?;
        self.api_token = Some(api_token.clone());
        self.client = Some(Arc::new(ClubhouseClient::new(api_token)));
        Ok(())
    }

    /// Check if context has an API token available
    pub fn has_api_token(&self) -> bool {
        self.api_token.is_some() || get_api_token().is_ok()
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating CLI contexts with specific configurations
pub struct CliContextBuilder {
    api_token: Option<String>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self { api_token: None }
    }

    pub fn with_api_token(mut self, api_token: String) -> Self {
        self.api_token = Some(api_token);
        self
    }

    pub fn build(self) -> ClubhouseResult<CliContext> {
        let context = if let Some(api_token) = self.api_token {
            let client = Some(Arc::new(ClubhouseClient::new(api_token.clone())));
            CliContext {
                api_token: Some(api_token),
                client,
            }
        } else {
            CliContext::load()?
        };

        Ok(context)
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_with_token() {
        let context = CliContextBuilder::new()
            .with_api_token("test-token".to_string())
            .build();

        assert!(context.is_ok());
        let mut context = context.unwrap();
        assert!(context.has_api_token());
        assert_eq!(context.api_token().unwrap(), "test-token");
    }

    #[test]
    fn test_verified_client_with_token() {
        let mut context = CliContextBuilder::new()
            .with_api_token("test-token".to_string())
            .build()
            .unwrap();

        assert!(context.verified_client().is_ok());
        // Getting the client again reuses the same instance
        assert!(context.verified_client().is_ok());
    }
}
