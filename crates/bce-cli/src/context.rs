use bce_client::api::aihc::AihcClient;
use bce_client::{BceClientConfig, BceCredentials, BceError};

use crate::app_config::{AppConfig, ConfigError};
use crate::terminal::Terminal;

#[derive(thiserror::Error, Debug)]
pub enum ClientCreationError {
    #[error("no credentials stored; run `bce login` first")]
    NoCredentials,
    #[error("the server rejected the stored credentials")]
    InvalidCredentials,
    #[error("failed to reach the server: {0}")]
    ServerConnectionError(String),
}

/// Everything a command handler needs: the terminal, persisted credentials
/// and the region/endpoint overrides from the global flags.
pub struct CliContext {
    terminal: Terminal,
    app_config: AppConfig,
    region: Option<String>,
    endpoint: Option<String>,
    credentials: Option<BceCredentials>,
}

impl CliContext {
    pub fn new(
        terminal: Terminal,
        region: Option<String>,
        endpoint: Option<String>,
    ) -> Result<Self, ConfigError> {
        let app_config = AppConfig::new()?;
        // Stored credentials win; the environment is the fallback so CI and
        // in-container continuations work without a login step.
        let credentials = app_config
            .load_credentials()?
            .or_else(|| BceCredentials::from_env().ok());

        Ok(Self {
            terminal,
            app_config,
            region,
            endpoint,
            credentials,
        })
    }

    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn set_credentials(&mut self, credentials: BceCredentials) -> anyhow::Result<()> {
        self.app_config.save_credentials(&credentials)?;
        self.credentials = Some(credentials);
        Ok(())
    }

    pub fn client_config(&self) -> Result<BceClientConfig, ClientCreationError> {
        let credentials = self
            .credentials
            .clone()
            .ok_or(ClientCreationError::NoCredentials)?;
        let mut builder = BceClientConfig::builder(credentials);
        if let Some(region) = &self.region {
            builder = builder.with_region(region);
        }
        if let Some(endpoint) = &self.endpoint {
            builder = builder.with_endpoint(endpoint);
        }
        Ok(builder.build())
    }

    /// Build an AIHC client and verify the credentials with a cheap signed
    /// call, so a bad key fails here instead of halfway through a command.
    pub fn create_aihc_client(&self) -> Result<AihcClient, ClientCreationError> {
        let client = AihcClient::new(self.client_config()?)
            .map_err(|e| ClientCreationError::ServerConnectionError(e.to_string()))?;

        match client.list_resource_pools(1, 1) {
            Ok(_) => Ok(client),
            Err(err) if is_denied(&err) => Err(ClientCreationError::InvalidCredentials),
            Err(err) => Err(ClientCreationError::ServerConnectionError(err.to_string())),
        }
    }
}

fn is_denied(err: &BceError) -> bool {
    matches!(
        err,
        BceError::Http(bce_client::http::error::BceHttpError::AccessDenied(_))
    )
}
