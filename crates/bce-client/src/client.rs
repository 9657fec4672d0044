use crate::credentials::BceCredentials;

pub(crate) const DEFAULT_REGION: &str = "bj";

/// Configuration shared by every service client. Can be created using
/// [BceClientConfigBuilder], which is created using the
/// [BceClientConfig::builder] method.
#[derive(Debug, Clone)]
pub struct BceClientConfig {
    /// Explicit endpoint override. When unset, the endpoint is derived from
    /// the service name and region.
    pub endpoint: Option<String>,
    /// Region used to derive per-service endpoints.
    pub region: String,
    /// Access keys used to sign every request.
    pub credentials: BceCredentials,
    /// The number of retries to attempt on transport errors and 5xx replies.
    pub num_retries: u8,
    /// The base interval between retries in seconds, doubled per attempt.
    pub retry_interval: u64,
    /// Validity window of each signature in seconds.
    pub expiration_in_seconds: u32,
}

impl BceClientConfig {
    /// Create a new [BceClientConfigBuilder] with the given credentials.
    pub fn builder(credentials: BceCredentials) -> BceClientConfigBuilder {
        BceClientConfigBuilder::new(credentials)
    }

    /// Resolve the endpoint for a service, e.g. `https://aihc.bj.baidubce.com`.
    pub fn endpoint_for(&self, service: &str) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://{}.{}.baidubce.com", service, self.region),
        }
    }
}

/// Builder for the BceClientConfig
pub struct BceClientConfigBuilder {
    config: BceClientConfig,
}

impl BceClientConfigBuilder {
    pub(crate) fn new(credentials: BceCredentials) -> BceClientConfigBuilder {
        BceClientConfigBuilder {
            config: BceClientConfig {
                endpoint: None,
                region: DEFAULT_REGION.into(),
                credentials,
                num_retries: 3,
                retry_interval: 1,
                expiration_in_seconds: 1800,
            },
        }
    }

    /// Override the endpoint instead of deriving it from service and region.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> BceClientConfigBuilder {
        self.config.endpoint = Some(endpoint.into());
        self
    }

    /// Set the region used to derive per-service endpoints.
    pub fn with_region(mut self, region: impl Into<String>) -> BceClientConfigBuilder {
        self.config.region = region.into();
        self
    }

    /// Set the number of retries to attempt on retryable failures.
    pub fn with_num_retries(mut self, num_retries: u8) -> BceClientConfigBuilder {
        self.config.num_retries = num_retries;
        self
    }

    /// Set the base interval to wait between retries in seconds.
    pub fn with_retry_interval(mut self, retry_interval: u64) -> BceClientConfigBuilder {
        self.config.retry_interval = retry_interval;
        self
    }

    /// Set the validity window of each request signature.
    pub fn with_expiration_in_seconds(mut self, expiration: u32) -> BceClientConfigBuilder {
        self.config.expiration_in_seconds = expiration;
        self
    }

    /// Build the BceClientConfig
    pub fn build(self) -> BceClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BceClientConfig {
        BceClientConfig::builder(BceCredentials::new("ak", "sk")).build()
    }

    #[test]
    fn endpoint_derived_from_service_and_region() {
        let config = config();
        assert_eq!(config.endpoint_for("aihc"), "https://aihc.bj.baidubce.com");
        assert_eq!(config.endpoint_for("dns"), "https://dns.bj.baidubce.com");
    }

    #[test]
    fn explicit_endpoint_wins() {
        let config = BceClientConfig::builder(BceCredentials::new("ak", "sk"))
            .with_region("gz")
            .with_endpoint("http://10.0.0.2:8680")
            .build();
        assert_eq!(config.endpoint_for("bts"), "http://10.0.0.2:8680");
    }
}
