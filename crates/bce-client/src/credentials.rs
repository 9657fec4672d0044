use serde::{Deserialize, Serialize};

/// Access key pair used to sign requests against the BCE open APIs.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BceCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl BceCredentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
        }
    }

    /// Creates a new instance of `BceCredentials` from environment variables.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        let access_key_id = std::env::var("BCE_ACCESS_KEY_ID")?;
        let secret_access_key = std::env::var("BCE_SECRET_ACCESS_KEY")?;
        Ok(Self::new(access_key_id, secret_access_key))
    }
}
