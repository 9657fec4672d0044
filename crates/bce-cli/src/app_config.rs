use directories::ProjectDirs;
use std::{fs, io, path::PathBuf};

use bce_client::BceCredentials;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("Missing configuration directory")]
    MissingDirectory,
}

/// Credential storage under the platform config dir
/// (`~/.config/bce` on Linux).
pub struct AppConfig {
    base_dir: PathBuf,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let proj_dirs =
            ProjectDirs::from("com", "baidubce", "bce").ok_or(ConfigError::MissingDirectory)?;

        let config_dir = proj_dirs.config_dir().to_path_buf();
        fs::create_dir_all(&config_dir)?;

        Ok(Self {
            base_dir: config_dir,
        })
    }

    #[cfg(test)]
    fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    fn credentials_path(&self) -> PathBuf {
        self.base_dir.join("credentials.json")
    }

    pub fn save_credentials(&self, creds: &BceCredentials) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(creds)?;
        fs::write(self.credentials_path(), json)?;
        Ok(())
    }

    pub fn load_credentials(&self) -> Result<Option<BceCredentials>, ConfigError> {
        let path = self.credentials_path();
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let creds = serde_json::from_str(&contents)?;
            Ok(Some(creds))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::with_base_dir(dir.path().to_path_buf());

        assert!(config.load_credentials().unwrap().is_none());

        config
            .save_credentials(&BceCredentials::new("ak-123", "sk-456"))
            .unwrap();
        let loaded = config.load_credentials().unwrap().unwrap();
        assert_eq!(loaded.access_key_id, "ak-123");
        assert_eq!(loaded.secret_access_key, "sk-456");
    }
}
