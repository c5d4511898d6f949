//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for persisted banner settings
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the stored settings. A missing store yields an empty config.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Replace the stored settings.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    fn path(&self) -> PathBuf;

    fn exists(&self) -> bool;

    /// Write [`AppConfig::defaults`]. Fails with
    /// [`ConfigError::AlreadyExists`] when settings are already stored.
    async fn init(&self) -> Result<(), ConfigError>;
}
