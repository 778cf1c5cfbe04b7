//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{ServiceError, ServiceResult};

use super::types::ServiceConfig;

/// Environment variable that, when set, overrides `database.url`.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Loads and provides access to the service configuration.
///
/// # Example
///
/// ```no_run
/// use payroll_service::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml")?;
/// println!("Listening on port {}", loader.config().server.port);
/// # Ok::<(), payroll_service::error::ServiceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not valid YAML for [`ServiceConfig`].
    /// The `DATABASE_URL` environment variable, if set, replaces the
    /// database URL from the file.
    pub fn load<P: AsRef<Path>>(path: P) -> ServiceResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ServiceError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let mut loader = Self::from_yaml_str(&content).map_err(|e| match e {
            ServiceError::ConfigParseError { message, .. } => ServiceError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })?;

        if let Ok(url) = std::env::var(DATABASE_URL_ENV) {
            loader.config.database.url = url;
        }

        Ok(loader)
    }

    /// Parses configuration from a YAML document.
    pub fn from_yaml_str(content: &str) -> ServiceResult<Self> {
        let config = serde_yaml::from_str::<Option<ServiceConfig>>(content)
            .map_err(|e| ServiceError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?
            .unwrap_or_default();

        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> ServiceConfig {
        self.config
    }
}
