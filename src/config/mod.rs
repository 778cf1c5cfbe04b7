//! Configuration loading and management for the payroll service.
//!
//! This module loads the service configuration (listener, storage backend,
//! database pool and error policy) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_service::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Storage backend: {:?}", config.config().storage.backend);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DATABASE_URL_ENV};
pub use types::{
    DatabaseConfig, ErrorPolicy, ErrorsConfig, ServerConfig, ServiceConfig, StorageBackend,
    StorageConfig,
};
