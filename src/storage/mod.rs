//! Storage layer for the payroll service.
//!
//! The [`PayrollStore`] trait is the storage-handle provider the request
//! handlers talk to. Every method issues exactly one statement; writes are
//! committed before the method returns.

mod memory;
mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::{ServiceConfig, StorageBackend};
use crate::error::ServiceResult;
use crate::models::{Compensation, Employee, NewEmployee, NewRole, Role};

pub use memory::MemoryStore;
pub use postgres::{create_pool, PgPayrollStore};

/// Access to the `roles` and `employees` tables.
#[async_trait]
pub trait PayrollStore: Send + Sync {
    /// Reads the compensation parameters of one role, if it exists.
    async fn find_compensation(&self, role_id: i32) -> ServiceResult<Option<Compensation>>;

    /// Inserts an employee and returns it with its assigned id.
    ///
    /// Fails with `ConstraintViolation` if `role_id` references no role.
    async fn insert_employee(&self, employee: &NewEmployee) -> ServiceResult<Employee>;

    /// Reads every employee, ordered by id.
    async fn list_employees(&self) -> ServiceResult<Vec<Employee>>;

    /// Inserts a role and returns it with its assigned id.
    async fn insert_role(&self, role: &NewRole) -> ServiceResult<Role>;

    /// Reads every role, ordered by id.
    async fn list_roles(&self) -> ServiceResult<Vec<Role>>;
}

/// Builds the store selected by the configuration.
pub async fn connect(config: &ServiceConfig) -> ServiceResult<Arc<dyn PayrollStore>> {
    match config.storage.backend {
        StorageBackend::Postgres => {
            let pool = create_pool(&config.database).await?;
            Ok(Arc::new(PgPayrollStore::new(pool)))
        }
        StorageBackend::Memory => {
            info!("Using in-memory storage; data will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
