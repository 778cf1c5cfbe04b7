//! PostgreSQL implementation of [`PayrollStore`].

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use tracing::{info, instrument};

use crate::config::DatabaseConfig;
use crate::error::ServiceResult;
use crate::models::{Compensation, Employee, NewEmployee, NewRole, Role};

use super::PayrollStore;

/// Creates a new database connection pool.
pub async fn create_pool(config: &DatabaseConfig) -> ServiceResult<PgPool> {
    info!(
        max_connections = config.max_connections,
        "Creating database connection pool"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect(&config.url)
        .await?;

    info!("Database connection pool created successfully");
    Ok(pool)
}

/// [`PayrollStore`] backed by a PostgreSQL pool.
///
/// Statements run outside explicit transactions, so each write is committed
/// by the time the query returns.
#[derive(Debug, Clone)]
pub struct PgPayrollStore {
    pool: PgPool,
}

impl PgPayrollStore {
    /// Wraps an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn role_from_row(row: &PgRow) -> Result<Role, sqlx::Error> {
    Ok(Role {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        base_salary: row.try_get("base_salary")?,
        tax_rate: row.try_get("tax_rate")?,
        benefits: row.try_get("benefits")?,
    })
}

fn employee_from_row(row: &PgRow) -> Result<Employee, sqlx::Error> {
    Ok(Employee {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        role_id: row.try_get("role_id")?,
    })
}

#[async_trait]
impl PayrollStore for PgPayrollStore {
    #[instrument(skip(self))]
    async fn find_compensation(&self, role_id: i32) -> ServiceResult<Option<Compensation>> {
        let row = sqlx::query("SELECT base_salary, tax_rate, benefits FROM roles WHERE id = $1")
            .bind(role_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Compensation {
                base_salary: row.try_get("base_salary")?,
                tax_rate: row.try_get("tax_rate")?,
                benefits: row.try_get("benefits")?,
            })),
            None => Ok(None),
        }
    }

    #[instrument(skip(self, employee), fields(role_id = employee.role_id))]
    async fn insert_employee(&self, employee: &NewEmployee) -> ServiceResult<Employee> {
        let row = sqlx::query(
            r#"
            INSERT INTO employees (name, email, role_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(employee.role_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(employee.clone().with_id(row.try_get("id")?))
    }

    #[instrument(skip(self))]
    async fn list_employees(&self) -> ServiceResult<Vec<Employee>> {
        let rows = sqlx::query("SELECT id, name, email, role_id FROM employees ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let employees = rows
            .iter()
            .map(employee_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(employees)
    }

    #[instrument(skip(self, role), fields(name = %role.name))]
    async fn insert_role(&self, role: &NewRole) -> ServiceResult<Role> {
        let row = sqlx::query(
            r#"
            INSERT INTO roles (name, base_salary, tax_rate, benefits)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, base_salary, tax_rate, benefits
            "#,
        )
        .bind(&role.name)
        .bind(role.base_salary)
        .bind(role.tax_rate)
        .bind(role.benefits)
        .fetch_one(&self.pool)
        .await?;

        Ok(role_from_row(&row)?)
    }

    #[instrument(skip(self))]
    async fn list_roles(&self) -> ServiceResult<Vec<Role>> {
        let rows = sqlx::query(
            "SELECT id, name, base_salary, tax_rate, benefits FROM roles ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let roles = rows
            .iter()
            .map(role_from_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(roles)
    }
}
