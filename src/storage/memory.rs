//! In-process implementation of [`PayrollStore`].

use async_trait::async_trait;
use parking_lot::Mutex;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ServiceError, ServiceResult};
use crate::models::{Compensation, Employee, NewEmployee, NewRole, Role};

use super::PayrollStore;

/// Length of the `VARCHAR(50)` text columns.
const TEXT_COLUMN_LENGTH: usize = 50;

/// Digits left of the point in `NUMERIC(10, 2)`.
const MONEY_INTEGER_DIGITS: u32 = 8;

/// Digits left of the point in `NUMERIC(4, 2)`.
const RATE_INTEGER_DIGITS: u32 = 2;

/// Applies a `VARCHAR(50)` column limit.
fn fit_text(value: &str) -> ServiceResult<String> {
    if value.chars().count() > TEXT_COLUMN_LENGTH {
        return Err(ServiceError::ConstraintViolation {
            message: format!(
                "value too long for type character varying({})",
                TEXT_COLUMN_LENGTH
            ),
        });
    }
    Ok(value.to_string())
}

/// Rounds to the column's two-digit scale and rejects values whose integer
/// part does not fit, like a PostgreSQL `NUMERIC(p, 2)` column.
fn fit_numeric(value: Decimal, integer_digits: u32) -> ServiceResult<Decimal> {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let limit = Decimal::from(10u64.pow(integer_digits));
    if rounded.abs() >= limit {
        return Err(ServiceError::ConstraintViolation {
            message: "numeric field overflow".to_string(),
        });
    }
    Ok(rounded)
}

#[derive(Debug, Default)]
struct Tables {
    roles: Vec<Role>,
    employees: Vec<Employee>,
    last_role_id: i32,
    last_employee_id: i32,
}

/// [`PayrollStore`] keeping both tables in process memory.
///
/// Ids are assigned sequentially starting at 1, rows are kept in insertion
/// order, and `employees.role_id` is checked against the stored roles the
/// same way the PostgreSQL foreign key is. Text and numeric values are held
/// to the same column limits as `sql/schema.sql`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PayrollStore for MemoryStore {
    async fn find_compensation(&self, role_id: i32) -> ServiceResult<Option<Compensation>> {
        let tables = self.tables.lock();
        Ok(tables
            .roles
            .iter()
            .find(|role| role.id == role_id)
            .map(Role::compensation))
    }

    async fn insert_employee(&self, employee: &NewEmployee) -> ServiceResult<Employee> {
        let row = NewEmployee {
            name: fit_text(&employee.name)?,
            email: fit_text(&employee.email)?,
            role_id: employee.role_id,
        };

        let mut tables = self.tables.lock();

        if !tables.roles.iter().any(|role| role.id == row.role_id) {
            return Err(ServiceError::ConstraintViolation {
                message: format!(
                    "insert or update on table \"employees\" violates foreign key constraint \
                     \"employees_role_id_fkey\": \
                     Key (role_id)=({}) is not present in table \"roles\"",
                    row.role_id
                ),
            });
        }

        tables.last_employee_id += 1;
        let stored = row.with_id(tables.last_employee_id);
        tables.employees.push(stored.clone());
        Ok(stored)
    }

    async fn list_employees(&self) -> ServiceResult<Vec<Employee>> {
        Ok(self.tables.lock().employees.clone())
    }

    async fn insert_role(&self, role: &NewRole) -> ServiceResult<Role> {
        let name = fit_text(&role.name)?;
        let base_salary = fit_numeric(role.base_salary, MONEY_INTEGER_DIGITS)?;
        let tax_rate = fit_numeric(role.tax_rate, RATE_INTEGER_DIGITS)?;
        let benefits = fit_numeric(role.benefits, MONEY_INTEGER_DIGITS)?;

        let mut tables = self.tables.lock();

        tables.last_role_id += 1;
        let stored = Role {
            id: tables.last_role_id,
            name,
            base_salary,
            tax_rate,
            benefits,
        };
        tables.roles.push(stored.clone());
        Ok(stored)
    }

    async fn list_roles(&self) -> ServiceResult<Vec<Role>> {
        Ok(self.tables.lock().roles.clone())
    }
}
