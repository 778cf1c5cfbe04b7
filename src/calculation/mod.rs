//! Calculation logic for the payroll service.
//!
//! This module contains the salary calculation that turns a role's base
//! salary, tax rate and benefits into a net salary and withheld taxes.

mod salary;

pub use salary::{calculate_compensation, calculate_salary, SalaryBreakdown};
