//! Core data models for the payroll service.
//!
//! This module contains the domain models stored in and read from the
//! `roles` and `employees` tables.

mod employee;
mod role;

pub use employee::{Employee, NewEmployee};
pub use role::{Compensation, NewRole, Role};
