//! Payroll Service
//!
//! This crate provides an HTTP service over the `roles` and `employees`
//! tables, plus the salary calculation derived from a role's base salary,
//! tax rate and benefits.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
