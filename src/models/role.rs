//! Role model and related types.
//!
//! A role is the compensation template employees are assigned to: a base
//! salary, a tax rate and a flat benefits amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stored role, as returned by the role listing.
///
/// Monetary fields are serialized as JSON floating-point numbers whatever
/// precision the storage keeps them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Storage-assigned identifier.
    pub id: i32,
    /// The role's display name.
    pub name: String,
    /// Yearly base salary.
    #[serde(with = "rust_decimal::serde::float")]
    pub base_salary: Decimal,
    /// Fraction of the base salary withheld as tax.
    #[serde(with = "rust_decimal::serde::float")]
    pub tax_rate: Decimal,
    /// Flat benefits added on top of the net salary.
    #[serde(with = "rust_decimal::serde::float")]
    pub benefits: Decimal,
}

impl Role {
    /// Returns the compensation parameters of this role.
    pub fn compensation(&self) -> Compensation {
        Compensation {
            base_salary: self.base_salary,
            tax_rate: self.tax_rate,
            benefits: self.benefits,
        }
    }
}

/// A role that has not been stored yet.
///
/// Numeric fields accept JSON numbers or decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRole {
    /// The role's display name.
    pub name: String,
    /// Yearly base salary.
    pub base_salary: Decimal,
    /// Fraction of the base salary withheld as tax.
    pub tax_rate: Decimal,
    /// Flat benefits added on top of the net salary.
    pub benefits: Decimal,
}

/// The subset of a role the salary calculation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compensation {
    /// Yearly base salary.
    pub base_salary: Decimal,
    /// Fraction of the base salary withheld as tax.
    pub tax_rate: Decimal,
    /// Flat benefits added on top of the net salary.
    pub benefits: Decimal,
}
