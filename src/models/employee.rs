//! Employee model and related types.
//!
//! This module defines the stored [`Employee`] and the [`NewEmployee`]
//! payload accepted by the add-employee endpoint.

use serde::{Deserialize, Serialize};

/// Represents a stored employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Storage-assigned identifier.
    pub id: i32,
    /// The employee's full name.
    pub name: String,
    /// The employee's email address.
    pub email: String,
    /// The role this employee is assigned to.
    pub role_id: i32,
}

/// An employee that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// The employee's full name.
    pub name: String,
    /// The employee's email address.
    pub email: String,
    /// The role this employee is assigned to. Must reference an existing role.
    pub role_id: i32,
}

impl NewEmployee {
    /// Attaches the identifier storage assigned to this employee.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_service::models::NewEmployee;
    ///
    /// let new = NewEmployee {
    ///     name: "John Smith".to_string(),
    ///     email: "john.smith@example.com".to_string(),
    ///     role_id: 2,
    /// };
    /// let stored = new.with_id(11);
    /// assert_eq!(stored.id, 11);
    /// assert_eq!(stored.role_id, 2);
    /// ```
    pub fn with_id(self, id: i32) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            role_id: self.role_id,
        }
    }
}
