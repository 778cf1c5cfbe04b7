//! Salary calculation functionality.
//!
//! This module derives an employee's yearly salary and withheld taxes from
//! the compensation parameters of their role.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};
use crate::models::Compensation;

/// The result of a salary calculation.
///
/// Both amounts are serialized as JSON floating-point numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Net salary: base salary minus taxes plus benefits.
    #[serde(with = "rust_decimal::serde::float")]
    pub salary: Decimal,
    /// Taxes withheld from the base salary.
    #[serde(with = "rust_decimal::serde::float")]
    pub taxes: Decimal,
}

/// Calculates the salary and taxes for a role's compensation parameters.
///
/// `taxes = base_salary * tax_rate` and
/// `salary = base_salary - taxes + benefits`, computed exactly in decimal
/// arithmetic. The tax rate is not range-checked: a negative rate or one
/// above 1 produces a consistent, if odd, result.
///
/// Returns `ServiceError::Arithmetic` if an intermediate amount does not fit
/// in a `Decimal`.
///
/// # Examples
///
/// ```
/// use payroll_service::calculation::calculate_salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_salary(
///     Decimal::from_str("75000.00").unwrap(),
///     Decimal::from_str("0.30").unwrap(),
///     Decimal::from_str("10000.00").unwrap(),
/// )
/// .unwrap();
/// assert_eq!(result.taxes, Decimal::from_str("22500.00").unwrap());
/// assert_eq!(result.salary, Decimal::from_str("62500.00").unwrap());
/// ```
pub fn calculate_salary(
    base_salary: Decimal,
    tax_rate: Decimal,
    benefits: Decimal,
) -> ServiceResult<SalaryBreakdown> {
    let taxes = base_salary
        .checked_mul(tax_rate)
        .ok_or_else(|| ServiceError::Arithmetic {
            message: format!("taxes = {} * {}", base_salary, tax_rate),
        })?;
    let salary = base_salary
        .checked_sub(taxes)
        .and_then(|net| net.checked_add(benefits))
        .ok_or_else(|| ServiceError::Arithmetic {
            message: format!("salary = {} - {} + {}", base_salary, taxes, benefits),
        })?;

    Ok(SalaryBreakdown { salary, taxes })
}

/// Calculates the salary and taxes for a role's [`Compensation`].
pub fn calculate_compensation(compensation: &Compensation) -> ServiceResult<SalaryBreakdown> {
    calculate_salary(
        compensation.base_salary,
        compensation.tax_rate,
        compensation.benefits,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn decimal(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_manager_example() {
        let result =
            calculate_salary(decimal("75000.00"), decimal("0.30"), decimal("10000.00")).unwrap();
        assert_eq!(result.taxes, decimal("22500.00"));
        assert_eq!(result.salary, decimal("62500.00"));
    }

    #[test]
    fn test_zero_tax_rate_keeps_base_plus_benefits() {
        let result = calculate_salary(decimal("50000"), Decimal::ZERO, decimal("2500")).unwrap();
        assert_eq!(result.taxes, Decimal::ZERO);
        assert_eq!(result.salary, decimal("52500"));
    }

    #[test]
    fn test_full_tax_rate_leaves_only_benefits() {
        let result = calculate_salary(decimal("50000"), Decimal::ONE, decimal("2500")).unwrap();
        assert_eq!(result.taxes, decimal("50000"));
        assert_eq!(result.salary, decimal("2500"));
    }

    #[test]
    fn test_out_of_range_tax_rate_is_not_rejected() {
        let result = calculate_salary(decimal("1000"), decimal("1.5"), Decimal::ZERO).unwrap();
        assert_eq!(result.taxes, decimal("1500"));
        assert_eq!(result.salary, decimal("-500"));

        let result = calculate_salary(decimal("1000"), decimal("-0.1"), Decimal::ZERO).unwrap();
        assert_eq!(result.taxes, decimal("-100"));
        assert_eq!(result.salary, decimal("1100"));
    }

    #[test]
    fn test_calculate_compensation_matches_calculate_salary() {
        let compensation = Compensation {
            base_salary: decimal("64000.00"),
            tax_rate: decimal("0.22"),
            benefits: decimal("1200.00"),
        };

        assert_eq!(
            calculate_compensation(&compensation).unwrap(),
            calculate_salary(decimal("64000.00"), decimal("0.22"), decimal("1200.00")).unwrap()
        );
    }

    #[test]
    fn test_tax_overflow_is_an_error() {
        let result = calculate_salary(Decimal::MAX, decimal("2"), Decimal::ZERO);
        match result {
            Err(ServiceError::Arithmetic { message }) => assert!(message.starts_with("taxes")),
            other => panic!("expected Arithmetic, got {:?}", other),
        }
    }

    #[test]
    fn test_salary_overflow_is_an_error() {
        let result = calculate_salary(Decimal::MAX, Decimal::ZERO, Decimal::ONE);
        match result {
            Err(ServiceError::Arithmetic { message }) => assert!(message.starts_with("salary")),
            other => panic!("expected Arithmetic, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_tax_overflow_is_an_error() {
        let result = calculate_salary(Decimal::MAX, decimal("-1"), Decimal::ZERO);
        assert!(matches!(result, Err(ServiceError::Arithmetic { .. })));
    }

    #[test]
    fn test_breakdown_serializes_as_numbers() {
        let result =
            calculate_salary(decimal("75000.00"), decimal("0.30"), decimal("10000.00")).unwrap();
        let value = serde_json::to_value(result).unwrap();
        assert_eq!(value["salary"].as_f64(), Some(62500.0));
        assert_eq!(value["taxes"].as_f64(), Some(22500.0));
    }

    proptest! {
        #[test]
        fn prop_salary_formula_holds_exactly(
            base_cents in 0i64..100_000_000,
            rate_hundredths in 0i64..=100,
            benefit_cents in 0i64..10_000_000,
        ) {
            let base_salary = Decimal::new(base_cents, 2);
            let tax_rate = Decimal::new(rate_hundredths, 2);
            let benefits = Decimal::new(benefit_cents, 2);

            let result = calculate_salary(base_salary, tax_rate, benefits).unwrap();

            prop_assert_eq!(result.taxes, base_salary * tax_rate);
            prop_assert_eq!(result.salary, base_salary - result.taxes + benefits);
            prop_assert_eq!(result.salary + result.taxes, base_salary + benefits);
        }
    }
}
