// src/services/paye.rs

use crate::{
    errors::{AppError, AppResult},
    models::{Employee, PayeResult},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Personal income tax bands under the Finance Act 2020, applied
/// marginally: each band consumes up to its width from the remaining
/// taxable income before the next band applies. The final band has no
/// upper bound.
const TAX_BANDS: [(Decimal, Decimal); 5] = [
    (dec!(300_000), dec!(0.07)),
    (dec!(300_000), dec!(0.11)),
    (dec!(500_000), dec!(0.15)),
    (dec!(500_000), dec!(0.19)),
    (dec!(1_600_000), dec!(0.21)),
];

const TOP_RATE: Decimal = dec!(0.24);

const CRA_FLOOR: Decimal = dec!(200_000);

pub struct PayeEngine;

impl PayeEngine {
    /// Compute annual PAYE withholding for one employee.
    ///
    /// Pure function of the input: no state, no I/O. Negative salaries
    /// are a validation error, never silently clamped to zero.
    pub fn compute_paye(employee: &Employee) -> AppResult<PayeResult> {
        let gross = employee.annual_gross_salary;
        if gross.is_sign_negative() {
            return Err(AppError::Validation(
                "Annual gross salary cannot be negative".to_string(),
            ));
        }

        // Consolidated Relief Allowance: the higher of ₦200,000 or 1% of
        // gross, PLUS 20% of gross. The two terms are summed, not compared.
        let cra = CRA_FLOOR.max(gross * dec!(0.01)) + gross * dec!(0.20);

        let taxable_income = (gross - cra).max(Decimal::ZERO);

        let mut tax = Decimal::ZERO;
        let mut remaining = taxable_income;
        for (width, rate) in TAX_BANDS {
            if remaining <= Decimal::ZERO {
                break;
            }
            let slice = remaining.min(width);
            tax += slice * rate;
            remaining -= slice;
        }
        // Everything above the banded ₦3.2M is taxed at the top rate
        if remaining > Decimal::ZERO {
            tax += remaining * TOP_RATE;
        }

        let effective_rate = if gross.is_zero() {
            Decimal::ZERO
        } else {
            tax / gross * dec!(100)
        };

        Ok(PayeResult {
            employee_id: employee.id,
            annual_gross: gross,
            cra,
            taxable_income,
            annual_tax: tax,
            monthly_tax: tax / dec!(12),
            effective_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn employee(gross: Decimal) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: "Test Employee".to_string(),
            annual_gross_salary: gross,
        }
    }

    #[test]
    fn zero_gross_hits_the_flat_relief_floor() {
        let result = PayeEngine::compute_paye(&employee(dec!(0))).unwrap();
        assert_eq!(result.cra, dec!(200_000));
        assert_eq!(result.taxable_income, dec!(0));
        assert_eq!(result.annual_tax, dec!(0));
        assert_eq!(result.monthly_tax, dec!(0));
        assert_eq!(result.effective_rate, dec!(0));
    }

    #[test]
    fn worked_example_2_4m_gross() {
        // cra = max(200000, 24000) + 480000 = 704,000
        // taxable = 1,696,000
        // tax = 300k*7% + 300k*11% + 500k*15% + 500k*19% + 96k*21% = 244,160
        let result = PayeEngine::compute_paye(&employee(dec!(2_400_000))).unwrap();
        assert_eq!(result.cra, dec!(704_000));
        assert_eq!(result.taxable_income, dec!(1_696_000));
        assert_eq!(result.annual_tax, dec!(244_160));
        assert_eq!(result.monthly_tax, dec!(244_160) / dec!(12));
    }

    #[test]
    fn one_percent_relief_overtakes_the_floor_above_20m() {
        let result = PayeEngine::compute_paye(&employee(dec!(30_000_000))).unwrap();
        // 1% of 30M = 300,000 > 200,000 floor
        assert_eq!(result.cra, dec!(300_000) + dec!(6_000_000));
    }

    #[test]
    fn salary_below_relief_pays_no_tax() {
        let result = PayeEngine::compute_paye(&employee(dec!(240_000))).unwrap();
        // cra = 200,000 + 48,000 = 248,000 > gross
        assert_eq!(result.taxable_income, dec!(0));
        assert_eq!(result.annual_tax, dec!(0));
    }

    #[test]
    fn top_band_engages_above_3_2m_taxable() {
        // gross 5,000,000 -> cra = 200,000 + 1,000,000 = 1,200,000
        // taxable = 3,800,000 -> banded 3,200,000 + 600,000 @ 24%
        let result = PayeEngine::compute_paye(&employee(dec!(5_000_000))).unwrap();
        let banded = dec!(300_000) * dec!(0.07)
            + dec!(300_000) * dec!(0.11)
            + dec!(500_000) * dec!(0.15)
            + dec!(500_000) * dec!(0.19)
            + dec!(1_600_000) * dec!(0.21);
        assert_eq!(result.annual_tax, banded + dec!(600_000) * dec!(0.24));
    }

    #[test]
    fn tax_is_non_decreasing_in_gross() {
        let grosses = [
            dec!(0),
            dec!(100_000),
            dec!(500_000),
            dec!(1_000_000),
            dec!(2_400_000),
            dec!(5_000_000),
            dec!(30_000_000),
            dec!(1_000_000_000),
        ];
        let mut previous = dec!(-1);
        for gross in grosses {
            let result = PayeEngine::compute_paye(&employee(gross)).unwrap();
            assert!(result.annual_tax >= Decimal::ZERO);
            assert!(result.taxable_income >= Decimal::ZERO);
            assert!(
                result.annual_tax >= previous,
                "tax decreased at gross {gross}"
            );
            previous = result.annual_tax;
        }
    }

    #[test]
    fn negative_salary_is_rejected() {
        let err = PayeEngine::compute_paye(&employee(dec!(-1))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
