// src/services/classifier.rs

use crate::models::TaxStatus;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::deadlines::VAT_THRESHOLD;

/// Turnover at which a company moves from the 20% to the 30% CIT rate.
pub const CIT_MEDIUM_THRESHOLD: Decimal = dec!(100_000_000);

/// Classify a turnover figure into its business tier and CIT rate.
/// Lower bounds are inclusive, upper bounds exclusive.
pub fn classify(turnover: Decimal) -> TaxStatus {
    if turnover < VAT_THRESHOLD {
        TaxStatus {
            label: "Small Business".to_string(),
            cit_rate: "0% CIT".to_string(),
        }
    } else if turnover < CIT_MEDIUM_THRESHOLD {
        TaxStatus {
            label: "Medium Business".to_string(),
            cit_rate: "20% CIT".to_string(),
        }
    } else {
        TaxStatus {
            label: "Large Business".to_string(),
            cit_rate: "30% CIT".to_string(),
        }
    }
}
