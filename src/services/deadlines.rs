// src/services/deadlines.rs

use crate::{
    errors::{AppError, AppResult},
    models::{BusinessProfile, DeadlineStatus, DeadlineType, TaxDeadline},
};
use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Annual turnover at which VAT registration becomes mandatory.
pub const VAT_THRESHOLD: Decimal = dec!(25_000_000);

pub struct DeadlineScheduler;

impl DeadlineScheduler {
    /// Derive the upcoming statutory filing obligations for a business,
    /// sorted ascending by due date. Pure function of the profile and
    /// the reference date; every entry starts out `Pending` — marking
    /// deadlines completed or overdue is the consumer's concern.
    pub fn generate_deadlines(
        profile: &BusinessProfile,
        reference_date: NaiveDate,
    ) -> AppResult<Vec<TaxDeadline>> {
        if profile.annual_turnover.is_sign_negative() {
            return Err(AppError::Validation(
                "Annual turnover cannot be negative".to_string(),
            ));
        }

        let mut deadlines = Vec::new();

        // VAT: monthly returns by the 21st, only above the registration
        // threshold. Returns are filed in arrears, so each entry is
        // titled after the previous month.
        if profile.annual_turnover >= VAT_THRESHOLD {
            for i in 0..3 {
                deadlines.push(TaxDeadline {
                    id: Uuid::new_v4(),
                    title: format!("VAT Return ({})", month_name(reference_date, i - 1)),
                    due_date: statutory_due_date(reference_date, i, 21),
                    deadline_type: DeadlineType::Vat,
                    status: DeadlineStatus::Pending,
                    amount: None,
                    description: "File Form 002 via FIRS TaxPro Max.".to_string(),
                });
            }
        }

        // PAYE: monthly remittance by the 10th, regardless of turnover
        for i in 0..3 {
            deadlines.push(TaxDeadline {
                id: Uuid::new_v4(),
                title: format!("PAYE Remittance ({})", month_name(reference_date, i - 1)),
                due_date: statutory_due_date(reference_date, i, 10),
                deadline_type: DeadlineType::Paye,
                status: DeadlineStatus::Pending,
                amount: None,
                description: "Remit employee tax deductions to State IRS.".to_string(),
            });
        }

        // CIT: annual filing ~6 months after a December 31 fiscal
        // year-end, i.e. June 30 — this year if still ahead, else next.
        let year = reference_date.year();
        let mut cit_date = june_30(year);
        if cit_date < reference_date {
            cit_date = june_30(year + 1);
        }

        // NOTE: the NIL-vs-20% wording keys off the 25M VAT threshold,
        // not the 100M medium-business limit used by the classifier.
        // Observed behaviour of the product, kept as-is.
        let description = if profile.annual_turnover < VAT_THRESHOLD {
            "File NIL returns (0% rate for small companies)."
        } else {
            "File CIT returns (20% for medium companies)."
        };
        deadlines.push(TaxDeadline {
            id: Uuid::new_v4(),
            title: "Companies Income Tax (CIT) Filing".to_string(),
            due_date: cit_date,
            deadline_type: DeadlineType::Cit,
            status: DeadlineStatus::Pending,
            amount: None,
            description: description.to_string(),
        });

        deadlines.sort_by_key(|d| d.due_date);
        Ok(deadlines)
    }
}

/// Due date at `day` of the month `month_offset` months after the
/// reference date, rolled forward to Monday if it lands on a weekend.
fn statutory_due_date(reference: NaiveDate, month_offset: i32, day: u32) -> NaiveDate {
    let (year, month) = shift_month(reference, month_offset);
    // Days 10 and 21 exist in every month
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid statutory date {year}-{month}-{day}"));
    roll_off_weekend(date)
}

/// Saturday or Sunday rolls forward to the following Monday. Never
/// backward, and no holiday calendar is modeled.
fn roll_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + chrono::Days::new(2),
        Weekday::Sun => date + chrono::Days::new(1),
        _ => date,
    }
}

fn shift_month(reference: NaiveDate, offset: i32) -> (i32, u32) {
    let zero_based = reference.year() * 12 + reference.month0() as i32 + offset;
    (zero_based.div_euclid(12), zero_based.rem_euclid(12) as u32 + 1)
}

fn month_name(reference: NaiveDate, offset: i32) -> String {
    let (year, month) = shift_month(reference, offset);
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B").to_string())
        .unwrap_or_default()
}

fn june_30(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 6, 30).expect("June 30 exists in every year")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(turnover: Decimal) -> BusinessProfile {
        BusinessProfile {
            company_name: "Lagos Ventures Ltd".to_string(),
            registration_date: date(2020, 1, 15),
            annual_turnover: turnover,
            sector: "General Trade".to_string(),
            employee_count: 8,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn below_vat_threshold_yields_paye_and_cit_only() {
        let deadlines =
            DeadlineScheduler::generate_deadlines(&profile(dec!(5_000_000)), date(2025, 3, 3))
                .unwrap();

        assert_eq!(deadlines.len(), 4);
        assert!(
            deadlines
                .iter()
                .all(|d| d.deadline_type != DeadlineType::Vat)
        );
        let paye = deadlines
            .iter()
            .filter(|d| d.deadline_type == DeadlineType::Paye)
            .count();
        let cit = deadlines
            .iter()
            .filter(|d| d.deadline_type == DeadlineType::Cit)
            .count();
        assert_eq!(paye, 3);
        assert_eq!(cit, 1);
    }

    #[test]
    fn above_vat_threshold_yields_seven_sorted_entries() {
        let deadlines =
            DeadlineScheduler::generate_deadlines(&profile(dec!(30_000_000)), date(2025, 3, 3))
                .unwrap();

        assert_eq!(deadlines.len(), 7);
        let vat = deadlines
            .iter()
            .filter(|d| d.deadline_type == DeadlineType::Vat)
            .count();
        assert_eq!(vat, 3);
        assert!(
            deadlines
                .windows(2)
                .all(|pair| pair[0].due_date <= pair[1].due_date)
        );
    }

    #[test]
    fn turnover_exactly_at_threshold_includes_vat() {
        let deadlines =
            DeadlineScheduler::generate_deadlines(&profile(dec!(25_000_000)), date(2025, 3, 3))
                .unwrap();
        assert_eq!(deadlines.len(), 7);
    }

    #[test]
    fn weekend_due_dates_roll_to_the_following_monday() {
        // June 21 2025 is a Saturday; the June VAT return moves to Monday the 23rd
        let deadlines =
            DeadlineScheduler::generate_deadlines(&profile(dec!(30_000_000)), date(2025, 6, 1))
                .unwrap();
        let june_vat = deadlines
            .iter()
            .find(|d| d.deadline_type == DeadlineType::Vat && d.due_date.month() == 6)
            .unwrap();
        assert_eq!(june_vat.due_date, date(2025, 6, 23));
        assert_eq!(june_vat.due_date.weekday(), Weekday::Mon);

        // August 10 2025 is a Sunday; PAYE moves to Monday the 11th
        let aug_paye = deadlines
            .iter()
            .find(|d| d.deadline_type == DeadlineType::Paye && d.due_date.month() == 8)
            .unwrap();
        assert_eq!(aug_paye.due_date, date(2025, 8, 11));
    }

    #[test]
    fn monthly_entries_are_titled_after_the_prior_month() {
        let deadlines =
            DeadlineScheduler::generate_deadlines(&profile(dec!(30_000_000)), date(2025, 3, 3))
                .unwrap();
        // Returns due in March cover February
        assert!(
            deadlines
                .iter()
                .any(|d| d.title == "VAT Return (February)")
        );
        assert!(
            deadlines
                .iter()
                .any(|d| d.title == "PAYE Remittance (February)")
        );
    }

    #[test]
    fn prior_month_label_crosses_the_year_boundary() {
        let deadlines =
            DeadlineScheduler::generate_deadlines(&profile(dec!(5_000_000)), date(2025, 1, 2))
                .unwrap();
        assert!(
            deadlines
                .iter()
                .any(|d| d.title == "PAYE Remittance (December)")
        );
    }

    #[test]
    fn cit_is_due_june_30_of_the_current_year_when_still_ahead() {
        let deadlines =
            DeadlineScheduler::generate_deadlines(&profile(dec!(5_000_000)), date(2025, 3, 3))
                .unwrap();
        let cit = deadlines
            .iter()
            .find(|d| d.deadline_type == DeadlineType::Cit)
            .unwrap();
        assert_eq!(cit.due_date, date(2025, 6, 30));
    }

    #[test]
    fn cit_rolls_to_next_year_once_june_30_has_passed() {
        let deadlines =
            DeadlineScheduler::generate_deadlines(&profile(dec!(5_000_000)), date(2025, 7, 1))
                .unwrap();
        let cit = deadlines
            .iter()
            .find(|d| d.deadline_type == DeadlineType::Cit)
            .unwrap();
        assert_eq!(cit.due_date, date(2026, 6, 30));
    }

    #[test]
    fn cit_on_june_30_itself_stays_in_the_current_year() {
        let deadlines =
            DeadlineScheduler::generate_deadlines(&profile(dec!(5_000_000)), date(2025, 6, 30))
                .unwrap();
        let cit = deadlines
            .iter()
            .find(|d| d.deadline_type == DeadlineType::Cit)
            .unwrap();
        assert_eq!(cit.due_date, date(2025, 6, 30));
    }

    #[test]
    fn cit_description_keys_off_the_vat_threshold() {
        let small =
            DeadlineScheduler::generate_deadlines(&profile(dec!(5_000_000)), date(2025, 3, 3))
                .unwrap();
        let cit = small
            .iter()
            .find(|d| d.deadline_type == DeadlineType::Cit)
            .unwrap();
        assert!(cit.description.contains("NIL"));

        // 30M is still "Small" per the 100M CIT limit, but the wording
        // switches at the 25M VAT threshold
        let medium =
            DeadlineScheduler::generate_deadlines(&profile(dec!(30_000_000)), date(2025, 3, 3))
                .unwrap();
        let cit = medium
            .iter()
            .find(|d| d.deadline_type == DeadlineType::Cit)
            .unwrap();
        assert!(cit.description.contains("20%"));
    }

    #[test]
    fn every_generated_entry_starts_pending() {
        let deadlines =
            DeadlineScheduler::generate_deadlines(&profile(dec!(30_000_000)), date(2025, 3, 3))
                .unwrap();
        assert!(
            deadlines
                .iter()
                .all(|d| d.status == DeadlineStatus::Pending)
        );
    }

    #[test]
    fn negative_turnover_is_rejected() {
        let err = DeadlineScheduler::generate_deadlines(&profile(dec!(-1)), date(2025, 3, 3))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn month_window_wraps_into_the_next_year() {
        let deadlines =
            DeadlineScheduler::generate_deadlines(&profile(dec!(5_000_000)), date(2025, 12, 1))
                .unwrap();
        // Dec 10 2025 is a Wednesday, Jan 10 2026 a Saturday (rolls to the
        // 12th), Feb 10 2026 a Tuesday
        let paye_dates: Vec<NaiveDate> = deadlines
            .iter()
            .filter(|d| d.deadline_type == DeadlineType::Paye)
            .map(|d| d.due_date)
            .collect();
        assert_eq!(
            paye_dates,
            vec![date(2025, 12, 10), date(2026, 1, 12), date(2026, 2, 10)]
        );
    }
}
