//! Statutory bracket catalog: 2024 federal bracket schedules and standard
//! deductions, keyed by filing status.
//!
//! The tables are immutable statics selected by exhaustive enum match, so a
//! filing status can never be missing at runtime. The lookup functions take
//! a tax-year parameter for forward compatibility; only 2024 is populated.

use pyo3::prelude::*;

use crate::errors::{TaxkitError, TaxkitResult};
use crate::models::FilingStatus;

/// The single tax year currently populated in the catalog.
pub const DEFAULT_TAX_YEAR: i64 = 2024;

/// One bracket: income up to `threshold` (exclusive of lower brackets) is
/// taxed at `rate`. The top bracket carries `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub threshold: f64,
    pub rate: f64,
}

const fn bracket(threshold: f64, rate: f64) -> Bracket {
    Bracket { threshold, rate }
}

// 2024 federal bracket schedules (IRS Rev. Proc. 2023-34).

const SINGLE_2024: [Bracket; 7] = [
    bracket(11_600.0, 0.10),
    bracket(47_150.0, 0.12),
    bracket(100_525.0, 0.22),
    bracket(191_950.0, 0.24),
    bracket(243_725.0, 0.32),
    bracket(609_350.0, 0.35),
    bracket(f64::INFINITY, 0.37),
];

const MARRIED_FILING_JOINTLY_2024: [Bracket; 7] = [
    bracket(23_200.0, 0.10),
    bracket(94_300.0, 0.12),
    bracket(201_050.0, 0.22),
    bracket(383_900.0, 0.24),
    bracket(487_450.0, 0.32),
    bracket(731_200.0, 0.35),
    bracket(f64::INFINITY, 0.37),
];

const MARRIED_FILING_SEPARATELY_2024: [Bracket; 7] = [
    bracket(11_600.0, 0.10),
    bracket(47_150.0, 0.12),
    bracket(100_525.0, 0.22),
    bracket(191_950.0, 0.24),
    bracket(243_725.0, 0.32),
    bracket(365_600.0, 0.35),
    bracket(f64::INFINITY, 0.37),
];

const HEAD_OF_HOUSEHOLD_2024: [Bracket; 7] = [
    bracket(16_550.0, 0.10),
    bracket(63_100.0, 0.12),
    bracket(100_500.0, 0.22),
    bracket(191_950.0, 0.24),
    bracket(243_700.0, 0.32),
    bracket(609_350.0, 0.35),
    bracket(f64::INFINITY, 0.37),
];

/// The bracket schedule for the given year and filing status, in ascending
/// threshold order, terminated by an unbounded top bracket.
pub fn schedule_for(year: i64, filing_status: FilingStatus) -> TaxkitResult<&'static [Bracket]> {
    if year != DEFAULT_TAX_YEAR {
        return Err(TaxkitError::UnsupportedTaxYear(year));
    }
    Ok(match filing_status {
        FilingStatus::Single => &SINGLE_2024,
        FilingStatus::MarriedFilingJointly => &MARRIED_FILING_JOINTLY_2024,
        FilingStatus::MarriedFilingSeparately => &MARRIED_FILING_SEPARATELY_2024,
        FilingStatus::HeadOfHousehold => &HEAD_OF_HOUSEHOLD_2024,
    })
}

/// The standard deduction for the given year and filing status.
pub fn standard_deduction_for(year: i64, filing_status: FilingStatus) -> TaxkitResult<f64> {
    if year != DEFAULT_TAX_YEAR {
        return Err(TaxkitError::UnsupportedTaxYear(year));
    }
    Ok(match filing_status {
        FilingStatus::Single => 14_600.0,
        FilingStatus::MarriedFilingJointly => 29_200.0,
        FilingStatus::MarriedFilingSeparately => 14_600.0,
        FilingStatus::HeadOfHousehold => 21_900.0,
    })
}

#[pyfunction]
#[pyo3(signature = (filing_status, year=DEFAULT_TAX_YEAR))]
pub fn get_standard_deduction(filing_status: &str, year: i64) -> PyResult<f64> {
    let status = filing_status.parse::<FilingStatus>()?;
    Ok(standard_deduction_for(year, status)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_strictly_increasing_with_unbounded_top() {
        for status in FilingStatus::ALL {
            let schedule = schedule_for(DEFAULT_TAX_YEAR, status).unwrap();
            assert_eq!(schedule.len(), 7, "{status}: seven statutory brackets");
            let mut previous = 0.0;
            for bracket in schedule {
                assert!(
                    bracket.threshold > previous,
                    "{status}: thresholds must strictly increase"
                );
                assert!(bracket.rate > 0.0 && bracket.rate < 1.0);
                previous = bracket.threshold;
            }
            assert!(
                schedule[schedule.len() - 1].threshold.is_infinite(),
                "{status}: top bracket must be unbounded"
            );
        }
    }

    #[test]
    fn test_rates_non_decreasing() {
        for status in FilingStatus::ALL {
            let schedule = schedule_for(DEFAULT_TAX_YEAR, status).unwrap();
            for pair in schedule.windows(2) {
                assert!(pair[1].rate >= pair[0].rate);
            }
        }
    }

    #[test]
    fn test_standard_deductions_2024() {
        let cases = [
            (FilingStatus::Single, 14_600.0),
            (FilingStatus::MarriedFilingJointly, 29_200.0),
            (FilingStatus::MarriedFilingSeparately, 14_600.0),
            (FilingStatus::HeadOfHousehold, 21_900.0),
        ];
        for (status, expected) in cases {
            assert_eq!(
                standard_deduction_for(DEFAULT_TAX_YEAR, status).unwrap(),
                expected
            );
        }
    }

    #[test]
    fn test_unsupported_year_rejected() {
        let err = schedule_for(2023, FilingStatus::Single).unwrap_err();
        assert!(err.to_string().contains("2023"));
        let err = standard_deduction_for(2025, FilingStatus::Single).unwrap_err();
        assert!(err.to_string().contains("2025"));
    }
}
