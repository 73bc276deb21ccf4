//! Monthly contribution needed to reach a fixed future value.
//!
//! Solves the ordinary-annuity payment that closes the gap between the future
//! value of the initial investment and [`TARGET_FUTURE_VALUE`], compounding
//! monthly at the nominal annual rate divided by twelve.

use crate::calculator::Calculator;
use crate::error::{Field, MAX_TERM_YEARS, ValidationErrorKind, ValidationErrors, Validator};
use crate::model::{FirstMillionInput, FirstMillionResult};

/// The goal every plan solves for
pub const TARGET_FUTURE_VALUE: f64 = 1_000_000.0;

pub struct FirstMillionEngine;

impl FirstMillionEngine {
    /// Monthly rate for a nominal annual percentage
    pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
        annual_rate_pct / 100.0 / 12.0
    }
}

impl Calculator for FirstMillionEngine {
    type Input = FirstMillionInput;
    type Output = FirstMillionResult;

    fn validate(input: &FirstMillionInput) -> Result<(), ValidationErrors> {
        Validator::new()
            .non_negative(
                Field::InitialInvestment,
                input.initial_investment,
                ValidationErrorKind::NegativeAmount,
            )
            .rate(Field::AnnualInterestRate, input.annual_interest_rate_pct)
            .term(Field::Years, input.years, MAX_TERM_YEARS)
            .finish()
    }

    fn compute(input: &FirstMillionInput) -> FirstMillionResult {
        let months = input.years * 12;
        let r = Self::monthly_rate(input.annual_interest_rate_pct);
        let growth = (1.0 + r).powi(months);
        let initial_at_maturity = input.initial_investment * growth;

        // Validation keeps the rate at or above 0.1%, so r > 0 and growth > 1:
        // the denominator cannot vanish.
        let payment = (TARGET_FUTURE_VALUE - initial_at_maturity) * r / (growth - 1.0);

        // A negative payment means the initial investment alone overshoots.
        FirstMillionResult {
            required_monthly_contribution: payment.max(0.0),
        }
    }
}
