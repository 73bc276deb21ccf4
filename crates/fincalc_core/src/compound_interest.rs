//! Compound interest projection with optional monthly contributions.
//!
//! Everything is normalized to a monthly rate and a month count:
//! - `Annual` capitalization converts the stated rate to its effective monthly
//!   equivalent, `(1 + rate)^(1/12) - 1`
//! - `Monthly` capitalization divides the nominal rate by twelve
//! - `Years` terms are multiplied by twelve
//!
//! Contributions are an ordinary annuity, deposited at the end of each month.

use crate::calculator::Calculator;
use crate::error::{Field, MAX_TERM_YEARS, ValidationErrorKind, ValidationErrors, Validator};
use crate::model::{
    CompoundInterestInput, CompoundInterestOutcome, CompoundInterestResult, TimeUnit, ValuePoint,
    round_to_cents,
};

/// Balance after `months` periods.
///
/// `monthly_rate` must be positive whenever `monthly_contribution > 0`, which the
/// rate validation guarantees.
fn future_value(
    initial_capital: f64,
    monthly_contribution: f64,
    monthly_rate: f64,
    months: i32,
) -> f64 {
    let growth = (1.0 + monthly_rate).powi(months);
    let mut amount = initial_capital * growth;
    if monthly_contribution > 0.0 {
        amount += monthly_contribution * (growth - 1.0) / monthly_rate;
    }
    amount
}

pub struct CompoundInterestEngine;

impl CompoundInterestEngine {
    /// Longest accepted `time` for a unit
    pub fn max_time(unit: TimeUnit) -> i32 {
        match unit {
            TimeUnit::Years => MAX_TERM_YEARS,
            TimeUnit::Months => TimeUnit::Years.months(MAX_TERM_YEARS),
        }
    }
}

impl Calculator for CompoundInterestEngine {
    type Input = CompoundInterestInput;
    type Output = CompoundInterestOutcome;

    fn validate(input: &CompoundInterestInput) -> Result<(), ValidationErrors> {
        Validator::new()
            .positive(
                Field::InitialCapital,
                input.initial_capital,
                ValidationErrorKind::InvalidCapital,
            )
            .rate(Field::InterestRate, input.interest_rate_pct)
            .term(Field::Time, input.time, Self::max_time(input.time_unit))
            .non_negative(
                Field::MonthlyContribution,
                input.monthly_contribution,
                ValidationErrorKind::NegativeContribution,
            )
            .finish()
    }

    fn compute(input: &CompoundInterestInput) -> CompoundInterestOutcome {
        let monthly_rate = input.capitalization.monthly_rate(input.interest_rate_pct);
        let periods = input.periods();

        let final_amount = future_value(
            input.initial_capital,
            input.monthly_contribution,
            monthly_rate,
            periods,
        );
        let interest_gained =
            final_amount - input.initial_capital - input.monthly_contribution * f64::from(periods);

        CompoundInterestOutcome {
            result: CompoundInterestResult {
                final_amount,
                interest_gained,
            },
            series: SeriesSampler::new(input).collect(),
        }
    }
}

/// Lazily samples the projection for charting and export.
///
/// - `Years`: one point per whole year, `0..=time`
/// - `Months`: a point every `max(1, time / 12)` months starting at 0, while the
///   month does not exceed `time`. The last point lands short of `time` when the
///   stride does not divide it.
///
/// Amounts are rounded to cents. The sampler is `Clone`, so a copy taken before
/// iterating replays the same sequence.
#[derive(Debug, Clone)]
pub struct SeriesSampler {
    initial_capital: f64,
    monthly_contribution: f64,
    monthly_rate: f64,
    time_unit: TimeUnit,
    time: i32,
    stride: i32,
    next_step: i32,
}

impl SeriesSampler {
    pub fn new(input: &CompoundInterestInput) -> Self {
        let stride = match input.time_unit {
            TimeUnit::Years => 1,
            TimeUnit::Months => (input.time / 12).max(1),
        };
        Self {
            initial_capital: input.initial_capital,
            monthly_contribution: input.monthly_contribution,
            monthly_rate: input.capitalization.monthly_rate(input.interest_rate_pct),
            time_unit: input.time_unit,
            time: input.time,
            stride,
            next_step: 0,
        }
    }

    /// Points left to emit
    fn remaining(&self) -> usize {
        if self.next_step > self.time {
            0
        } else {
            ((self.time - self.next_step) / self.stride + 1) as usize
        }
    }
}

impl Iterator for SeriesSampler {
    type Item = ValuePoint;

    fn next(&mut self) -> Option<ValuePoint> {
        if self.next_step > self.time {
            return None;
        }
        let step = self.next_step;
        self.next_step = step.saturating_add(self.stride);

        let (label, months_elapsed) = match self.time_unit {
            TimeUnit::Years => (format!("Ano {step}"), step.saturating_mul(12)),
            TimeUnit::Months => (format!("Mês {step}"), step),
        };
        let amount = future_value(
            self.initial_capital,
            self.monthly_contribution,
            self.monthly_rate,
            months_elapsed,
        );

        Some(ValuePoint {
            label,
            amount: round_to_cents(amount),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for SeriesSampler {}
