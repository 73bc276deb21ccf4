use serde::{Deserialize, Serialize};

use super::inputs::FirstMillionInput;
use super::series::ValueSeries;
use crate::first_million::TARGET_FUTURE_VALUE;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyFundResult {
    pub ideal_reserve: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstMillionResult {
    /// Always `>= 0`; zero when the initial investment alone reaches the target
    pub required_monthly_contribution: f64,
}

/// How the target splits between money put in and interest earned
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContributionBreakdown {
    pub total_invested: f64,
    pub interest_earned: f64,
}

impl FirstMillionResult {
    pub fn goal_met_without_contributions(&self) -> bool {
        self.required_monthly_contribution == 0.0
    }

    /// Split of the target for the input this result was computed from.
    ///
    /// When the goal is already met, `interest_earned` can be negative: the
    /// breakdown only accounts for the target, not the overshoot.
    pub fn breakdown(&self, input: &FirstMillionInput) -> ContributionBreakdown {
        let months = f64::from(input.years) * 12.0;
        let total_invested = input.initial_investment + self.required_monthly_contribution * months;
        ContributionBreakdown {
            total_invested,
            interest_earned: TARGET_FUTURE_VALUE - total_invested,
        }
    }
}

/// Totals at maturity, at full floating precision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundInterestResult {
    pub final_amount: f64,
    pub interest_gained: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompoundInterestOutcome {
    pub result: CompoundInterestResult,
    pub series: ValueSeries,
}
