//! Calculator input records.
//!
//! Serialized names follow the snapshot format the calculators have always
//! persisted, so older snapshots keep loading.

use serde::{Deserialize, Serialize};

/// Employment profile used to size an emergency fund
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Public servant: stable income
    Public,
    /// Formally employed (CLT) worker
    #[default]
    Clt,
    /// Self-employed or micro-entrepreneur: variable income
    Autonomous,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Public, Profile::Clt, Profile::Autonomous];

    /// Months of expenses the reserve should cover
    pub fn multiplier(&self) -> f64 {
        match self {
            Profile::Public => 3.0,
            Profile::Clt => 6.0,
            Profile::Autonomous => 12.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmergencyFundInput {
    pub monthly_expenses: f64,
    pub profile: Profile,
}

impl Default for EmergencyFundInput {
    fn default() -> Self {
        Self {
            monthly_expenses: 0.0,
            profile: Profile::Clt,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FirstMillionInput {
    pub initial_investment: f64,
    #[serde(rename = "annualInterestRate")]
    pub annual_interest_rate_pct: f64,
    pub years: i32,
}

impl Default for FirstMillionInput {
    fn default() -> Self {
        Self {
            initial_investment: 0.0,
            annual_interest_rate_pct: 10.0,
            years: 20,
        }
    }
}

/// Unit of `CompoundInterestInput::time`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeUnit {
    #[default]
    #[serde(rename = "anos")]
    Years,
    #[serde(rename = "meses")]
    Months,
}

impl TimeUnit {
    /// Number of monthly periods covered by `time` units
    pub fn months(&self, time: i32) -> i32 {
        match self {
            TimeUnit::Years => time.saturating_mul(12),
            TimeUnit::Months => time,
        }
    }
}

/// How the stated interest rate compounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Capitalization {
    /// Nominal annual rate split evenly across months
    #[serde(rename = "mensal")]
    Monthly,
    /// Annual rate converted to its effective monthly equivalent
    #[default]
    #[serde(rename = "anual")]
    Annual,
}

impl Capitalization {
    /// Monthly compounding rate for an annual percentage
    pub fn monthly_rate(&self, rate_pct: f64) -> f64 {
        let annual = rate_pct / 100.0;
        match self {
            Capitalization::Annual => (1.0 + annual).powf(1.0 / 12.0) - 1.0,
            Capitalization::Monthly => annual / 12.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompoundInterestInput {
    pub initial_capital: f64,
    #[serde(rename = "interestRate")]
    pub interest_rate_pct: f64,
    pub time: i32,
    pub time_unit: TimeUnit,
    #[serde(rename = "monthlyInvestment")]
    pub monthly_contribution: f64,
    pub capitalization: Capitalization,
}

impl CompoundInterestInput {
    /// Total number of monthly periods
    pub fn periods(&self) -> i32 {
        self.time_unit.months(self.time)
    }
}

impl Default for CompoundInterestInput {
    fn default() -> Self {
        Self {
            initial_capital: 1_000.0,
            interest_rate_pct: 10.0,
            time: 5,
            time_unit: TimeUnit::Years,
            monthly_contribution: 0.0,
            capitalization: Capitalization::Annual,
        }
    }
}
