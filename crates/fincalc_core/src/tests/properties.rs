//! Property-based checks shared across engines

use proptest::prelude::*;

use crate::calculator::Calculator;
use crate::compound_interest::CompoundInterestEngine;
use crate::emergency_fund::EmergencyFundEngine;
use crate::first_million::{FirstMillionEngine, TARGET_FUTURE_VALUE};
use crate::model::{
    Capitalization, CompoundInterestInput, EmergencyFundInput, FirstMillionInput, Profile,
    TimeUnit, round_to_cents,
};

fn reserve(monthly_expenses: f64, profile: Profile) -> f64 {
    EmergencyFundEngine::calculate(&EmergencyFundInput {
        monthly_expenses,
        profile,
    })
    .unwrap()
    .ideal_reserve
}

fn profile() -> impl Strategy<Value = Profile> {
    prop_oneof![
        Just(Profile::Public),
        Just(Profile::Clt),
        Just(Profile::Autonomous)
    ]
}

fn capitalization() -> impl Strategy<Value = Capitalization> {
    prop_oneof![Just(Capitalization::Monthly), Just(Capitalization::Annual)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// More expenses always need a larger reserve
    #[test]
    fn reserve_increases_with_expenses(
        expenses in 1.0f64..1_000_000.0,
        extra in 1.0f64..10_000.0,
        profile in profile(),
    ) {
        prop_assert!(reserve(expenses + extra, profile) > reserve(expenses, profile));
    }

    /// Less stable profiles never need a smaller reserve
    #[test]
    fn reserve_orders_by_profile(expenses in 0.01f64..1_000_000.0) {
        let public = reserve(expenses, Profile::Public);
        let clt = reserve(expenses, Profile::Clt);
        let autonomous = reserve(expenses, Profile::Autonomous);
        prop_assert!(autonomous >= clt);
        prop_assert!(clt >= public);
    }

    /// Investing the solved payment every month lands on the target
    #[test]
    fn payment_reaches_target(
        initial in 0.0f64..500_000.0,
        rate in 0.1f64..30.0,
        years in 1i32..=50,
    ) {
        let input = FirstMillionInput {
            initial_investment: initial,
            annual_interest_rate_pct: rate,
            years,
        };
        let pmt = FirstMillionEngine::calculate(&input).unwrap().required_monthly_contribution;
        prop_assume!(pmt > 0.0);

        let r = FirstMillionEngine::monthly_rate(rate);
        let growth = (1.0 + r).powi(years * 12);
        let projected = initial * growth + pmt * (growth - 1.0) / r;
        prop_assert!((projected - TARGET_FUTURE_VALUE).abs() < 1e-2, "projected {}", projected);
    }

    /// Once the lump sum alone reaches the target, no contribution is needed
    #[test]
    fn payment_clamps_to_zero(
        rate in 0.1f64..100.0,
        years in 1i32..=100,
        surplus in 1.01f64..10.0,
    ) {
        let r = FirstMillionEngine::monthly_rate(rate);
        let growth = (1.0 + r).powi(years * 12);
        let initial = TARGET_FUTURE_VALUE / growth * surplus;
        let input = FirstMillionInput {
            initial_investment: initial,
            annual_interest_rate_pct: rate,
            years,
        };
        let result = FirstMillionEngine::calculate(&input).unwrap();
        prop_assert_eq!(result.required_monthly_contribution, 0.0);
    }

    /// The last yearly sample is the final amount at cent precision
    #[test]
    fn last_year_matches_final_amount(
        capital in 1.0f64..1_000_000.0,
        rate in 0.1f64..=100.0,
        time in 1i32..=100,
        contribution in 0.0f64..10_000.0,
        capitalization in capitalization(),
    ) {
        let input = CompoundInterestInput {
            initial_capital: capital,
            interest_rate_pct: rate,
            time,
            time_unit: TimeUnit::Years,
            monthly_contribution: contribution,
            capitalization,
        };
        let outcome = CompoundInterestEngine::calculate(&input).unwrap();
        prop_assert_eq!(outcome.series.len(), time as usize + 1);
        let last = outcome.series.last().unwrap();
        prop_assert_eq!(last.amount, round_to_cents(outcome.result.final_amount));
        prop_assert_eq!(&last.label, &format!("Ano {time}"));
    }

    /// Twelve effective monthly periods reproduce the annual rate
    #[test]
    fn effective_monthly_rate_compounds_to_annual(rate in 0.1f64..=100.0) {
        let monthly = Capitalization::Annual.monthly_rate(rate);
        let compounded = (1.0 + monthly).powi(12);
        prop_assert!((compounded - (1.0 + rate / 100.0)).abs() < 1e-9);
    }

    /// Every violated field is reported, not just the first
    #[test]
    fn validation_reports_all_fields(
        capital in -1_000.0f64..=0.0,
        rate in prop_oneof![-10.0f64..0.1, 100.01f64..1_000.0],
        time in -10i32..1,
        contribution in -1_000.0f64..-0.01,
    ) {
        let input = CompoundInterestInput {
            initial_capital: capital,
            interest_rate_pct: rate,
            time,
            time_unit: TimeUnit::Years,
            monthly_contribution: contribution,
            capitalization: Capitalization::Annual,
        };
        let errors = CompoundInterestEngine::calculate(&input).unwrap_err();
        prop_assert_eq!(errors.len(), 4);
    }

    /// Sampled months never exceed the term and always start at zero
    #[test]
    fn monthly_samples_stay_in_term(time in 1i32..=1_200) {
        let input = CompoundInterestInput {
            time,
            time_unit: TimeUnit::Months,
            ..CompoundInterestInput::default()
        };
        let outcome = CompoundInterestEngine::calculate(&input).unwrap();
        let months: Vec<i32> = outcome
            .series
            .iter()
            .map(|p| p.label.trim_start_matches("Mês ").parse().unwrap())
            .collect();
        prop_assert_eq!(months[0], 0);
        prop_assert!(months.iter().all(|&m| m <= time));
        let stride = (time / 12).max(1);
        prop_assert!(months.windows(2).all(|w| w[1] - w[0] == stride));
        prop_assert!(time - months[months.len() - 1] < stride);
    }
}
