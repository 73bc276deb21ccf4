//! Criterion benchmarks for fincalc_core engines
//!
//! Run with: cargo bench -p fincalc_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fincalc_core::model::{
    Capitalization, CompoundInterestInput, EmergencyFundInput, FirstMillionInput, Profile,
    TimeUnit,
};
use fincalc_core::{Calculator, CompoundInterestEngine, EmergencyFundEngine, FirstMillionEngine};

fn bench_closed_form(c: &mut Criterion) {
    let reserve = EmergencyFundInput {
        monthly_expenses: 3_000.0,
        profile: Profile::Autonomous,
    };
    c.bench_function("emergency_fund", |b| {
        b.iter(|| EmergencyFundEngine::calculate(black_box(&reserve)))
    });

    let plan = FirstMillionInput {
        initial_investment: 25_000.0,
        annual_interest_rate_pct: 9.5,
        years: 25,
    };
    c.bench_function("first_million", |b| {
        b.iter(|| FirstMillionEngine::calculate(black_box(&plan)))
    });
}

fn bench_compound_interest(c: &mut Criterion) {
    let mut group = c.benchmark_group("compound_interest");

    for (unit, time) in [(TimeUnit::Years, 10), (TimeUnit::Years, 100), (TimeUnit::Months, 1200)] {
        let input = CompoundInterestInput {
            initial_capital: 10_000.0,
            interest_rate_pct: 8.0,
            time,
            time_unit: unit,
            monthly_contribution: 500.0,
            capitalization: Capitalization::Monthly,
        };
        group.bench_with_input(
            BenchmarkId::new(format!("{unit:?}"), time),
            &input,
            |b, input| b.iter(|| CompoundInterestEngine::calculate(black_box(input))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_closed_form, bench_compound_interest);
criterion_main!(benches);
