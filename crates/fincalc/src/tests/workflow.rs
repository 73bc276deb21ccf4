use std::fs;

use fincalc_core::model::{FirstMillionInput, TimeUnit};
use fincalc_core::{CompoundInterestEngine, EmergencyFundEngine, FirstMillionEngine};

use crate::app::{App, export_report};
use crate::data::CalculatorKind;
use crate::platform::{NativeStorage, Storage};
use crate::report::ReportTemplate;

fn native_app(dir: &std::path::Path) -> App<NativeStorage> {
    App::new(NativeStorage::new(dir.to_path_buf()), Some(11))
}

#[test]
fn test_inputs_survive_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let app = native_app(dir.path());
        app.calculate::<FirstMillionEngine>(|input| {
            input.initial_investment = 5_000.0;
            input.annual_interest_rate_pct = 12.0;
            input.years = 10;
        })
        .unwrap();
    }

    let stored = fs::read_to_string(dir.path().join("snapshots/millionData.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(json["initialInvestment"], 5_000.0);
    assert_eq!(json["annualInterestRate"], 12.0);
    assert_eq!(json["years"], 10);

    // A new process starts from the stored input
    let app = native_app(dir.path());
    let run = app.calculate::<FirstMillionEngine>(|_| {}).unwrap();
    assert_eq!(
        run.input,
        FirstMillionInput {
            initial_investment: 5_000.0,
            annual_interest_rate_pct: 12.0,
            years: 10,
        }
    );
    assert!((run.output.required_monthly_contribution - 4_275.36).abs() < 0.01);
}

#[test]
fn test_rejected_input_keeps_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let app = native_app(dir.path());

    app.calculate::<EmergencyFundEngine>(|input| input.monthly_expenses = 2_000.0)
        .unwrap();
    let before = app.snapshots().storage().read("emergencyFundData").unwrap();

    let errors = app
        .calculate::<EmergencyFundEngine>(|input| input.monthly_expenses = 0.0)
        .unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(app.snapshots().storage().read("emergencyFundData").unwrap(), before);
}

#[test]
fn test_export_first_million_report() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = native_app(dir.path());

    let run = app.calculate::<FirstMillionEngine>(|_| {}).unwrap();
    let report = app.report(&run);
    let path = dir.path().join(FirstMillionEngine::FILE_NAME);
    export_report(&path, &report).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("🔹 Calculadora do Primeiro Milhão\n"));
    assert!(text.contains("Aporte mensal necessário: R$ 1.316,88\n"));
    assert!(
        FirstMillionEngine::PHRASES
            .iter()
            .any(|phrase| text.ends_with(&format!("{phrase}\n")))
    );
}

#[test]
fn test_reset_one_calculator() {
    let dir = tempfile::tempdir().unwrap();
    let app = native_app(dir.path());

    app.calculate::<FirstMillionEngine>(|_| {}).unwrap();
    app.calculate::<CompoundInterestEngine>(|input| {
        input.time = 18;
        input.time_unit = TimeUnit::Months;
    })
    .unwrap();

    app.reset(&[CalculatorKind::CompoundInterest]).unwrap();
    assert!(!dir.path().join("snapshots/compoundInterestData.json").exists());
    assert!(dir.path().join("snapshots/millionData.json").exists());

    // Resetting twice is fine
    app.reset(&[CalculatorKind::CompoundInterest]).unwrap();
}
