//! Runs calculators against persisted inputs.
//!
//! The engines never see storage: the app loads the last input, lets the caller
//! edit it, runs the engine and only persists inputs that produced a result.

use std::fmt::{self, Write};
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use fincalc_core::model::ValueSeries;
use fincalc_core::{Calculator, ValidationErrors};

use crate::data::{CalculatorKind, Snapshot, SnapshotStore};
use crate::messages::format_validation_errors;
use crate::platform::{Storage, StorageError};
use crate::report::{self, ReportTemplate};
use crate::util::format::format_currency;

/// A successful calculation: the exact input used and its output
pub struct Run<T: Calculator> {
    pub input: T::Input,
    pub output: T::Output,
}

impl<T: Calculator> fmt::Debug for Run<T>
where
    T::Input: fmt::Debug,
    T::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Run")
            .field("input", &self.input)
            .field("output", &self.output)
            .finish()
    }
}

/// Why a JSON-encoded input produced no report
#[derive(Debug)]
pub enum JsonRunError {
    /// Not a JSON object in the snapshot format
    Parse(serde_json::Error),
    /// Well-formed but rejected by the calculator
    Invalid(ValidationErrors),
}

impl fmt::Display for JsonRunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonRunError::Parse(e) => write!(f, "Invalid input JSON: {}", e),
            JsonRunError::Invalid(errors) => {
                write!(f, "Verifique os campos:\n{}", format_validation_errors(errors))
            }
        }
    }
}

impl std::error::Error for JsonRunError {}

pub struct App<S> {
    snapshots: SnapshotStore<S>,
    rng: StdRng,
    persist: bool,
}

impl<S: Storage> App<S> {
    /// `seed` makes the motivational phrases reproducible
    pub fn new(storage: S, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            snapshots: SnapshotStore::new(storage),
            rng,
            persist: true,
        }
    }

    /// Disable saving inputs after successful runs
    pub fn with_persistence(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    pub fn snapshots(&self) -> &SnapshotStore<S> {
        &self.snapshots
    }

    /// Load the stored input, apply `edit`, then validate and compute.
    pub fn calculate<T>(&self, edit: impl FnOnce(&mut T::Input)) -> Result<Run<T>, ValidationErrors>
    where
        T: Calculator,
        T::Input: Snapshot,
    {
        let key = <T::Input as Snapshot>::KIND.storage_key();
        let mut input: T::Input = self.snapshots.load();
        edit(&mut input);

        let output = match T::calculate(&input) {
            Ok(output) => output,
            Err(errors) => {
                tracing::info!(key, error_count = errors.len(), "Input rejected: {errors}");
                return Err(errors);
            }
        };

        if self.persist {
            // The result is still valid when the snapshot cannot be written
            if let Err(e) = self.snapshots.save(&input) {
                tracing::warn!(key, error = %e, "Failed to save snapshot");
            }
        }
        tracing::info!(key, "Calculation complete");

        Ok(Run { input, output })
    }

    /// Render the text report with a freshly drawn motivational phrase
    pub fn report<T: ReportTemplate>(&mut self, run: &Run<T>) -> String {
        let phrase = report::pick_phrase::<T, _>(&mut self.rng);
        report::render::<T>(&run.input, &run.output, phrase)
    }

    /// Stored input of `T` in the snapshot format, for prefilling a form
    pub fn stored_json<T>(&self) -> Result<String, StorageError>
    where
        T: Calculator,
        T::Input: Snapshot,
    {
        serde_json::to_string(&self.snapshots.load::<T::Input>())
            .map_err(|e| StorageError::Serialize(e.to_string()))
    }

    /// Calculate from a whole input given in the snapshot format and render its
    /// report. Fields missing from `json` take their defaults.
    pub fn report_json<T>(&mut self, json: &str) -> Result<String, JsonRunError>
    where
        T: ReportTemplate,
        T::Input: Snapshot,
    {
        let input: T::Input = serde_json::from_str(json).map_err(JsonRunError::Parse)?;
        let run = self
            .calculate::<T>(|stored| *stored = input)
            .map_err(JsonRunError::Invalid)?;
        Ok(self.report(&run))
    }

    /// Forget the stored inputs of the given calculators
    pub fn reset(&self, kinds: &[CalculatorKind]) -> Result<(), StorageError> {
        for kind in kinds {
            self.snapshots.clear(*kind)?;
            tracing::info!(key = kind.storage_key(), "Snapshot cleared");
        }
        Ok(())
    }
}

/// Write a rendered report to `path`
pub fn export_report(path: &Path, text: &str) -> std::io::Result<()> {
    std::fs::write(path, text)?;
    tracing::info!(path = %path.display(), "Report exported");
    Ok(())
}

/// Two-column table of a projection series
pub fn series_table(series: &ValueSeries) -> String {
    let width = series.iter().map(|p| p.label.chars().count()).max().unwrap_or(0);
    let mut text = String::new();
    for point in series {
        let _ = writeln!(
            text,
            "{:<width$}  {:>18}",
            point.label,
            format_currency(point.amount),
            width = width
        );
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStorage;
    use fincalc_core::model::{
        CompoundInterestInput, EmergencyFundInput, FirstMillionInput, Profile, TimeUnit,
    };
    use fincalc_core::{CompoundInterestEngine, EmergencyFundEngine, FirstMillionEngine};

    fn app() -> App<MemoryStorage> {
        App::new(MemoryStorage::new(), Some(1))
    }

    #[test]
    fn test_valid_input_is_saved() {
        let app = app();
        let run = app
            .calculate::<EmergencyFundEngine>(|input| {
                input.monthly_expenses = 3_000.0;
                input.profile = Profile::Clt;
            })
            .unwrap();
        assert_eq!(run.output.ideal_reserve, 18_000.0);

        let stored: EmergencyFundInput = app.snapshots().load();
        assert_eq!(stored, run.input);
    }

    #[test]
    fn test_invalid_input_is_not_saved() {
        let app = app();
        let errors = app
            .calculate::<FirstMillionEngine>(|input| input.years = 0)
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(app.snapshots().storage().read("millionData").unwrap(), None);
    }

    #[test]
    fn test_later_runs_start_from_saved_input() {
        let app = app();
        app.calculate::<CompoundInterestEngine>(|input| {
            input.time = 24;
            input.time_unit = TimeUnit::Months;
        })
        .unwrap();

        // Only the capital changes; the stored term is kept
        let run = app
            .calculate::<CompoundInterestEngine>(|input| input.initial_capital = 5_000.0)
            .unwrap();
        assert_eq!(run.input.time, 24);
        assert_eq!(run.input.time_unit, TimeUnit::Months);
        assert_eq!(run.input.initial_capital, 5_000.0);
    }

    #[test]
    fn test_malformed_snapshot_falls_back_to_defaults() {
        let storage = MemoryStorage::new().with_entry("compoundInterestData", "[1, 2");
        let app = App::new(storage, Some(1));

        let run = app.calculate::<CompoundInterestEngine>(|_| {}).unwrap();
        assert_eq!(run.input, CompoundInterestInput::default());
        assert_eq!(run.output.series.len(), 6);
    }

    #[test]
    fn test_without_persistence_nothing_is_written() {
        let app = app().with_persistence(false);
        app.calculate::<FirstMillionEngine>(|_| {}).unwrap();
        assert_eq!(app.snapshots().storage().read("millionData").unwrap(), None);
    }

    #[test]
    fn test_seeded_reports_repeat() {
        let mut first = app();
        let mut second = app();
        let run_a = first.calculate::<FirstMillionEngine>(|_| {}).unwrap();
        let run_b = second.calculate::<FirstMillionEngine>(|_| {}).unwrap();
        assert_eq!(first.report(&run_a), second.report(&run_b));
    }

    #[test]
    fn test_reset() {
        let app = app();
        app.calculate::<FirstMillionEngine>(|_| {}).unwrap();
        app.reset(&CalculatorKind::ALL).unwrap();
        assert_eq!(app.snapshots().load::<FirstMillionInput>(), FirstMillionInput::default());
        assert_eq!(app.snapshots().storage().read("millionData").unwrap(), None);
    }

    #[test]
    fn test_run_debug_shows_input_and_output() {
        let errors = app().calculate::<EmergencyFundEngine>(|_| {}).unwrap_err();
        assert_eq!(errors.len(), 1);

        let run = app()
            .calculate::<EmergencyFundEngine>(|input| input.monthly_expenses = 1_000.0)
            .unwrap();
        let text = format!("{run:?}");
        assert!(text.starts_with("Run { input: EmergencyFundInput"));
        assert!(text.contains("ideal_reserve: 6000.0"));
    }

    #[test]
    fn test_report_json_uses_snapshot_format() {
        let mut app = app();
        let report = app
            .report_json::<FirstMillionEngine>(
                r#"{"initialInvestment":0,"annualInterestRate":10,"years":20}"#,
            )
            .unwrap();
        assert!(report.contains("Aporte mensal necessário: R$ 1.316,88\n"));

        let stored: serde_json::Value =
            serde_json::from_str(&app.stored_json::<FirstMillionEngine>().unwrap()).unwrap();
        assert_eq!(stored["years"], 20);
    }

    #[test]
    fn test_report_json_errors() {
        let mut app = app();
        assert!(matches!(
            app.report_json::<EmergencyFundEngine>("{\"profile\":"),
            Err(JsonRunError::Parse(_))
        ));

        let err = app
            .report_json::<EmergencyFundEngine>(r#"{"monthlyExpenses":0,"profile":"clt"}"#)
            .unwrap_err();
        assert!(matches!(err, JsonRunError::Invalid(_)));
        assert_eq!(
            err.to_string(),
            "Verifique os campos:\n  - Valor mensal dos custos fixos: Informe um valor válido\n"
        );
        assert_eq!(app.snapshots().storage().read("emergencyFundData").unwrap(), None);
    }

    #[test]
    fn test_export_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("juros-compostos.txt");
        export_report(&path, "conteúdo\n").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "conteúdo\n");
    }

    #[test]
    fn test_series_table() {
        let outcome = CompoundInterestEngine::calculate(&CompoundInterestInput::default()).unwrap();
        let table = series_table(&outcome.series);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("Ano 0"));
        assert!(lines[5].ends_with("R$ 1.610,51"));
    }
}
