//! Command-line front end.
//!
//! Every flag is optional: an omitted flag keeps the value from the last
//! successful run of that calculator, or its default on a first run.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::WrapErr;

use fincalc_core::model::{
    Capitalization, CompoundInterestInput, EmergencyFundInput, FirstMillionInput, Profile, TimeUnit,
};
use fincalc_core::{CompoundInterestEngine, EmergencyFundEngine, FirstMillionEngine};

use crate::app::{App, Run, export_report, series_table};
use crate::chart;
use crate::data::CalculatorKind;
use crate::messages::format_validation_errors;
use crate::platform::Storage;
use crate::report::ReportTemplate;

/// Exit status when an input is rejected
pub const EXIT_INVALID_INPUT: u8 = 2;

const CHART_HEIGHT: u16 = 16;

#[derive(Parser, Debug)]
#[command(name = "fincalc")]
#[command(about = "Personal finance calculators: emergency fund, first million and compound interest")]
pub struct Args {
    /// Path to the data directory (default: ~/.fincalc/)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,

    /// Seed for the motivational phrase
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Do not remember the inputs of this run
    #[arg(long, global = true)]
    pub no_save: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ideal emergency reserve for an employment profile
    Emergency(EmergencyArgs),
    /// Monthly contribution needed to reach R$ 1.000.000
    Million(MillionArgs),
    /// Compound growth with monthly contributions
    Compound(CompoundArgs),
    /// Forget stored inputs (all calculators when none is named)
    Reset {
        #[arg(value_enum)]
        calculator: Option<CalculatorArg>,
    },
}

#[derive(ClapArgs, Debug, Default)]
pub struct OutputArgs {
    /// Also write the report to a file (default name when PATH is omitted)
    #[arg(long, value_name = "PATH")]
    pub export: Option<Option<PathBuf>>,
}

#[derive(ClapArgs, Debug)]
pub struct EmergencyArgs {
    /// Monthly fixed expenses (R$)
    #[arg(long, allow_negative_numbers = true)]
    pub expenses: Option<f64>,

    #[arg(long, value_enum)]
    pub profile: Option<ProfileArg>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(ClapArgs, Debug)]
pub struct MillionArgs {
    /// Amount already invested (R$)
    #[arg(long, allow_negative_numbers = true)]
    pub initial: Option<f64>,

    /// Annual interest rate (%)
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub years: Option<i32>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(ClapArgs, Debug)]
pub struct CompoundArgs {
    /// Initial capital (R$)
    #[arg(long, allow_negative_numbers = true)]
    pub capital: Option<f64>,

    /// Interest rate (%) per capitalization period
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub time: Option<i32>,

    #[arg(long, value_enum)]
    pub unit: Option<UnitArg>,

    /// Monthly contribution (R$)
    #[arg(long, allow_negative_numbers = true)]
    pub contribution: Option<f64>,

    #[arg(long, value_enum)]
    pub capitalization: Option<CapitalizationArg>,

    /// Draw the growth chart below the report
    #[arg(long)]
    pub chart: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileArg {
    Public,
    Clt,
    Autonomous,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Public => Profile::Public,
            ProfileArg::Clt => Profile::Clt,
            ProfileArg::Autonomous => Profile::Autonomous,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitArg {
    Anos,
    Meses,
}

impl From<UnitArg> for TimeUnit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Anos => TimeUnit::Years,
            UnitArg::Meses => TimeUnit::Months,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapitalizationArg {
    Mensal,
    Anual,
}

impl From<CapitalizationArg> for Capitalization {
    fn from(arg: CapitalizationArg) -> Self {
        match arg {
            CapitalizationArg::Mensal => Capitalization::Monthly,
            CapitalizationArg::Anual => Capitalization::Annual,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorArg {
    Emergency,
    Million,
    Compound,
}

impl From<CalculatorArg> for CalculatorKind {
    fn from(arg: CalculatorArg) -> Self {
        match arg {
            CalculatorArg::Emergency => CalculatorKind::EmergencyFund,
            CalculatorArg::Million => CalculatorKind::FirstMillion,
            CalculatorArg::Compound => CalculatorKind::CompoundInterest,
        }
    }
}

impl EmergencyArgs {
    pub fn apply(&self, input: &mut EmergencyFundInput) {
        if let Some(expenses) = self.expenses {
            input.monthly_expenses = expenses;
        }
        if let Some(profile) = self.profile {
            input.profile = profile.into();
        }
    }
}

impl MillionArgs {
    pub fn apply(&self, input: &mut FirstMillionInput) {
        if let Some(initial) = self.initial {
            input.initial_investment = initial;
        }
        if let Some(rate) = self.rate {
            input.annual_interest_rate_pct = rate;
        }
        if let Some(years) = self.years {
            input.years = years;
        }
    }
}

impl CompoundArgs {
    pub fn apply(&self, input: &mut CompoundInterestInput) {
        if let Some(capital) = self.capital {
            input.initial_capital = capital;
        }
        if let Some(rate) = self.rate {
            input.interest_rate_pct = rate;
        }
        if let Some(time) = self.time {
            input.time = time;
        }
        if let Some(unit) = self.unit {
            input.time_unit = unit.into();
        }
        if let Some(contribution) = self.contribution {
            input.monthly_contribution = contribution;
        }
        if let Some(capitalization) = self.capitalization {
            input.capitalization = capitalization.into();
        }
    }
}

/// Run one command and map rejected input to [`EXIT_INVALID_INPUT`]
pub fn execute<S: Storage>(app: &mut App<S>, command: Command) -> color_eyre::Result<ExitCode> {
    match command {
        Command::Emergency(args) => match app.calculate::<EmergencyFundEngine>(|i| args.apply(i)) {
            Ok(run) => finish(app, &run, &args.output, None),
            Err(errors) => Ok(rejected(&errors)),
        },
        Command::Million(args) => match app.calculate::<FirstMillionEngine>(|i| args.apply(i)) {
            Ok(run) => finish(app, &run, &args.output, None),
            Err(errors) => Ok(rejected(&errors)),
        },
        Command::Compound(args) => {
            match app.calculate::<CompoundInterestEngine>(|i| args.apply(i)) {
                Ok(run) => {
                    let series = &run.output.series;
                    let code = finish(app, &run, &args.output, Some(series_table(series)))?;
                    if args.chart {
                        chart::print_inline(series, CHART_HEIGHT)
                            .wrap_err("Failed to draw chart")?;
                    }
                    Ok(code)
                }
                Err(errors) => Ok(rejected(&errors)),
            }
        }
        Command::Reset { calculator } => {
            let kinds: Vec<CalculatorKind> = match calculator {
                Some(arg) => vec![arg.into()],
                None => CalculatorKind::ALL.to_vec(),
            };
            app.reset(&kinds).wrap_err("Failed to clear stored inputs")?;
            println!("Dados apagados.");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn finish<S: Storage, T: ReportTemplate>(
    app: &mut App<S>,
    run: &Run<T>,
    output: &OutputArgs,
    appendix: Option<String>,
) -> color_eyre::Result<ExitCode> {
    let report = app.report(run);
    print!("{report}");
    if let Some(appendix) = appendix {
        println!();
        print!("{appendix}");
    }

    if let Some(target) = &output.export {
        let path = target.as_deref().unwrap_or(Path::new(T::FILE_NAME));
        export_report(path, &report)
            .wrap_err_with(|| format!("Failed to export report to {}", path.display()))?;
        println!();
        println!("Relatório salvo em {}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}

fn rejected(errors: &fincalc_core::ValidationErrors) -> ExitCode {
    eprintln!("Verifique os campos:");
    eprint!("{}", format_validation_errors(errors));
    ExitCode::from(EXIT_INVALID_INPUT)
}
