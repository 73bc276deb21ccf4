//! Plain-text result reports.
//!
//! A report always lists, in order: the inputs, the computed results, an
//! explanation paragraph and one motivational phrase. Only some calculators put
//! a blank line between inputs and results. The phrase is drawn from
//! a fixed pool of four per calculator using the caller's random source, so a
//! seeded generator gives reproducible reports.

pub mod narrative;

use std::fmt::Write;

use rand::Rng;

use fincalc_core::{Calculator, CompoundInterestEngine, EmergencyFundEngine, FirstMillionEngine};

use crate::messages::{capitalization_label, profile_label, time_unit_label};
use crate::util::format::{format_currency, format_rate};

/// One `label: value` line
pub type ReportLine = (&'static str, String);

/// The calculator-specific parts of a report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSections {
    pub inputs: Vec<ReportLine>,
    pub results: Vec<ReportLine>,
    pub explanation: String,
}

/// How a calculator's input and output are laid out in a report.
pub trait ReportTemplate: Calculator {
    const TITLE: &'static str;
    /// Default file name for exports
    const FILE_NAME: &'static str;
    const PHRASES: [&'static str; 4];
    /// Blank line between the inputs and results blocks
    const SEPARATE_RESULTS: bool = false;

    fn sections(input: &Self::Input, output: &Self::Output) -> ReportSections;
}

/// Pick one motivational phrase uniformly at random
pub fn pick_phrase<T: ReportTemplate, R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    T::PHRASES[rng.random_range(0..T::PHRASES.len())]
}

/// Render the full report text
pub fn render<T: ReportTemplate>(input: &T::Input, output: &T::Output, phrase: &str) -> String {
    let sections = T::sections(input, output);
    let mut text = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(text, "🔹 {}\n", T::TITLE);
    for (label, value) in &sections.inputs {
        let _ = writeln!(text, "{label}: {value}");
    }
    if T::SEPARATE_RESULTS {
        text.push('\n');
    }
    for (label, value) in &sections.results {
        let _ = writeln!(text, "{label}: {value}");
    }
    let _ = write!(text, "\n{}\n\n{}\n", sections.explanation, phrase);
    text
}

impl ReportTemplate for EmergencyFundEngine {
    const TITLE: &'static str = "Calculadora de Reserva de Emergência";
    const FILE_NAME: &'static str = "reserva-emergencia.txt";
    const PHRASES: [&'static str; 4] = [
        "Sua segurança financeira começa com uma boa reserva de emergência!",
        "Planeje hoje para não se preocupar amanhã.",
        "Cada real guardado é um passo em direção à sua liberdade financeira.",
        "Sua reserva de emergência é seu escudo contra imprevistos.",
    ];

    fn sections(input: &Self::Input, output: &Self::Output) -> ReportSections {
        ReportSections {
            inputs: vec![
                ("Perfil", profile_label(input.profile).to_string()),
                ("Custo fixo mensal", format_currency(input.monthly_expenses)),
            ],
            results: vec![("Reserva ideal", format_currency(output.ideal_reserve))],
            explanation: narrative::emergency_fund_explanation(input.profile),
        }
    }
}

impl ReportTemplate for FirstMillionEngine {
    const TITLE: &'static str = "Calculadora do Primeiro Milhão";
    const FILE_NAME: &'static str = "primeiro-milhao.txt";
    const PHRASES: [&'static str; 4] = [
        "O primeiro milhão é o mais difícil. Depois, o dinheiro trabalha para você!",
        "Consistência é a chave para alcançar grandes objetivos financeiros.",
        "Pequenos investimentos hoje, grandes resultados amanhã.",
        "Seu futuro milionário começa com as decisões que você toma hoje.",
    ];

    fn sections(input: &Self::Input, output: &Self::Output) -> ReportSections {
        ReportSections {
            inputs: vec![
                ("Valor já investido", format_currency(input.initial_investment)),
                (
                    "Taxa de juros anual",
                    format!("{}%", format_rate(input.annual_interest_rate_pct)),
                ),
                ("Prazo em anos", input.years.to_string()),
            ],
            results: vec![(
                "Aporte mensal necessário",
                format_currency(output.required_monthly_contribution),
            )],
            explanation: narrative::first_million_explanation(input, output),
        }
    }
}

impl ReportTemplate for CompoundInterestEngine {
    const TITLE: &'static str = "Calculadora de Juros Compostos";
    const FILE_NAME: &'static str = "juros-compostos.txt";
    const SEPARATE_RESULTS: bool = true;
    const PHRASES: [&'static str; 4] = [
        "O tempo é seu maior aliado nos investimentos. Comece hoje!",
        "Juros compostos são a oitava maravilha do mundo. Quem entende, ganha; quem não entende, paga.",
        "Pequenos investimentos consistentes geram grandes resultados ao longo do tempo.",
        "A mágica dos juros compostos transforma pequenas economias em grandes fortunas.",
    ];

    fn sections(input: &Self::Input, output: &Self::Output) -> ReportSections {
        ReportSections {
            inputs: vec![
                ("Capital inicial", format_currency(input.initial_capital)),
                (
                    "Taxa de juros",
                    format!(
                        "{}% {}",
                        format_rate(input.interest_rate_pct),
                        capitalization_label(input.capitalization)
                    ),
                ),
                (
                    "Tempo",
                    format!("{} {}", input.time, time_unit_label(input.time_unit)),
                ),
                ("Aporte mensal", format_currency(input.monthly_contribution)),
            ],
            results: vec![
                ("Montante final", format_currency(output.result.final_amount)),
                (
                    "Total de juros ganhos",
                    format_currency(output.result.interest_gained),
                ),
            ],
            explanation: narrative::compound_interest_explanation(input, &output.result),
        }
    }
}
