//! User-facing wording.

use std::fmt::Write;

use fincalc_core::model::{Capitalization, Profile, TimeUnit};
use fincalc_core::{Field, FieldError, ValidationErrorKind, ValidationErrors};

pub fn profile_label(profile: Profile) -> &'static str {
    match profile {
        Profile::Public => "Funcionário Público",
        Profile::Clt => "CLT",
        Profile::Autonomous => "MEI/Autônomo",
    }
}

pub fn time_unit_label(unit: TimeUnit) -> &'static str {
    match unit {
        TimeUnit::Years => "anos",
        TimeUnit::Months => "meses",
    }
}

pub fn capitalization_label(capitalization: Capitalization) -> &'static str {
    match capitalization {
        Capitalization::Monthly => "mensal",
        Capitalization::Annual => "anual",
    }
}

/// Form label of an input field
pub fn field_label(field: Field) -> &'static str {
    match field {
        Field::MonthlyExpenses => "Valor mensal dos custos fixos",
        Field::InitialInvestment => "Valor já investido",
        Field::AnnualInterestRate => "Taxa de juros anual",
        Field::Years => "Prazo em anos",
        Field::InitialCapital => "Valor inicial",
        Field::InterestRate => "Taxa de juros",
        Field::Time => "Período",
        Field::MonthlyContribution => "Investimento mensal",
    }
}

/// Message shown next to the offending form field
pub fn field_error_message(error: &FieldError) -> &'static str {
    match (error.kind, error.field) {
        (ValidationErrorKind::InvalidAmount, _) => "Informe um valor válido",
        (ValidationErrorKind::InvalidCapital, _) => "O capital inicial deve ser maior que zero",
        (ValidationErrorKind::NegativeAmount, _) => "O valor inicial não pode ser negativo",
        (ValidationErrorKind::NegativeContribution, _) => "O valor não pode ser negativo",
        (ValidationErrorKind::RateOutOfRange, _) if error.is_below_range() => {
            "A taxa deve ser maior que 0.1%"
        }
        (ValidationErrorKind::RateOutOfRange, _) => "A taxa deve ser menor que 100%",
        (ValidationErrorKind::TermTooShort, Field::Years) => "O prazo deve ser de pelo menos 1 ano",
        (ValidationErrorKind::TermTooShort, _) => "O tempo deve ser pelo menos 1",
        (ValidationErrorKind::TermTooLong, Field::Years) => "O prazo não pode passar de 100 anos",
        (ValidationErrorKind::TermTooLong, _) => "O tempo não pode passar de 100 anos",
    }
}

/// One line per invalid field, in the order the fields were checked
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut text = String::new();
    for error in errors {
        let _ = writeln!(
            text,
            "  - {}: {}",
            field_label(error.field),
            field_error_message(error)
        );
    }
    text
}
