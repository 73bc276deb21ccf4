use std::fmt;

/// Lowest accepted interest rate, in percent
pub const MIN_RATE_PCT: f64 = 0.1;
/// Highest accepted interest rate, in percent
pub const MAX_RATE_PCT: f64 = 100.0;
/// Longest accepted term, in years. Keeps series sampling bounded.
pub const MAX_TERM_YEARS: i32 = 100;

/// Input field a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    MonthlyExpenses,
    InitialInvestment,
    AnnualInterestRate,
    Years,
    InitialCapital,
    InterestRate,
    Time,
    MonthlyContribution,
}

impl Field {
    /// Field name as it appears in persisted snapshots
    pub fn name(&self) -> &'static str {
        match self {
            Field::MonthlyExpenses => "monthlyExpenses",
            Field::InitialInvestment => "initialInvestment",
            Field::AnnualInterestRate => "annualInterestRate",
            Field::Years => "years",
            Field::InitialCapital => "initialCapital",
            Field::InterestRate => "interestRate",
            Field::Time => "time",
            Field::MonthlyContribution => "monthlyInvestment",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which constraint an input field violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Monetary amount must be strictly positive
    InvalidAmount,
    /// Initial capital must be strictly positive
    InvalidCapital,
    /// Monetary amount must not be negative
    NegativeAmount,
    /// Monthly contribution must not be negative
    NegativeContribution,
    /// Percentage outside `[MIN_RATE_PCT, MAX_RATE_PCT]`
    RateOutOfRange,
    /// Duration below one period
    TermTooShort,
    /// Duration above `MAX_TERM_YEARS`
    TermTooLong,
}

/// A single violated constraint, with the offending value
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: Field,
    pub kind: ValidationErrorKind,
    pub value: f64,
}

impl FieldError {
    /// True when a `RateOutOfRange` error was caused by a rate below the minimum.
    /// NaN counts as below.
    pub fn is_below_range(&self) -> bool {
        !(self.value > MAX_RATE_PCT)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let FieldError { field, value, .. } = self;
        match self.kind {
            ValidationErrorKind::InvalidAmount | ValidationErrorKind::InvalidCapital => {
                write!(f, "{field} must be greater than zero (got {value})")
            }
            ValidationErrorKind::NegativeAmount | ValidationErrorKind::NegativeContribution => {
                write!(f, "{field} must not be negative (got {value})")
            }
            ValidationErrorKind::RateOutOfRange => write!(
                f,
                "{field} must be between {MIN_RATE_PCT}% and {MAX_RATE_PCT}% (got {value}%)"
            ),
            ValidationErrorKind::TermTooShort => write!(f, "{field} must be at least 1 (got {value})"),
            ValidationErrorKind::TermTooLong => {
                write!(f, "{field} exceeds the {MAX_TERM_YEARS}-year limit (got {value})")
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Every constraint violated by one input. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error reported for `field`, if any
    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn contains(&self, kind: ValidationErrorKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.errors
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input: ")?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Accumulates field errors without stopping at the first one.
#[derive(Debug, Default)]
pub(crate) struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, field: Field, kind: ValidationErrorKind, value: f64) {
        self.errors.push(FieldError { field, kind, value });
    }

    /// Requires a finite value strictly above zero
    pub fn positive(&mut self, field: Field, value: f64, kind: ValidationErrorKind) -> &mut Self {
        if !(value.is_finite() && value > 0.0) {
            self.push(field, kind, value);
        }
        self
    }

    /// Requires a finite value at or above zero
    pub fn non_negative(
        &mut self,
        field: Field,
        value: f64,
        kind: ValidationErrorKind,
    ) -> &mut Self {
        if !(value.is_finite() && value >= 0.0) {
            self.push(field, kind, value);
        }
        self
    }

    pub fn rate(&mut self, field: Field, pct: f64) -> &mut Self {
        if !(MIN_RATE_PCT..=MAX_RATE_PCT).contains(&pct) {
            self.push(field, ValidationErrorKind::RateOutOfRange, pct);
        }
        self
    }

    /// Requires `1 <= value <= max`
    pub fn term(&mut self, field: Field, value: i32, max: i32) -> &mut Self {
        if value < 1 {
            self.push(field, ValidationErrorKind::TermTooShort, value.into());
        } else if value > max {
            self.push(field, ValidationErrorKind::TermTooLong, value.into());
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                errors: std::mem::take(&mut self.errors),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validator_collects_every_error() {
        let result = Validator::new()
            .positive(Field::InitialCapital, -5.0, ValidationErrorKind::InvalidCapital)
            .rate(Field::InterestRate, 0.0)
            .term(Field::Time, 0, 100)
            .finish();

        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(ValidationErrorKind::InvalidCapital));
        assert!(errors.contains(ValidationErrorKind::RateOutOfRange));
        assert!(errors.contains(ValidationErrorKind::TermTooShort));
    }

    #[test]
    fn test_rate_bounds_are_inclusive() {
        assert!(Validator::new().rate(Field::InterestRate, 0.1).finish().is_ok());
        assert!(Validator::new().rate(Field::InterestRate, 100.0).finish().is_ok());
        assert!(Validator::new().rate(Field::InterestRate, 100.01).finish().is_err());
        assert!(Validator::new().rate(Field::InterestRate, f64::NAN).finish().is_err());
    }

    #[test]
    fn test_non_finite_amounts_rejected() {
        let errors = Validator::new()
            .positive(Field::MonthlyExpenses, f64::INFINITY, ValidationErrorKind::InvalidAmount)
            .non_negative(Field::InitialInvestment, f64::NAN, ValidationErrorKind::NegativeAmount)
            .finish()
            .unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_rate_direction() {
        let low = FieldError {
            field: Field::InterestRate,
            kind: ValidationErrorKind::RateOutOfRange,
            value: 0.05,
        };
        let high = FieldError { value: 150.0, ..low.clone() };
        assert!(low.is_below_range());
        assert!(!high.is_below_range());
    }

    #[test]
    fn test_display_lists_all_fields() {
        let errors = Validator::new()
            .positive(Field::InitialCapital, 0.0, ValidationErrorKind::InvalidCapital)
            .term(Field::Time, 500, 100)
            .finish()
            .unwrap_err();
        let text = errors.to_string();
        assert!(text.contains("initialCapital"));
        assert!(text.contains("time exceeds"));
    }
}
