use crate::error::ValidationErrors;

/// A stateless calculation engine.
///
/// Validation and computation are separate pure stages. `calculate` is the
/// gate: a result only exists for an input that passed `validate`.
pub trait Calculator {
    type Input;
    type Output;

    /// Check every constraint on `input`, reporting all violations together.
    fn validate(input: &Self::Input) -> Result<(), ValidationErrors>;

    /// Run the formula. `input` must already have passed [`Calculator::validate`];
    /// the output is unspecified otherwise.
    fn compute(input: &Self::Input) -> Self::Output;

    fn calculate(input: &Self::Input) -> Result<Self::Output, ValidationErrors> {
        Self::validate(input)?;
        Ok(Self::compute(input))
    }
}
