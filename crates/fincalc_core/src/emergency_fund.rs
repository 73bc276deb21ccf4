//! Emergency fund sizing: monthly expenses times a per-profile multiplier.

use crate::calculator::Calculator;
use crate::error::{Field, ValidationErrorKind, ValidationErrors, Validator};
use crate::model::{EmergencyFundInput, EmergencyFundResult};

pub struct EmergencyFundEngine;

impl Calculator for EmergencyFundEngine {
    type Input = EmergencyFundInput;
    type Output = EmergencyFundResult;

    fn validate(input: &EmergencyFundInput) -> Result<(), ValidationErrors> {
        Validator::new()
            .positive(
                Field::MonthlyExpenses,
                input.monthly_expenses,
                ValidationErrorKind::InvalidAmount,
            )
            .finish()
    }

    fn compute(input: &EmergencyFundInput) -> EmergencyFundResult {
        EmergencyFundResult {
            ideal_reserve: input.monthly_expenses * input.profile.multiplier(),
        }
    }
}
