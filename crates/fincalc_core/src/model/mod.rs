mod inputs;
mod results;
mod series;

pub use inputs::{
    Capitalization, CompoundInterestInput, EmergencyFundInput, FirstMillionInput, Profile,
    TimeUnit,
};
pub use results::{
    CompoundInterestOutcome, CompoundInterestResult, ContributionBreakdown, EmergencyFundResult,
    FirstMillionResult,
};
pub use series::{ValuePoint, ValueSeries, round_to_cents};
