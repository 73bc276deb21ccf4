//! Explanation paragraphs shown under each result.

use fincalc_core::model::{
    CompoundInterestInput, CompoundInterestResult, FirstMillionInput, FirstMillionResult, Profile,
};

use crate::util::format::{format_currency, format_rate};

pub fn profile_explanation(profile: Profile) -> &'static str {
    match profile {
        Profile::Public => {
            "Como funcionário público, sua estabilidade permite uma reserva menor, de 3 meses de despesas."
        }
        Profile::Clt => {
            "Para profissionais CLT, recomenda-se uma reserva de 6 meses para cobrir imprevistos e transições de carreira."
        }
        Profile::Autonomous => {
            "Como autônomo ou MEI, sua renda pode variar mais, por isso é importante ter uma reserva maior, de 12 meses."
        }
    }
}

pub fn emergency_fund_explanation(profile: Profile) -> String {
    format!(
        "Recomendação: {}\nMantenha esse valor em uma aplicação com alta liquidez e segurança.",
        profile_explanation(profile)
    )
}

pub fn first_million_explanation(input: &FirstMillionInput, result: &FirstMillionResult) -> String {
    if result.goal_met_without_contributions() {
        return format!(
            "Com seu investimento inicial de {} e uma taxa de {}% ao ano, você já alcançará o primeiro milhão em {} anos sem precisar investir mensalmente!",
            format_currency(input.initial_investment),
            format_rate(input.annual_interest_rate_pct),
            input.years
        );
    }

    let breakdown = result.breakdown(input);
    format!(
        "Investindo {} por mês, junto com seu investimento inicial de {}, você alcançará R$ 1 milhão em {} anos. Você terá investido um total de {} e ganho {} em juros.",
        format_currency(result.required_monthly_contribution),
        format_currency(input.initial_investment),
        input.years,
        format_currency(breakdown.total_invested),
        format_currency(breakdown.interest_earned)
    )
}

pub fn compound_interest_explanation(
    input: &CompoundInterestInput,
    result: &CompoundInterestResult,
) -> String {
    format!(
        "A mágica dos juros compostos transformou seu investimento inicial de {} em {}.",
        format_currency(input.initial_capital),
        format_currency(result.final_amount)
    )
}
