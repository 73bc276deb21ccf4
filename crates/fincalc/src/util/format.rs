//! Currency and rate formatting in the Brazilian real convention.

/// Group a string of decimal digits with `.` as thousands separator
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a currency value, e.g. `R$ 1.234,56`
pub fn format_currency(value: f64) -> String {
    // Rounded in decimal, so amounts of any magnitude keep every digit
    let fixed = format!("{:.2}", value.abs());
    let (reais, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let is_zero = reais.bytes().chain(cents.bytes()).all(|b| b == b'0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    format!("{}R$ {},{}", sign, group_thousands(reais), cents)
}

/// Format a currency value in compact form for chart axes (e.g., R$2,1M, R$450k, R$50)
pub fn format_compact_currency(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        let millions = format!("{:.1}", abs_value / 1_000_000.0).replace('.', ",");
        format!("{}R${}M", sign, millions)
    } else if abs_value >= 1_000.0 {
        format!("{}R${:.0}k", sign, abs_value / 1_000.0)
    } else {
        format!("{}R${:.0}", sign, abs_value)
    }
}

/// Format a percentage as typed, without trailing zeros (`10`, `10.5`)
pub fn format_rate(pct: f64) -> String {
    format!("{}", pct)
}
