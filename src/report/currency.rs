//! Currency formatting for displayed monetary values

/// Currency label used throughout the report
const CURRENCY_PREFIX: &str = "Rs.";

/// Format an INR amount with thousands separators and two fixed decimals,
/// e.g. `Rs. 320,000.00`. Applied to every monetary value the report shows.
pub fn format_inr(amount: f64) -> String {
    // Round to paise first so -0.004 does not print as "-0.00"
    let cents = (amount.abs() * 100.0).round() as u64;
    let negative = amount < 0.0 && cents > 0;

    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{} {}{}.{:02}", CURRENCY_PREFIX, sign, grouped, frac)
}
