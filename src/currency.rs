// USD price formatting, shared by the menu listing and the summary.

/// Format an amount in en-US dollar style: `$` sign, comma grouping,
/// two fraction digits, cents rounded half-up. Non-finite input yields
/// an empty string rather than panicking.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return String::new();
    }
    let negative = amount < 0.0;
    // Work in whole cents to avoid float artifacts in the fraction.
    let cents_total = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents_total / 100).to_string();
    let cents = cents_total % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${}.{:02}", grouped, cents)
    } else {
        format!("${}.{:02}", grouped, cents)
    }
}

/// Format a price supplied as text. Trims and parses the input first;
/// anything non-numeric produces `None` instead of an error.
pub fn format_currency_text(raw: &str) -> Option<String> {
    raw.trim().parse::<f64>().ok().map(format_currency)
}
