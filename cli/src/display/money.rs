/// Render cents as dollars with two decimals and thousands separators
/// (`123456` -> `1,234.56`)
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();

    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}.{:02}", sign, grouped, cents % 100)
}

/// `format_cents` with a leading dollar sign
pub fn format_price(cents: i64) -> String {
    format!("${}", format_cents(cents))
}
