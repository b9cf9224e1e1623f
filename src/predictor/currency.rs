/// Formats a price as `€12,345.67`. Negative amounts render as `-€12.50`.
///
/// Rounds the exact binary value to two decimals, ties to even.
pub fn format_euro(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let is_zero = whole.bytes().chain(fraction.bytes()).all(|b| b == b'0');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };
    format!("{}€{}.{}", sign, grouped, fraction)
}
