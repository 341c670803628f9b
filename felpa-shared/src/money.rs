use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Exact base-10 money value. All pricing math runs on this; binary floats
/// drift on the tax and margin multiplications and break the rounding
/// guarantees customers are quoted under.
pub type Amount = Decimal;

/// Smallest whole currency amount covering `value`. Quoted totals always
/// round up, never to nearest.
pub fn round_up(value: Amount) -> i64 {
    value.ceil().to_i64().unwrap_or(i64::MAX)
}

/// Whole-unit currency for customer-facing text, e.g. "$1,234".
pub fn format_whole(value: i64) -> String {
    let grouped = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
