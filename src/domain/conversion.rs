// src/domain/conversion.rs

pub const SQFT_PER_ACRE: f64 = 43_560.0;

/// Square feet to acres, rounded to 2 decimal places.
/// Zero or missing lot sizes are treated as unknown.
pub fn sqft_to_acres(sqft: Option<f64>) -> Option<f64> {
    let sqft = sqft.filter(|v| *v != 0.0)?;
    Some((sqft / SQFT_PER_ACRE * 100.0).round() / 100.0)
}

/// `1234567` -> `"$1,234,567"`.
pub fn format_usd(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
