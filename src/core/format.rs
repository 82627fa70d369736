//! Display formatting helpers for currency and durations

/// Format a dollar amount in en-US style (e.g., `$8,950.00`).
#[must_use]
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let remainder = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{remainder:02}")
}

/// Format a years + months duration (e.g., `1 year 8 months`).
///
/// Returns an em dash when both components are zero.
#[must_use]
pub fn format_term_duration(years: u32, months: u32) -> String {
    if years == 0 && months == 0 {
        return "\u{2014}".to_string();
    }
    let year_label = if years == 1 { "year" } else { "years" };
    let month_label = if months == 1 { "month" } else { "months" };
    if years > 0 && months > 0 {
        format!("{years} {year_label} {months} {month_label}")
    } else if years > 0 {
        format!("{years} {year_label}")
    } else {
        format!("{months} {month_label}")
    }
}
