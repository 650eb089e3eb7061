use chrono::{DateTime, Utc};

/// Currency suffix used for costs (Libyan dinar)
pub const CURRENCY_SUFFIX: &str = "د.ل";

/// Placeholder shown for absent values
pub const PLACEHOLDER: &str = "-";

/// Replace ASCII digits with Arabic-Indic digits
pub fn arabic_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => char::from_u32(0x0660 + d).unwrap_or(c),
            _ => c,
        })
        .collect()
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    arabic_digits(&date.format("%d/%m/%Y").to_string())
}

pub fn format_time(date: &DateTime<Utc>) -> String {
    arabic_digits(&date.format("%H:%M:%S").to_string())
}

pub fn format_cost(cost: Option<f64>) -> String {
    match cost {
        Some(cost) => format!("{cost:.2} {CURRENCY_SUFFIX}"),
        None => PLACEHOLDER.to_string(),
    }
}

/// Escape text for interpolation into HTML element content or attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
