// Formateo solo de presentación: nunca toca los valores cacheados.

use chrono::{TimeZone, Utc};

/// Importe con separador de miles y dos decimales: 3400 -> "$3,400.00"
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = (amount.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let cents = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!(
        "{}${}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        cents
    )
}

/// Fecha de pedido (epoch millis) como YYYY-MM-DD
pub fn format_order_date(epoch_millis: i64) -> String {
    match Utc.timestamp_millis_opt(epoch_millis).single() {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

/// Etiqueta del desglose mensual
pub fn month_label(month: u32) -> String {
    format!("Month {}", month)
}

/// Porcentaje acotado a [0, 100] para anchos de barra
pub fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}
