//! Shared scalar adapters used across entity mappings

use serde_json::Value;

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Review rating (0-10 scale) to a star rating out of five,
/// rounded to the nearest half star
pub fn five_star_rating(value: &Value) -> Value {
    match as_f64(value) {
        Some(rating) => Value::from((rating.round() / 2.0).clamp(0.0, 5.0)),
        None => value.clone(),
    }
}

/// Raw certificate code to a display certificate.
/// Placeholder values ("--", empty) become an empty string.
pub fn certificate(value: &Value) -> Value {
    match value {
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() || s == "--" {
                Value::String(String::new())
            } else {
                Value::String(s.to_uppercase())
            }
        }
        // Numeric certificates (e.g. 12, 15, 18) come through as numbers
        Value::Number(n) => Value::String(n.to_string()),
        _ => Value::String(String::new()),
    }
}

/// Duration in seconds to a compact display form ("1h 25m", "45m")
pub fn duration(value: &Value) -> Value {
    match as_i64(value) {
        Some(secs) if secs >= 0 => {
            let minutes = (secs + 59) / 60;
            let (h, m) = (minutes / 60, minutes % 60);
            if h > 0 {
                Value::String(format!("{}h {}m", h, m))
            } else {
                Value::String(format!("{}m", m))
            }
        }
        _ => value.clone(),
    }
}

/// Synopsis cleanup: trim surrounding whitespace, null becomes empty
pub fn synopsis(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.trim().to_string()),
        Value::Null => Value::String(String::new()),
        _ => value.clone(),
    }
}
