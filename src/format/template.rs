//! printf-style template expansion.
//!
//! Supported placeholders: `%s`, `%d`, `%i`, `%j`, `%o` and `%%`. Unknown
//! placeholders and placeholders without a value are copied through.
//! Values left over after the template are appended space-separated.

use serde_json::Value;

use super::payload::display;

/// Expand `template` with positional `values`.
pub fn expand(template: &str, values: &[Value]) -> String {
    let mut out = String::with_capacity(template.len() + values.len() * 8);
    let mut remaining = values.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(spec @ ('s' | 'd' | 'i' | 'j' | 'o')) => {
                chars.next();
                match remaining.next() {
                    Some(value) => out.push_str(&substitute(spec, value)),
                    None => {
                        out.push('%');
                        out.push(spec);
                    }
                }
            }
            _ => out.push('%'),
        }
    }

    for value in remaining {
        out.push(' ');
        out.push_str(&display(value));
    }

    out
}

fn substitute(spec: char, value: &Value) -> String {
    match spec {
        's' => display(value),
        'd' => match to_number(value) {
            Some(n) => format_number(n),
            None => "NaN".to_string(),
        },
        'i' => match to_number(value) {
            Some(n) => format_number(n.trunc()),
            None => "NaN".to_string(),
        },
        // Value serialization cannot fail; fall back to the default form anyway.
        _ => serde_json::to_string(value).unwrap_or_else(|_| display(value)),
    }
}

fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => Some(0.0),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        _ => None,
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
