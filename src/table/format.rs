// src/table/format.rs
use serde_json::Value;

use super::StatsRow;
use super::columns::RANK_KEY;

pub const PLACEHOLDER: &str = "-";

/// Rate columns shown with two decimals.
pub static TWO_DECIMAL_KEYS: &[&str] = &["avg", "econ", "sr", "bat_avg", "bowl_avg"];

pub fn format_value(value: Option<&Value>, key: &str) -> String {
    match value {
        None | Some(Value::Null) => s!(PLACEHOLDER),
        Some(Value::String(s)) if s.is_empty() => s!(PLACEHOLDER),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => {
            if TWO_DECIMAL_KEYS.contains(&key) {
                if let Some(f) = n.as_f64() {
                    // ties round away from zero (12.125 → "12.13")
                    return format!("{:.2}", (f * 100.0).round() / 100.0);
                }
            }
            format_number(n)
        }
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

// Integral floats print without a fraction ("3", not "3.0").
fn format_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => format!("{}", f),
        None => n.to_string(),
    }
}

/// `no` when it is a positive whole number; the 1-based position when `no`
/// is absent or not numeric. A numeric `no` that is not a positive whole
/// number (`1.5`, `0`, `-2`) ranks nothing and so earns no medal.
pub fn rank_for_row(row: &StatsRow, index: usize) -> Option<u64> {
    match row.get(RANK_KEY) {
        Some(Value::Number(n)) => {
            if let Some(u) = n.as_u64() {
                return (u > 0).then_some(u);
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f >= 1.0 && f.fract() == 0.0 => Some(f as u64),
                _ => None,
            }
        }
        _ => Some(index as u64 + 1),
    }
}

pub fn medal(rank: u64) -> Option<&'static str> {
    match rank {
        1 => Some("🥇"),
        2 => Some("🥈"),
        3 => Some("🥉"),
        _ => None,
    }
}
