//! Fixed-decimal rounding shared by the sequence report and its serialized form.
//!
//! Rounded values are kept as `f64` for arithmetic and comparisons, and are
//! serialized as fixed-decimal strings ("50.00", "25.0", "3960") so that
//! consumers reading the JSON see the same text regardless of float printing.

use serde::Serializer;

/// Rounds `value` to `decimals` places, halves away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Formats an already rounded value with exactly `decimals` places.
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

pub fn serialize_fixed0<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&fixed(*value, 0))
}

pub fn serialize_fixed1<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&fixed(*value, 1))
}

pub fn serialize_fixed2<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&fixed(*value, 2))
}
