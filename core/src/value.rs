//! Typed field values and raw-text coercion.
//!
//! The external engine reports every field as text. [`Value::coerce`] maps
//! that text onto the narrowest JSON-compatible type: an empty field becomes
//! null, then a full-string integer parse is attempted, then a real parse of
//! the leading numeric prefix, and anything else stays a string.

use serde::Serialize;

/// A record field after type inference.
///
/// Serializes untagged, so a value lands in JSON as a number, a string, or
/// null with no wrapper object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Empty raw field. Emitted as JSON null.
    Null,
    /// Full-string integer parse succeeded.
    Integer(i64),
    /// Real parse of the leading numeric prefix succeeded.
    Real(f64),
    /// Neither numeric parse matched; the raw text, unchanged.
    Text(String),
}

impl Value {
    /// Coerces one raw text field into a typed value.
    ///
    /// The real parse accepts a leading numeric prefix even when trailing
    /// non-numeric characters remain, mirroring the engine-side parse
    /// primitive: `"7abc"` coerces to `Real(7.0)`, not to text.
    ///
    /// # Examples
    ///
    /// ```
    /// use litedump_core::Value;
    ///
    /// assert_eq!(Value::coerce(""), Value::Null);
    /// assert_eq!(Value::coerce("42"), Value::Integer(42));
    /// assert_eq!(Value::coerce("3.14"), Value::Real(3.14));
    /// assert_eq!(Value::coerce("abc"), Value::Text("abc".to_string()));
    /// ```
    pub fn coerce(raw: &str) -> Value {
        if raw.is_empty() {
            return Value::Null;
        }
        if let Ok(integer) = raw.parse::<i64>() {
            return Value::Integer(integer);
        }
        if let Some(real) = parse_leading_real(raw) {
            return Value::Real(real);
        }
        Value::Text(raw.to_string())
    }
}

/// Parses the longest prefix of `raw` that is a finite real number.
///
/// Non-finite parses (`inf`, `nan`, overflowing exponents) are rejected so
/// that such fields survive as strings instead of serializing to JSON null.
fn parse_leading_real(raw: &str) -> Option<f64> {
    for end in (1..=raw.len()).rev() {
        if !raw.is_char_boundary(end) {
            continue;
        }
        if let Ok(real) = raw[..end].parse::<f64>() {
            return real.is_finite().then_some(real);
        }
    }
    None
}
